use crate::app::AppState;
use crate::domain::TimerMode;
use crate::ui::styles::{
    active_tab_style, border_style, clock_style, hint_style, mood_style, title_style,
};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Mode selector line, the active mode highlighted
fn mode_tabs(active: TimerMode) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, mode) in TimerMode::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let label = format!(" {} {} ", mode.hotkey(), mode.name());
        if *mode == active {
            spans.push(Span::styled(label, active_tab_style()));
        } else {
            spans.push(Span::styled(label, hint_style()));
        }
    }
    Line::from(spans)
}

/// Wall-clock time at which a countdown with `remaining_seconds` left will end
fn finish_time(now: DateTime<Local>, remaining_seconds: u32) -> String {
    let end = now + chrono::Duration::seconds(i64::from(remaining_seconds));
    end.format("%H:%M").to_string()
}

/// Render the timer pane: mode tabs, clock, run state and mood
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let running = app.timer.is_running();

    let status = if running {
        format!("running · ends at {}", finish_time(Local::now(), app.timer.remaining_seconds()))
    } else {
        "stopped".to_string()
    };

    let mood = app.mood.state();
    let lines = vec![
        mode_tabs(app.timer.mode()),
        Line::raw(""),
        Line::from(Span::styled(app.timer.display(), clock_style(running))),
        Line::from(Span::styled(status, hint_style())),
        Line::raw(""),
        Line::from(Span::styled(
            format!("{}  {}", mood.glyph(), app.mood.message()),
            mood_style(mood),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" FocusFlow ", title_style())),
    );

    f.render_widget(paragraph, area);
}
