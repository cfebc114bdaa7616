use crate::app::AppState;
use crate::domain::{Task, UiMode};
use crate::ui::styles::{
    border_style, default_style, done_style, gauge_style, hint_style, modal_title_style,
    selected_style, title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

/// Create a single line for a task
fn create_task_line(task: &Task) -> Line<'static> {
    let (check, text_style) = if task.completed {
        ("[x] ", done_style())
    } else {
        ("[ ] ", default_style())
    };
    Line::from(vec![
        Span::raw(check),
        Span::styled(task.text.clone(), text_style),
    ])
}

/// Render the task pane: input line, task list and progress
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Tasks ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input line
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Progress label
            Constraint::Length(1), // Gauge
        ])
        .split(inner);

    let input_line = if app.ui_mode == UiMode::AddingTask {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.task_input.clone(), modal_title_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ])
    } else {
        Line::from(Span::styled("press a to add a task", hint_style()))
    };
    f.render_widget(Paragraph::new(input_line), chunks[0]);

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let item = ListItem::new(create_task_line(task));
            if idx == app.selected_index && app.ui_mode == UiMode::Normal {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect();
    f.render_widget(List::new(items), chunks[1]);

    let progress = app.progress();
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(progress.label(), title_style()))),
        chunks[2],
    );

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .percent(progress.percent().min(100))
        .label(format!("{}%", progress.percent()));
    f.render_widget(gauge, chunks[3]);
}
