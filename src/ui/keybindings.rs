use crate::domain::UiMode;
use crate::ui::styles::{error_style, hint_style};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current mode.
/// A pending save failure takes the bar's place until a save succeeds.
pub fn render_keybindings(f: &mut Frame, ui_mode: UiMode, save_error: Option<&str>, area: Rect) {
    if let Some(message) = save_error {
        let paragraph = Paragraph::new(Line::raw(format!(" {}", message))).style(error_style());
        f.render_widget(paragraph, area);
        return;
    }

    let hints = match ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" 1/2/3 mode   "),
            Span::raw("s start   "),
            Span::raw("p pause   "),
            Span::raw("r reset   "),
            Span::raw("a add   "),
            Span::raw("Enter done   "),
            Span::raw("x delete   "),
            Span::raw("n notes   "),
            Span::raw("q quit"),
        ]),
        UiMode::AddingTask => Line::raw(" Enter add task   Esc cancel"),
        UiMode::EditingNotepad => Line::raw(" Type to edit (saved as you go)   ←/→ move   Esc done"),
        UiMode::TimeUp => Line::raw(" Enter/Esc dismiss"),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
