use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, selected_style};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the scratchpad
pub fn render_notepad_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let is_editing = app.ui_mode == UiMode::EditingNotepad;

    let title = if is_editing {
        " Scratchpad - [Editing] "
    } else {
        " Scratchpad "
    };

    let style = if is_editing {
        selected_style()
    } else {
        border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(style);

    let lines: Vec<Line> = app
        .notepad
        .text()
        .split('\n')
        .map(|line| Line::raw(line.to_string()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);

    if is_editing {
        let (row, col) = cursor_row_col(app.notepad.text(), app.notepad_cursor.pos);

        // Account for border (1 char) and position within the text area
        let cursor_x = area.x + 1 + col as u16;
        let cursor_y = area.y + 1 + row as u16;

        // Only show cursor if it's within bounds
        if cursor_x < area.x + area.width - 1 && cursor_y < area.y + area.height - 1 {
            f.set_cursor(cursor_x, cursor_y);
        }
    }
}

/// Row and column (in chars) of a byte offset, ignoring wrapping
fn cursor_row_col(text: &str, pos: usize) -> (usize, usize) {
    let before = &text[..pos.min(text.len())];
    let row = before.matches('\n').count();
    let col = before
        .rsplit('\n')
        .next()
        .map(|l| l.chars().count())
        .unwrap_or(0);
    (row, col)
}
