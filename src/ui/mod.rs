pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod notepad_pane;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_time_up_modal;
use notepad_pane::render_notepad_pane;
use ratatui::Frame;
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app.ui_mode, app.save_error.as_deref(), layout.keybindings_area);

    render_timer_pane(f, app, layout.timer_area);
    render_task_pane(f, app, layout.task_area);
    render_notepad_pane(f, app, layout.notepad_area);

    // Alert goes on top of everything
    if app.ui_mode == UiMode::TimeUp {
        render_time_up_modal(f, app, size);
    }
}
