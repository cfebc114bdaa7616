use crate::app::AppState;
use crate::domain::{TimerMode, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_task_input_mode(app, key),
        UiMode::EditingNotepad => handle_notepad_editing_mode(app, key),
        UiMode::TimeUp => handle_time_up_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let now = Instant::now();

    // Mode selection
    if let KeyCode::Char(c) = key.code {
        if let Some(mode) = TimerMode::from_hotkey(c) {
            app.select_mode(mode, now)?;
            return Ok(false);
        }
    }

    match key.code {
        // Timer controls
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.start_timer(now);
            Ok(false)
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.pause_timer(now);
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer(now);
            Ok(false)
        }

        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completion
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected(now);
            Ok(false)
        }

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Edit notepad
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.start_edit_notepad();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while typing a new task
fn handle_task_input_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_task_input(),
        KeyCode::Esc => app.cancel_task_input(),
        KeyCode::Backspace => app.task_input_backspace(),
        KeyCode::Char(c) => app.task_input_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in notepad editing mode. Every edit is saved immediately.
fn handle_notepad_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Exit notepad editing mode (only Esc)
        KeyCode::Esc => app.stop_edit_notepad(),
        KeyCode::Left => app.notepad_cursor.left(&app.notepad),
        KeyCode::Right => app.notepad_cursor.right(&app.notepad),
        KeyCode::Home => app.notepad_cursor.home(),
        KeyCode::End => app.notepad_cursor.end(&app.notepad),
        KeyCode::Enter => app.notepad_insert('\n'),
        KeyCode::Tab => app.notepad_insert('\t'),
        KeyCode::Backspace => app.notepad_backspace(),
        KeyCode::Delete => app.notepad_delete(),
        KeyCode::Char(c) => app.notepad_insert(c),
        _ => {}
    }
    Ok(false)
}

/// The "Time's up!" alert swallows everything until acknowledged
fn handle_time_up_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        app.dismiss_time_up(Instant::now());
    }
    Ok(false)
}
