use crate::domain::{MoodState, Progress, TimerMode, UiMode};
use crate::mood::Mood;
use crate::notepad::{Notepad, NotepadCursor};
use crate::notifications;
use crate::persistence::{Settings, Store};
use crate::tasks::TaskList;
use crate::timer::{TimerEngine, TimerEvent};
use anyhow::Result;
use std::time::Instant;

/// Main application state.
///
/// Owns one instance of every component and relays timer and task
/// notifications to the mood indicator.
pub struct AppState {
    pub timer: TimerEngine,
    pub mood: Mood,
    pub tasks: TaskList,
    pub notepad: Notepad,
    pub notepad_cursor: NotepadCursor,
    pub settings: Settings,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    pub task_input: String,
    /// Mode whose countdown just ran out, while the alert is showing
    pub time_up: Option<TimerMode>,
    /// Mode to return to once the alert is dismissed
    pub mode_before_alert: UiMode,
    /// Last save failure, cleared by the next successful save
    pub save_error: Option<String>,
    store: Box<dyn Store>,
}

impl AppState {
    pub fn new(settings: Settings, store: Box<dyn Store>) -> Self {
        let tasks = TaskList::load_all(&*store);
        let notepad = Notepad::load_once(&*store);
        let notepad_cursor = NotepadCursor::at_end(&notepad);
        let timer = TimerEngine::new(settings.clone());

        Self {
            timer,
            mood: Mood::new(),
            tasks,
            notepad,
            notepad_cursor,
            settings,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            task_input: String::new(),
            time_up: None,
            mode_before_alert: UiMode::Normal,
            save_error: None,
            store,
        }
    }

    /// Advance scheduled work: the countdown tick and the mood auto-return
    pub fn tick(&mut self, now: Instant) {
        self.timer.poll(now);
        self.relay_timer_events(now);
        self.mood.poll(now);
    }

    // Timer

    /// Switch timer mode, resetting any running countdown first
    pub fn select_mode(&mut self, mode: TimerMode, now: Instant) -> Result<()> {
        self.timer.reset();
        self.timer.select_mode(mode)?;
        self.relay_timer_events(now);
        Ok(())
    }

    pub fn start_timer(&mut self, now: Instant) {
        self.timer.start(now);
        self.relay_timer_events(now);
    }

    pub fn pause_timer(&mut self, now: Instant) {
        self.timer.pause();
        self.relay_timer_events(now);
    }

    pub fn reset_timer(&mut self, now: Instant) {
        self.timer.reset();
        self.relay_timer_events(now);
    }

    /// Close the "Time's up!" alert. The celebration starts once it is acknowledged.
    pub fn dismiss_time_up(&mut self, now: Instant) {
        if self.time_up.take().is_some() {
            self.mood.set(MoodState::Happy, now);
        }
        self.ui_mode = self.mode_before_alert;
        self.mode_before_alert = UiMode::Normal;
    }

    fn relay_timer_events(&mut self, now: Instant) {
        for event in self.timer.take_events() {
            match event {
                TimerEvent::Started(mode) => self.mood.set(mode.running_mood(), now),
                TimerEvent::Paused | TimerEvent::Reset => self.mood.set(MoodState::Neutral, now),
                TimerEvent::Completed => {
                    let mode = self.timer.mode();
                    self.time_up = Some(mode);
                    if self.ui_mode != UiMode::TimeUp {
                        self.mode_before_alert = self.ui_mode;
                    }
                    self.ui_mode = UiMode::TimeUp;
                    if self.settings.desktop_notifications {
                        notifications::notify_time_up(mode.name());
                    }
                }
                TimerEvent::Display(_) => {}
            }
        }
    }

    /// Record the outcome of a store write. A failure is kept on screen and
    /// the session goes on; the next mutation rewrites the whole snapshot.
    fn note_save<T>(&mut self, result: Result<T>) {
        match result {
            Ok(_) => self.save_error = None,
            Err(err) => {
                tracing::warn!(error = %err, "save failed, keeping changes in memory");
                self.save_error = Some(format!("Save failed: {}", err));
            }
        }
    }

    // Tasks

    pub fn progress(&self) -> Progress {
        self.tasks.progress()
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    pub fn start_add_task(&mut self) {
        self.task_input.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn task_input_add_char(&mut self, c: char) {
        self.task_input.push(c);
    }

    pub fn task_input_backspace(&mut self) {
        self.task_input.pop();
    }

    /// Add the typed task. Blank input leaves the list untouched.
    pub fn submit_task_input(&mut self) {
        let input = std::mem::take(&mut self.task_input);
        let before = self.tasks.len();
        let result = self.tasks.add_task(&mut *self.store, &input);
        self.note_save(result);
        // The task is in memory even when saving it failed
        if self.tasks.len() > before {
            self.selected_index = self.tasks.len() - 1;
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_task_input(&mut self) {
        self.task_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_selected(&mut self, now: Instant) {
        let was_completed = self.tasks.tasks().get(self.selected_index).map(|t| t.completed);
        let result = self.tasks.toggle_complete(&mut *self.store, self.selected_index);
        self.note_save(result);
        if was_completed == Some(false) {
            self.mood.set(MoodState::Happy, now);
        }
    }

    pub fn delete_selected(&mut self) {
        let result = self.tasks.delete_task(&mut *self.store, self.selected_index);
        self.note_save(result);
        if self.selected_index >= self.tasks.len() && self.selected_index > 0 {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
    }

    // Notepad

    pub fn start_edit_notepad(&mut self) {
        self.notepad_cursor.end(&self.notepad);
        self.ui_mode = UiMode::EditingNotepad;
    }

    pub fn stop_edit_notepad(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn notepad_insert(&mut self, c: char) {
        let result = self.notepad_cursor.insert(&mut self.notepad, &mut *self.store, c);
        self.note_save(result);
    }

    pub fn notepad_backspace(&mut self) {
        let result = self.notepad_cursor.backspace(&mut self.notepad, &mut *self.store);
        self.note_save(result);
    }

    pub fn notepad_delete(&mut self) {
        let result = self.notepad_cursor.delete(&mut self.notepad, &mut *self.store);
        self.note_save(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::persistence::{FileStore, MemoryStore};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn create_test_app() -> AppState {
        let settings = Settings {
            desktop_notifications: false,
            ..Settings::default()
        };
        AppState::new(settings, Box::new(MemoryStore::new()))
    }

    fn add(app: &mut AppState, text: &str) {
        app.start_add_task();
        for c in text.chars() {
            app.task_input_add_char(c);
        }
        app.submit_task_input();
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.timer.display(), "25:00");
        assert_eq!(app.mood.state(), MoodState::Neutral);
        assert!(app.tasks.is_empty());
        assert_eq!(app.notepad.text(), "");
    }

    #[test]
    fn test_start_sets_mood_by_mode() {
        let t0 = Instant::now();
        let mut app = create_test_app();

        app.start_timer(t0);
        assert_eq!(app.mood.state(), MoodState::Studying);

        app.select_mode(TimerMode::ShortBreak, t0).unwrap();
        assert_eq!(app.mood.state(), MoodState::Neutral);
        assert!(!app.timer.is_running());
        assert_eq!(app.timer.display(), "05:00");

        app.start_timer(t0);
        assert_eq!(app.mood.state(), MoodState::Break);
    }

    #[test]
    fn test_pause_and_reset_return_to_neutral() {
        let t0 = Instant::now();
        let mut app = create_test_app();

        app.start_timer(t0);
        app.pause_timer(t0);
        assert_eq!(app.mood.state(), MoodState::Neutral);

        app.start_timer(t0);
        app.tick(t0 + Duration::from_secs(3));
        assert_eq!(app.timer.remaining_seconds(), 1497);
        app.reset_timer(t0 + Duration::from_secs(3));
        assert_eq!(app.mood.state(), MoodState::Neutral);
        assert_eq!(app.timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_completion_opens_alert_then_celebrates() {
        let t0 = Instant::now();
        let mut app = create_test_app();
        app.timer.set_mode(TimerMode::Focus, 2).unwrap();
        app.timer.take_events();

        app.start_timer(t0);
        for n in 1..=3 {
            app.tick(t0 + Duration::from_secs(n));
        }
        assert_eq!(app.ui_mode, UiMode::TimeUp);
        assert_eq!(app.time_up, Some(TimerMode::Focus));
        assert!(!app.timer.is_running());
        assert_eq!(app.timer.remaining_seconds(), 2);

        let acked = t0 + Duration::from_secs(10);
        app.dismiss_time_up(acked);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.mood.state(), MoodState::Happy);

        app.tick(acked + Duration::from_secs(2));
        assert_eq!(app.mood.state(), MoodState::Neutral);
    }

    #[test]
    fn test_completing_task_makes_happy() {
        let t0 = Instant::now();
        let mut app = create_test_app();
        add(&mut app, "write tests");

        app.toggle_selected(t0);
        assert!(app.tasks.tasks()[0].completed);
        assert_eq!(app.mood.state(), MoodState::Happy);

        // Un-completing raises no new mood, and the pending return still happens
        app.toggle_selected(t0 + Duration::from_secs(1));
        assert_eq!(app.mood.state(), MoodState::Happy);
        app.tick(t0 + Duration::from_secs(2));
        assert_eq!(app.mood.state(), MoodState::Neutral);
    }

    #[test]
    fn test_start_cancels_happy_return() {
        let t0 = Instant::now();
        let mut app = create_test_app();
        add(&mut app, "a");
        app.toggle_selected(t0);

        app.start_timer(t0 + Duration::from_secs(1));
        app.tick(t0 + Duration::from_secs(2));
        assert_eq!(app.mood.state(), MoodState::Studying);
    }

    #[test]
    fn test_add_task_selects_it() {
        let mut app = create_test_app();
        add(&mut app, "a");
        add(&mut app, "  b  ");
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.tasks.tasks()[1].text, "b");
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.task_input.is_empty());
    }

    #[test]
    fn test_add_blank_task() {
        let mut app = create_test_app();
        add(&mut app, "   ");
        assert!(app.tasks.is_empty());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_delete_last_moves_selection() {
        let mut app = create_test_app();
        add(&mut app, "a");
        add(&mut app, "b");
        assert_eq!(app.selected_index, 1);

        app.delete_selected();
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.tasks.tasks()[0].text, "a");

        app.delete_selected();
        assert!(app.tasks.is_empty());
        assert_eq!(app.selected_index, 0);

        // Deleting from an empty list is harmless
        app.delete_selected();
    }

    #[test]
    fn test_move_selection() {
        let mut app = create_test_app();
        add(&mut app, "a");
        add(&mut app, "b");

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
        app.move_selection_down();
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_state_survives_restart() {
        let temp_dir = tempfile::tempdir().unwrap();
        let t0 = Instant::now();
        {
            let mut app =
                AppState::new(Settings::default(), Box::new(FileStore::new(temp_dir.path())));
            add(&mut app, "a");
            add(&mut app, "b");
            app.toggle_selected(t0);
            app.start_edit_notepad();
            for c in "notes".chars() {
                app.notepad_insert(c);
            }
            app.start_timer(t0);
        }

        let app =
            AppState::new(Settings::default(), Box::new(FileStore::new(temp_dir.path())));
        assert_eq!(
            app.tasks.tasks(),
            &[
                Task { text: "a".to_string(), completed: false },
                Task { text: "b".to_string(), completed: true },
            ]
        );
        assert_eq!(app.notepad.text(), "notes");
        // Timer state is never persisted
        assert!(!app.timer.is_running());
        assert_eq!(app.timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_save_failure_keeps_session_going() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).unwrap();
        let mut app = AppState::new(Settings::default(), Box::new(FileStore::new(&data_dir)));

        std::fs::remove_dir_all(&data_dir).unwrap();
        add(&mut app, "survives");
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.save_error.is_some());

        app.notepad_insert('n');
        assert_eq!(app.notepad.text(), "n");

        // Once writes work again the next mutation stores the full list
        std::fs::create_dir_all(&data_dir).unwrap();
        add(&mut app, "second");
        assert!(app.save_error.is_none());

        let reloaded = AppState::new(Settings::default(), Box::new(FileStore::new(&data_dir)));
        let texts: Vec<&str> = reloaded.tasks.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["survives", "second"]);
    }

    #[test]
    fn test_unreadable_snapshot_starts_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(crate::persistence::SCRATCHPAD_KEY), [0xff, 0xfe, 0x78])
            .unwrap();
        std::fs::write(temp_dir.path().join(crate::persistence::TASKS_KEY), [0xff, 0xfe]).unwrap();

        let app = AppState::new(Settings::default(), Box::new(FileStore::new(temp_dir.path())));
        assert_eq!(app.notepad.text(), "");
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_alert_returns_to_task_input() {
        let t0 = Instant::now();
        let mut app = create_test_app();
        app.timer.set_mode(TimerMode::Focus, 1).unwrap();
        app.timer.take_events();
        app.start_timer(t0);

        app.start_add_task();
        app.task_input_add_char('h');
        app.task_input_add_char('i');

        app.tick(t0 + Duration::from_secs(1));
        app.tick(t0 + Duration::from_secs(2));
        assert_eq!(app.ui_mode, UiMode::TimeUp);

        app.dismiss_time_up(t0 + Duration::from_secs(3));
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert_eq!(app.task_input, "hi");

        app.submit_task_input();
        assert_eq!(app.tasks.tasks()[0].text, "hi");
    }
}
