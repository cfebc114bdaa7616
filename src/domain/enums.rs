/// Named countdown durations the timer can be switched between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            TimerMode::Focus => "Pomodoro",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }

    /// Hotkey that selects this mode
    pub fn hotkey(&self) -> char {
        match self {
            TimerMode::Focus => '1',
            TimerMode::ShortBreak => '2',
            TimerMode::LongBreak => '3',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        Self::all().iter().copied().find(|mode| mode.hotkey() == c)
    }

    /// Mood shown while a countdown in this mode is running
    pub fn running_mood(&self) -> MoodState {
        match self {
            TimerMode::Focus => MoodState::Studying,
            TimerMode::ShortBreak | TimerMode::LongBreak => MoodState::Break,
        }
    }

    /// Get all modes as a list
    pub fn all() -> &'static [TimerMode] {
        &[TimerMode::Focus, TimerMode::ShortBreak, TimerMode::LongBreak]
    }
}

/// Presentational state of the mood indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodState {
    Neutral,
    Happy,
    Studying,
    Break,
}

impl MoodState {
    /// Status line shown under the mood glyph
    pub fn message(&self) -> &'static str {
        match self {
            MoodState::Neutral => "Ready to be productive!",
            MoodState::Happy => "Great job!",
            MoodState::Studying => "Focusing...",
            MoodState::Break => "Taking a well-deserved break!",
        }
    }

    /// Terminal-safe face for the state
    pub fn glyph(&self) -> &'static str {
        match self {
            MoodState::Neutral => "(o_o)",
            MoodState::Happy => "(^o^)/",
            MoodState::Studying => "(-_-)",
            MoodState::Break => "(~_~)",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingNotepad,
    TimeUp, // Blocking end-of-countdown alert
}
