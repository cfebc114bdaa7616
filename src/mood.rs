use crate::domain::MoodState;
use crate::ticker::HAPPY_REVERT_DELAY;
use std::time::Instant;

/// Mood indicator. Happy is transient and falls back to Neutral after a
/// short delay; any other change made in the meantime cancels that return.
#[derive(Debug, Clone)]
pub struct Mood {
    state: MoodState,
    revert_at: Option<Instant>,
}

impl Mood {
    pub fn new() -> Self {
        Self {
            state: MoodState::Neutral,
            revert_at: None,
        }
    }

    pub fn state(&self) -> MoodState {
        self.state
    }

    pub fn message(&self) -> &'static str {
        self.state.message()
    }

    pub fn set(&mut self, state: MoodState, now: Instant) {
        self.revert_at = None;
        self.state = state;
        if state == MoodState::Happy {
            self.revert_at = Some(now + HAPPY_REVERT_DELAY);
        }
    }

    /// Apply a due return to Neutral. Returns true if the state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(due) if now >= due => {
                self.revert_at = None;
                self.state = MoodState::Neutral;
                true
            }
            _ => false,
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::new()
    }
}
