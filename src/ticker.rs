use std::time::Duration;

/// Event loop poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Interval between countdown ticks
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// How long the happy mood lingers before returning to neutral
pub const HAPPY_REVERT_DELAY: Duration = Duration::from_secs(2);

/// Get the event loop poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_poll_is_finer_than_countdown() {
        assert!(tick_duration() < COUNTDOWN_TICK);
    }
}
