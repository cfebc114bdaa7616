use crate::domain::{format_clock, TimerMode};
use crate::persistence::Settings;
use crate::ticker::COUNTDOWN_TICK;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("timer duration must be greater than zero")]
    ZeroDuration,
}

/// Notifications emitted by the timer for the host to relay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Remaining seconds changed and should be redrawn
    Display(u32),
    Started(TimerMode),
    Paused,
    Reset,
    /// The countdown ran out; the timer has already reset itself
    Completed,
}

/// Countdown engine.
///
/// While running, the remaining time is derived from an absolute target
/// instant on every tick rather than decremented, so late ticks never
/// accumulate drift. At most one tick is pending at a time: every command
/// clears `next_tick` before anything new is scheduled.
pub struct TimerEngine {
    settings: Settings,
    mode: TimerMode,
    duration: u32,
    remaining_seconds: u32,
    target: Option<Instant>,
    next_tick: Option<Instant>,
    events: Vec<TimerEvent>,
}

impl TimerEngine {
    pub fn new(settings: Settings) -> Self {
        let mode = TimerMode::Focus;
        let duration = settings.duration_for(mode);
        Self {
            settings,
            mode,
            duration,
            remaining_seconds: duration,
            target: None,
            next_tick: None,
            events: Vec::new(),
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds)
    }

    /// Switch to `mode` with an explicit duration, stopping any countdown
    pub fn set_mode(&mut self, mode: TimerMode, duration_seconds: u32) -> Result<(), TimerError> {
        if duration_seconds == 0 {
            return Err(TimerError::ZeroDuration);
        }
        self.cancel();
        self.mode = mode;
        self.duration = duration_seconds;
        self.remaining_seconds = duration_seconds;
        tracing::debug!(mode = mode.name(), duration_seconds, "timer mode set");
        self.events.push(TimerEvent::Display(self.remaining_seconds));
        Ok(())
    }

    /// Switch to `mode` using its configured duration
    pub fn select_mode(&mut self, mode: TimerMode) -> Result<(), TimerError> {
        self.set_mode(mode, self.settings.duration_for(mode))
    }

    /// Start counting down from the current remaining time.
    /// Calling this while running reschedules from the current value.
    pub fn start(&mut self, now: Instant) {
        self.cancel();
        self.target = Some(now + std::time::Duration::from_secs(u64::from(self.remaining_seconds)));
        self.next_tick = Some(now + COUNTDOWN_TICK);
        tracing::info!(mode = self.mode.name(), remaining = self.remaining_seconds, "timer started");
        self.events.push(TimerEvent::Started(self.mode));
    }

    pub fn pause(&mut self) {
        self.cancel();
        tracing::info!(remaining = self.remaining_seconds, "timer paused");
        self.events.push(TimerEvent::Paused);
    }

    pub fn reset(&mut self) {
        self.cancel();
        self.restore_duration();
        tracing::info!(mode = self.mode.name(), "timer reset");
        self.events.push(TimerEvent::Reset);
    }

    /// Fire the pending tick if it is due. Ticks missed while the loop was
    /// busy collapse into one, since the remaining time is recomputed from
    /// the target anyway.
    pub fn poll(&mut self, now: Instant) {
        let Some(due) = self.next_tick else {
            return;
        };
        if now < due {
            return;
        }

        let mut next = due + COUNTDOWN_TICK;
        while next <= now {
            next += COUNTDOWN_TICK;
        }
        self.next_tick = Some(next);
        self.tick(now);
    }

    /// Drain the notifications produced since the last call
    pub fn take_events(&mut self) -> Vec<TimerEvent> {
        std::mem::take(&mut self.events)
    }

    fn tick(&mut self, now: Instant) {
        let Some(target) = self.target else {
            return;
        };

        let seconds_left = seconds_until(target, now);
        if seconds_left < 0 {
            self.cancel();
            tracing::info!(mode = self.mode.name(), "countdown finished");
            self.events.push(TimerEvent::Completed);
            self.restore_duration();
            return;
        }

        self.remaining_seconds = u32::try_from(seconds_left).unwrap_or(u32::MAX);
        self.events.push(TimerEvent::Display(self.remaining_seconds));
    }

    fn cancel(&mut self) {
        self.next_tick = None;
        self.target = None;
    }

    fn restore_duration(&mut self) {
        self.remaining_seconds = self.duration;
        self.events.push(TimerEvent::Display(self.remaining_seconds));
    }
}

/// Whole seconds from `now` until `target`, negative once `target` has passed.
/// Halves round toward positive infinity.
fn seconds_until(target: Instant, now: Instant) -> i64 {
    let millis = match target.checked_duration_since(now) {
        Some(ahead) => ahead.as_millis() as i64,
        None => -(now.duration_since(target).as_millis() as i64),
    };
    (millis as f64 / 1000.0 + 0.5).floor() as i64
}
