use crate::domain::TimerMode;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{0} duration must be greater than zero")]
    ZeroDuration(&'static str),
}

/// User settings stored in settings.json (durations in seconds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_focus_secs")]
    pub focus_secs: u32,
    #[serde(default = "default_short_break_secs")]
    pub short_break_secs: u32,
    #[serde(default = "default_long_break_secs")]
    pub long_break_secs: u32,
    #[serde(default = "default_true")]
    pub desktop_notifications: bool,
}

fn default_focus_secs() -> u32 {
    25 * 60
}

fn default_short_break_secs() -> u32 {
    5 * 60
}

fn default_long_break_secs() -> u32 {
    15 * 60
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_secs: default_focus_secs(),
            short_break_secs: default_short_break_secs(),
            long_break_secs: default_long_break_secs(),
            desktop_notifications: true,
        }
    }
}

impl Settings {
    /// Configured duration for a mode
    pub fn duration_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus_secs,
            TimerMode::ShortBreak => self.short_break_secs,
            TimerMode::LongBreak => self.long_break_secs,
        }
    }

    /// Apply per-mode overrides given in minutes (from the command line)
    pub fn with_overrides(
        mut self,
        focus_mins: Option<u32>,
        short_break_mins: Option<u32>,
        long_break_mins: Option<u32>,
    ) -> Self {
        if let Some(mins) = focus_mins {
            self.focus_secs = mins.saturating_mul(60);
        }
        if let Some(mins) = short_break_mins {
            self.short_break_secs = mins.saturating_mul(60);
        }
        if let Some(mins) = long_break_mins {
            self.long_break_secs = mins.saturating_mul(60);
        }
        self
    }

    /// Reject zero durations before they reach the timer
    pub fn validate(&self) -> Result<(), SettingsError> {
        for &mode in TimerMode::all() {
            if self.duration_for(mode) == 0 {
                return Err(SettingsError::ZeroDuration(mode.name()));
            }
        }
        Ok(())
    }
}

/// Load settings from settings.json, defaults if the file doesn't exist
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
