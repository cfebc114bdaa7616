/// Desktop notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a countdown runs out
pub fn notify_time_up(mode_name: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{} finished" with title "FocusFlow - Time's up!""#,
            mode_name.replace('"', "\\\"")
        );

        if let Err(err) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::warn!(error = %err, "desktop notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = mode_name;
    }
}
