pub mod enums;
pub mod format;
pub mod task;

pub use enums::{MoodState, TimerMode, UiMode};
pub use format::format_clock;
pub use task::{Progress, Task};
