pub mod files;
pub mod settings;
pub mod store;

pub use files::{atomic_write, ensure_data_dir, init_local_data_dir, log_file, settings_file};
pub use settings::{load_settings, save_settings, Settings};
pub use store::{FileStore, MemoryStore, Store, SCRATCHPAD_KEY, TASKS_KEY};
