use crate::domain::{Progress, Task};
use crate::persistence::{Store, TASKS_KEY};
use anyhow::{Context, Result};

/// Ordered task collection. Every mutation rewrites the whole snapshot.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted snapshot. Stored text is taken as-is.
    /// A missing key yields an empty list; a snapshot that cannot be read or
    /// parsed is logged and treated the same way.
    pub fn load_all(store: &dyn Store) -> Self {
        let raw = match store.get(TASKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable task snapshot");
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                tracing::info!(count = tasks.len(), "tasks loaded");
                Self { tasks }
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring corrupt task snapshot");
                Self::new()
            }
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.tasks)
    }

    /// Append a task built from user input. Blank input is ignored.
    /// Returns whether a task was added.
    pub fn add_task(&mut self, store: &mut dyn Store, text: &str) -> Result<bool> {
        let Some(task) = Task::from_input(text) else {
            return Ok(false);
        };
        tracing::info!(text = %task.text, "task added");
        self.tasks.push(task);
        self.save(store)?;
        Ok(true)
    }

    /// Flip completion of the task at `index`.
    /// Returns the new state, or None if there is no such task.
    pub fn toggle_complete(&mut self, store: &mut dyn Store, index: usize) -> Result<Option<bool>> {
        let Some(task) = self.tasks.get_mut(index) else {
            return Ok(None);
        };
        let completed = task.toggle();
        tracing::info!(index, completed, "task toggled");
        self.save(store)?;
        Ok(Some(completed))
    }

    /// Remove the task at `index`. Returns the removed task.
    pub fn delete_task(&mut self, store: &mut dyn Store, index: usize) -> Result<Option<Task>> {
        if index >= self.tasks.len() {
            return Ok(None);
        }
        let removed = self.tasks.remove(index);
        tracing::info!(index, text = %removed.text, "task deleted");
        self.save(store)?;
        Ok(Some(removed))
    }

    fn save(&self, store: &mut dyn Store) -> Result<()> {
        let json = serde_json::to_string(&self.tasks).context("Failed to serialize tasks")?;
        store.set(TASKS_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{FileStore, MemoryStore};
    use pretty_assertions::assert_eq;

    fn task(text: &str, completed: bool) -> Task {
        Task {
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_add_task_trims() {
        let mut store = MemoryStore::new();
        let mut list = TaskList::new();

        assert!(list.add_task(&mut store, "  buy milk  ").unwrap());
        assert_eq!(list.tasks(), &[task("buy milk", false)]);
    }

    #[test]
    fn test_add_blank_task_is_noop() {
        let mut store = MemoryStore::new();
        let mut list = TaskList::new();

        assert!(!list.add_task(&mut store, "").unwrap());
        assert!(!list.add_task(&mut store, "   ").unwrap());
        assert!(list.is_empty());
        // Nothing was written either
        assert!(store.get(TASKS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut store = MemoryStore::new();
        let mut list = TaskList::new();
        list.add_task(&mut store, "a").unwrap();
        list.add_task(&mut store, "b").unwrap();
        let before = list.progress();

        assert_eq!(list.toggle_complete(&mut store, 1).unwrap(), Some(true));
        assert_eq!(list.progress().ratio(), 0.5);
        assert_eq!(list.toggle_complete(&mut store, 1).unwrap(), Some(false));

        assert!(!list.tasks()[1].completed);
        assert_eq!(list.progress(), before);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut store = MemoryStore::new();
        let mut list = TaskList::new();
        assert_eq!(list.toggle_complete(&mut store, 0).unwrap(), None);
    }

    #[test]
    fn test_reload_preserves_order_and_flags() {
        let mut store = MemoryStore::new();
        let mut list = TaskList::new();
        list.add_task(&mut store, "a").unwrap();
        list.add_task(&mut store, "b").unwrap();
        list.toggle_complete(&mut store, 1).unwrap();

        let reloaded = TaskList::load_all(&store);
        assert_eq!(reloaded.tasks(), &[task("a", false), task("b", true)]);
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut store = MemoryStore::new();
        let mut list = TaskList::new();
        for text in ["a", "b", "c", "d"] {
            list.add_task(&mut store, text).unwrap();
        }

        let removed = list.delete_task(&mut store, 1).unwrap();
        assert_eq!(removed, Some(task("b", false)));

        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c", "d"]);

        let reloaded = TaskList::load_all(&store);
        assert_eq!(reloaded.tasks(), list.tasks());
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut store = MemoryStore::new();
        let mut list = TaskList::new();
        list.add_task(&mut store, "a").unwrap();
        assert_eq!(list.delete_task(&mut store, 3).unwrap(), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_load_missing_snapshot() {
        let store = MemoryStore::new();
        assert!(TaskList::load_all(&store).is_empty());
    }

    #[test]
    fn test_load_skips_text_validation() {
        let mut store = MemoryStore::new();
        store
            .set(TASKS_KEY, r#"[{"text":"  ","completed":true},{"text":"x","completed":false}]"#)
            .unwrap();

        let list = TaskList::load_all(&store);
        assert_eq!(list.tasks(), &[task("  ", true), task("x", false)]);
    }

    #[test]
    fn test_load_corrupt_snapshot_is_empty() {
        let mut store = MemoryStore::new();
        store.set(TASKS_KEY, "not json").unwrap();
        assert!(TaskList::load_all(&store).is_empty());
    }

    #[test]
    fn test_snapshot_written_to_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path());
        let mut list = TaskList::new();
        list.add_task(&mut store, "write report").unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join(TASKS_KEY)).unwrap();
        assert_eq!(raw, r#"[{"text":"write report","completed":false}]"#);
    }

    struct UnreadableStore;

    impl Store for UnreadableStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            anyhow::bail!("cannot read {}", key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_load_read_error_is_empty() {
        assert!(TaskList::load_all(&UnreadableStore).is_empty());
    }

    #[test]
    fn test_load_invalid_utf8_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(TASKS_KEY), [0xff, 0xfe, 0x78]).unwrap();
        let store = FileStore::new(temp_dir.path());
        assert!(TaskList::load_all(&store).is_empty());
    }
}
