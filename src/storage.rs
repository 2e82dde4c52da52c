//! Persistence Port
//!
//! Key-value persistence behind a small trait so the store logic stays
//! testable without a browser. The real backend is window.localStorage;
//! reads and writes are best-effort and never surface to the user.

use std::sync::Arc;

use leptos::prelude::*;

use crate::models::Task;

/// Task-list slot
pub const TASKS_KEY: &str = "todoTasks";
/// Theme-flag slot
pub const DARK_MODE_KEY: &str = "todoDarkMode";

/// Injected key-value persistence port
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser localStorage backend. Any browser-API failure (no window, storage
/// disabled, quota) collapses to "no data" / dropped write.
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Shared storage handle provided via context
#[derive(Clone)]
pub struct StorageHandle(pub Arc<dyn Storage>);

/// Get the storage handle from context
pub fn use_storage() -> StorageHandle {
    expect_context::<StorageHandle>()
}

// ========================
// Slot Codecs
// ========================

/// Read the task-list slot. Absent or malformed data yields an empty list;
/// malformed bytes are logged and left in place until the next write.
pub fn load_tasks(storage: &dyn Storage) -> Vec<Task> {
    if let Some(raw) = storage.get(TASKS_KEY) {
        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => return tasks,
            Err(error) => {
                tracing::error!(%error, "failed parsing task list from storage, starting empty");
            }
        }
    }
    Vec::new()
}

/// Overwrite the task-list slot with the full list.
pub fn save_tasks(storage: &dyn Storage, tasks: &[Task]) {
    if let Ok(json) = serde_json::to_string(tasks) {
        storage.set(TASKS_KEY, &json);
    }
}

/// Read the theme-flag slot, defaulting to light.
pub fn load_dark_mode(storage: &dyn Storage) -> bool {
    if let Some(raw) = storage.get(DARK_MODE_KEY) {
        match serde_json::from_str::<bool>(&raw) {
            Ok(dark) => return dark,
            Err(error) => {
                tracing::error!(%error, "failed parsing theme flag from storage, using light");
            }
        }
    }
    false
}

pub fn save_dark_mode(storage: &dyn Storage, dark: bool) {
    if let Ok(json) = serde_json::to_string(&dark) {
        storage.set(DARK_MODE_KEY, &json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{add_task, toggle_task};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory stand-in for localStorage
    #[derive(Default)]
    struct MemoryStorage {
        slots: Mutex<HashMap<String, String>>,
    }

    impl Storage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.slots.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.slots.lock().unwrap().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_absent_slot_is_empty_list() {
        let storage = MemoryStorage::default();
        assert!(load_tasks(&storage).is_empty());
    }

    #[test]
    fn test_task_round_trip() {
        let storage = MemoryStorage::default();
        let mut tasks = Vec::new();
        add_task(&mut tasks, "Buy milk");
        add_task(&mut tasks, "Walk dog");
        toggle_task(&mut tasks, 2);

        save_tasks(&storage, &tasks);
        assert_eq!(load_tasks(&storage), tasks);
    }

    #[test]
    fn test_malformed_slot_is_discarded() {
        let storage = MemoryStorage::default();
        storage.set(TASKS_KEY, "42");
        assert!(load_tasks(&storage).is_empty());

        storage.set(TASKS_KEY, "not json at all");
        assert!(load_tasks(&storage).is_empty());

        // Records without the task shape are rejected as a whole
        storage.set(TASKS_KEY, r#"[{"id":"one","text":7}]"#);
        assert!(load_tasks(&storage).is_empty());
    }

    #[test]
    fn test_malformed_slot_left_untouched_until_next_write() {
        let storage = MemoryStorage::default();
        storage.set(TASKS_KEY, "42");
        let _ = load_tasks(&storage);
        assert_eq!(storage.get(TASKS_KEY).as_deref(), Some("42"));

        let mut tasks = Vec::new();
        add_task(&mut tasks, "fresh start");
        save_tasks(&storage, &tasks);
        assert_eq!(load_tasks(&storage), tasks);
    }

    #[test]
    fn test_dark_mode_defaults_to_light() {
        let storage = MemoryStorage::default();
        assert!(!load_dark_mode(&storage));

        storage.set(DARK_MODE_KEY, "maybe");
        assert!(!load_dark_mode(&storage));
    }

    #[test]
    fn test_dark_mode_round_trip() {
        let storage = MemoryStorage::default();
        save_dark_mode(&storage, true);
        assert!(load_dark_mode(&storage));
        save_dark_mode(&storage, false);
        assert!(!load_dark_mode(&storage));
    }

    #[test]
    fn test_add_persists_and_reloads() {
        // Fresh session: empty slot -> add -> reload sees the task
        let storage = MemoryStorage::default();
        let mut tasks = load_tasks(&storage);
        assert!(tasks.is_empty());

        add_task(&mut tasks, "Buy milk");
        save_tasks(&storage, &tasks);

        let reloaded = load_tasks(&storage);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].text, "Buy milk");
        assert!(!reloaded[0].completed);
    }
}
