//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The helper
//! functions apply a pure list operation under the write guard and persist
//! the full list through the injected storage port only when the operation
//! actually changed something.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::storage::{load_dark_mode, load_tasks, save_dark_mode, save_tasks, Storage};
use crate::tasks::{add_task, remove_task, rename_task, reorder_task, toggle_task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered task list; render order = persisted order
    pub tasks: Vec<Task>,
    /// Cosmetic theme flag, persisted independently of the list
    pub dark_mode: bool,
}

impl AppState {
    /// Initial state read from both persisted slots.
    pub fn hydrate(storage: &dyn Storage) -> Self {
        let tasks = load_tasks(storage);
        let dark_mode = load_dark_mode(storage);
        tracing::info!(count = tasks.len(), dark_mode, "hydrated state from storage");
        Self { tasks, dark_mode }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a task from user input; returns whether the submission was
/// accepted so the form knows to clear its input.
pub fn store_add_task(store: &AppStore, storage: &dyn Storage, text: &str) -> bool {
    let mut tasks = store.tasks().write();
    let changed = add_task(&mut tasks, text);
    if changed {
        save_tasks(storage, &tasks);
    }
    changed
}

/// Delete a task by id
pub fn store_remove_task(store: &AppStore, storage: &dyn Storage, id: u64) {
    let mut tasks = store.tasks().write();
    if remove_task(&mut tasks, id) {
        save_tasks(storage, &tasks);
    }
}

/// Flip a task's completed flag
pub fn store_toggle_task(store: &AppStore, storage: &dyn Storage, id: u64) {
    let mut tasks = store.tasks().write();
    if toggle_task(&mut tasks, id) {
        save_tasks(storage, &tasks);
    }
}

/// Commit an edit draft; empty drafts leave the task untouched
pub fn store_rename_task(store: &AppStore, storage: &dyn Storage, id: u64, new_text: &str) {
    let mut tasks = store.tasks().write();
    if rename_task(&mut tasks, id, new_text) {
        save_tasks(storage, &tasks);
    }
}

/// Move a dropped task to the target task's position
pub fn store_reorder_task(store: &AppStore, storage: &dyn Storage, dragged_id: u64, target_id: u64) {
    let mut tasks = store.tasks().write();
    if reorder_task(&mut tasks, dragged_id, target_id) {
        save_tasks(storage, &tasks);
    }
}

/// Flip and persist the theme flag
pub fn store_toggle_dark_mode(store: &AppStore, storage: &dyn Storage) {
    let mut dark = store.dark_mode().write();
    *dark = !*dark;
    save_dark_mode(storage, *dark);
}
