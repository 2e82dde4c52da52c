//! Application Context
//!
//! Transient editing state provided via Leptos Context API. The state is
//! never persisted; it stages an in-progress edit until commit or cancel.

use leptos::prelude::*;

use crate::models::Task;
use crate::tasks::EditState;

/// App-wide editing state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current editing state - read
    pub editing: ReadSignal<EditState>,
    /// Current editing state - write
    set_editing: WriteSignal<EditState>,
}

impl AppContext {
    pub fn new(editing: (ReadSignal<EditState>, WriteSignal<EditState>)) -> Self {
        Self {
            editing: editing.0,
            set_editing: editing.1,
        }
    }

    /// Enter editing for a task, seeding the draft with its current text.
    /// Completed tasks are refused.
    pub fn begin_edit(&self, task: &Task) {
        if let Some(state) = EditState::begin(task) {
            self.set_editing.set(state);
        }
    }

    /// Return to idle, discarding any draft
    pub fn end_edit(&self) {
        self.set_editing.set(EditState::Idle);
    }

    /// Replace the draft text while editing
    pub fn update_draft(&self, text: String) {
        self.set_editing.update(|state| state.set_draft(text));
    }

    /// Whether the given task is currently being edited (reactive)
    pub fn is_editing(&self, task_id: u64) -> bool {
        self.editing.with(|state| state.is_editing(task_id))
    }

    /// Current draft text, empty when idle (reactive)
    pub fn draft(&self) -> String {
        self.editing.with(|state| match state {
            EditState::Editing { draft, .. } => draft.clone(),
            EditState::Idle => String::new(),
        })
    }
}
