//! Task List Component
//!
//! Renders the store's tasks in order; only mounted in the populated layout.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Ordered task list
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="task-list">
            <For
                each=move || store.tasks().get()
                key=|task| {
                    // Key on every mutable field so in-place edits re-render the row
                    (task.id, task.text.clone(), task.completed)
                }
                children=|task| view! { <TaskRow task/> }
            />
        </ul>
    }
}
