//! To-Do App
//!
//! Main application component: hydrates state from storage, wires the
//! drag-drop drop handler, mirrors the theme onto the body, and switches
//! between the empty (centered) and populated (pinned) layouts.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

use crate::components::{NewTaskForm, TaskList, ThemeToggle};
use crate::context::AppContext;
use crate::storage::{BrowserStorage, StorageHandle};
use crate::store::{store_reorder_task, AppState, AppStateStoreFields};
use crate::tasks::{layout_mode, EditState, LayoutMode};

#[component]
pub fn App() -> impl IntoView {
    let storage = StorageHandle(Arc::new(BrowserStorage));
    let store = Store::new(AppState::hydrate(&*storage.0));

    // Provide context to all children
    provide_context(store);
    provide_context(storage.clone());
    provide_context(AppContext::new(signal(EditState::Idle)));

    // Drag-drop: the global mouseup clears the drag state and, when a drop
    // landed on a row, commits the reorder
    let dnd = create_dnd_signals();
    provide_context(dnd);
    let drop_storage = storage.clone();
    bind_global_mouseup(dnd, move |dragged_id, target_id| {
        store_reorder_task(&store, &*drop_storage.0, dragged_id, target_id);
    });

    // Mirror the theme flag onto <body> so the stylesheet follows it
    Effect::new(move |_| {
        let dark = store.dark_mode().get();
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            body.set_class_name(if dark { "dark" } else { "" });
        }
    });

    // Layout is a pure function of list occupancy; the class switch drives
    // the header transition between centered and pinned
    let layout = Memo::new(move |_| layout_mode(&store.tasks().read()));
    let shell_class = move || match layout.get() {
        LayoutMode::Empty => "app-shell centered",
        LayoutMode::Populated => "app-shell pinned",
    };

    view! {
        <div class=shell_class>
            <header class="app-header">
                <h1>"To-Do List"</h1>
                <ThemeToggle/>
            </header>

            <NewTaskForm/>

            <Show when=move || layout.get() == LayoutMode::Populated>
                <TaskList/>
            </Show>
        </div>
    }
}
