//! New Task Form Component
//!
//! Input row for creating new tasks; Enter or the Add button submits.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::storage::use_storage;
use crate::store::{store_add_task, use_app_store};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();
    let storage = use_storage();

    let (new_text, set_new_text) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        // Whitespace-only input is rejected by the store; keep it in the
        // field so the user sees nothing was added
        if store_add_task(&store, &*storage.0, &text) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
