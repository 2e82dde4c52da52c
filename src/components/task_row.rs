//! Task Row Component
//!
//! A single task in the list: completion checkbox, inline edit mode,
//! delete button, and mouse handles for drag-reorder.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use leptos_dragdrop::{make_on_mousedown, make_on_row_mouseenter, make_on_row_mouseleave, DndSignals};

use crate::context::AppContext;
use crate::models::Task;
use crate::storage::use_storage;
use crate::store::{store_remove_task, store_rename_task, store_toggle_task, use_app_store};
use crate::tasks::EditState;

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();
    let storage = use_storage();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");

    let id = task.id;
    let completed = task.completed;

    let is_editing = move || ctx.is_editing(id);
    let row_class = move || {
        let mut class = String::from("task-row");
        if completed {
            class.push_str(" completed");
        }
        if dnd.dragging_id_read.get() == Some(id) {
            class.push_str(" dragging");
        }
        if dnd.drop_target_read.get() == Some(id) {
            class.push_str(" drag-over");
        }
        class
    };

    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_row_mouseenter(dnd, id);
    let on_mouseleave = make_on_row_mouseleave(dnd);

    let storage_rename = storage.clone();
    let commit_edit = move || {
        if let EditState::Editing { id, draft } = ctx.editing.get_untracked() {
            store_rename_task(&store, &*storage_rename.0, id, &draft);
        }
        ctx.end_edit();
    };

    view! {
        <li
            class=row_class
            on:mousedown=move |ev| {
                // A row being edited is not draggable
                if !ctx.editing.with_untracked(|state| state.is_editing(id)) {
                    on_mousedown(ev);
                }
            }
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {move || {
                if is_editing() {
                    let commit_key = commit_edit.clone();
                    let commit_click = commit_edit.clone();
                    view! {
                        <div class="task-row-inner">
                            <input
                                type="text"
                                class="edit-input"
                                autofocus=true
                                prop:value=move || ctx.draft()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    ctx.update_draft(input.value());
                                }
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    match ev.key().as_str() {
                                        "Enter" => commit_key(),
                                        "Escape" => ctx.end_edit(),
                                        _ => {}
                                    }
                                }
                            />
                            <button class="confirm-btn" on:click=move |_| commit_click()>"✓"</button>
                            <button class="cancel-btn" on:click=move |_| ctx.end_edit()>"✗"</button>
                        </div>
                    }
                    .into_any()
                } else {
                    let storage_toggle = storage.clone();
                    let storage_remove = storage.clone();
                    let task_edit = task.clone();
                    view! {
                        <div class="task-row-inner">
                            <input
                                type="checkbox"
                                checked=completed
                                on:change=move |_| store_toggle_task(&store, &*storage_toggle.0, id)
                            />
                            <span class="task-text">{task.text.clone()}</span>
                            <button
                                class="edit-btn"
                                disabled=completed
                                on:click=move |_| ctx.begin_edit(&task_edit)
                            >
                                "✎"
                            </button>
                            <button
                                class="delete-btn"
                                on:click=move |_| store_remove_task(&store, &*storage_remove.0, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </li>
    }
}
