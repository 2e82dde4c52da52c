//! Theme Toggle Component
//!
//! One button flipping the persisted dark/light flag.

use leptos::prelude::*;

use crate::storage::use_storage;
use crate::store::{store_toggle_dark_mode, use_app_store, AppStateStoreFields};

/// Dark/light mode toggle button
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();
    let storage = use_storage();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| store_toggle_dark_mode(&store, &*storage.0)
        >
            {move || if store.dark_mode().get() { "☀" } else { "☾" }}
        </button>
    }
}
