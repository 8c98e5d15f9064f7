//! Todo Footer Component
//!
//! Remaining count, filters and the clear-completed button.

use leptos::prelude::*;

use crate::components::FilterBar;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoFooter() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class="todo-footer">
            // Counted over the full list, whatever the filter
            <span>{move || format!("{} items left", store.todos().read().active_count())}</span>
            <FilterBar />
            <button class="clear-completed" on:click=move |_| ctx.clear_completed()>
                "Clear Completed"
            </button>
        </div>
    }
}
