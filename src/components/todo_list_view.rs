//! Todo List View Component
//!
//! Renders the items that pass the current filter.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();

    // Re-derived from the full list on every change
    let visible = move || ctx.todos().visible(ctx.filter.get());

    view! {
        <ul class="todo-list">
            {move || visible().into_iter().map(|(index, todo)| view! {
                <TodoRow index=index todo=todo />
            }).collect_view()}
        </ul>
    }
}
