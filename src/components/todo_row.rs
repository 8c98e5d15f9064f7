//! Todo Row Component
//!
//! A single item in the list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Todo;

/// One row. `index` is the item's position in the full list.
#[component]
pub fn TodoRow(index: usize, todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let completed = todo.completed;
    let row_class = if completed { "todo-item completed" } else { "todo-item" };

    view! {
        <li class=row_class>
            <span class="check-circle" on:click=move |_| ctx.toggle(index)>
                {if completed { "✔️" } else { "⭕" }}
            </span>
            <span class="todo-text">{todo.text}</span>
            <span class="edit-todo" on:click=move |_| ctx.begin_edit(index)>"✏️"</span>
            <span class="remove-todo" on:click=move |_| ctx.remove(index)>"❌"</span>
        </li>
    }
}
