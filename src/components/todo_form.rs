//! Todo Form Component
//!
//! Input box plus Add/Update button.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for adding a new todo or saving the one being edited
#[component]
pub fn TodoForm(#[prop(into)] placeholder: String) -> impl IntoView {
    let ctx = use_app_context();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="todo-input" on:submit=on_submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || ctx.session.with(|s| s.input.clone())
                on:input=move |ev| ctx.set_input(event_target_value(&ev))
            />
            <button type="submit">{move || ctx.session.with(|s| s.submit_label())}</button>
        </form>
    }
}
