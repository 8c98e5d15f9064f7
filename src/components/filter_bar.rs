//! Filter Bar Component
//!
//! All / Active / Completed buttons.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Filter;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="filters">
            {Filter::ALL.into_iter().map(move |filter| {
                let is_active = move || ctx.filter.get() == filter;
                view! {
                    <button
                        class=move || if is_active() { "active" } else { "" }
                        on:click=move |_| ctx.set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
