//! To-Do Frontend App
//!
//! Main application component: heading, form, list and footer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoFooter, TodoForm, TodoListView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::session::Session;
use crate::store::AppState;
use crate::todo_list::TodoList;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::embedded();

    // Seeded once per page load
    let store = Store::new(AppState::new(TodoList::new(config.seed)));
    let session = signal(Session::default());

    provide_context(store);
    provide_context(AppContext::new(session, store));

    view! {
        <div class="todo-app">
            <h1>{config.title}</h1>
            <TodoForm placeholder=config.placeholder />
            <TodoListView />
            <TodoFooter />
        </div>
    }
}
