//! Global Application State Store
//!
//! Uses Leptos reactive_stores. The list snapshot is replaced wholesale on
//! every dispatched action.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::todo_list::{Action, TodoList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current list snapshot
    pub todos: TodoList,
}

impl AppState {
    /// Initial state for a fresh session
    pub fn new(seed: TodoList) -> Self {
        Self { todos: seed }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Reduce the current list with `action` and swap in the result
pub fn dispatch(store: &AppStore, action: Action) {
    log::debug!("[STORE] dispatch {:?}", action);
    let next = store.todos().with_untracked(|todos| todos.apply(action));
    *store.todos().write() = next;
}
