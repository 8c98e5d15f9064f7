//! Application Context
//!
//! Session signals and the gesture handlers, shared via Leptos Context API.

use leptos::prelude::*;

use crate::models::Filter;
use crate::session::Session;
use crate::store::{dispatch, AppStateStoreFields, AppStore};
use crate::todo_list::{Action, TodoList};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// UI session state - read
    pub session: ReadSignal<Session>,
    /// UI session state - write
    set_session: WriteSignal<Session>,
    /// Current filter, only notifies when the filter itself changes
    pub filter: Memo<Filter>,
    store: AppStore,
}

impl AppContext {
    pub fn new(session: (ReadSignal<Session>, WriteSignal<Session>), store: AppStore) -> Self {
        let read = session.0;
        Self {
            session: read,
            set_session: session.1,
            filter: Memo::new(move |_| read.with(|s| s.filter)),
            store,
        }
    }

    /// Current list snapshot (tracked)
    pub fn todos(&self) -> TodoList {
        self.store.todos().get()
    }

    pub fn set_input(&self, text: String) {
        self.set_session.update(|s| s.set_input(text));
    }

    /// Form submission: add or update, depending on the edit cursor
    pub fn submit(&self) {
        let mut action = None;
        self.set_session.update(|s| action = s.submit());
        if let Some(action) = action {
            dispatch(&self.store, action);
        }
    }

    pub fn begin_edit(&self, index: usize) {
        let todos = self.store.todos().get_untracked();
        self.set_session.update(|s| s.begin_edit(&todos, index));
    }

    pub fn toggle(&self, index: usize) {
        dispatch(&self.store, Action::ToggleTodo(index));
    }

    pub fn remove(&self, index: usize) {
        dispatch(&self.store, Action::RemoveTodo(index));
    }

    pub fn clear_completed(&self) {
        dispatch(&self.store, Action::ClearCompleted);
    }

    pub fn set_filter(&self, filter: Filter) {
        self.set_session.update(|s| s.set_filter(filter));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::Todo;
    use crate::store::{use_app_store, AppState};
    use reactive_stores::Store;

    fn make_context() -> AppContext {
        let owner = Owner::new();
        owner.set();
        // keep the owner alive for the whole test so provided context survives
        std::mem::forget(owner);
        let seed = TodoList::new(AppConfig::embedded().seed);
        let store = Store::new(AppState::new(seed));
        provide_context(store);
        AppContext::new(signal(Session::default()), store)
    }

    fn snapshot(ctx: &AppContext) -> TodoList {
        ctx.store.todos().get_untracked()
    }

    #[test]
    fn test_toggle_replaces_store_snapshot() {
        let ctx = make_context();
        assert_eq!(snapshot(&ctx).active_count(), 5);

        ctx.toggle(1);

        let todos = snapshot(&ctx);
        assert!(todos.get(1).is_some_and(|t| t.completed));
        assert_eq!(todos.active_count(), 4);
    }

    #[test]
    fn test_submit_while_editing_updates_item() {
        let ctx = make_context();

        ctx.begin_edit(2);
        assert_eq!(ctx.session.get_untracked().input, "Eat a meal ");

        ctx.set_input("Eat a big meal".to_string());
        ctx.submit();

        let todos = snapshot(&ctx);
        assert_eq!(todos.get(2), Some(&Todo::new("Eat a big meal")));
        assert_eq!(todos.len(), 6);
        let session = ctx.session.get_untracked();
        assert_eq!(session.edit_cursor, None);
        assert!(session.input.is_empty());
    }

    #[test]
    fn test_submit_adds_to_store() {
        let ctx = make_context();

        ctx.set_input("Buy milk".to_string());
        ctx.submit();

        let todos = snapshot(&ctx);
        assert_eq!(todos.len(), 7);
        assert_eq!(todos.get(6), Some(&Todo::new("Buy milk")));
    }

    #[test]
    fn test_whitespace_submit_dispatches_nothing() {
        let ctx = make_context();
        let before = snapshot(&ctx);

        ctx.set_input("   ".to_string());
        ctx.submit();

        assert_eq!(snapshot(&ctx), before);
        assert_eq!(ctx.session.get_untracked().input, "   ");
    }

    #[test]
    fn test_remove_and_clear_completed() {
        let ctx = make_context();

        ctx.remove(10);
        assert_eq!(snapshot(&ctx).len(), 6);

        ctx.clear_completed();
        let todos = snapshot(&ctx);
        assert_eq!(todos.len(), 5);
        assert_eq!(todos.active_count(), 5);
    }

    #[test]
    fn test_filter_memo_and_store_context() {
        let ctx = make_context();

        ctx.set_filter(Filter::Active);
        assert_eq!(ctx.filter.get_untracked(), Filter::Active);
        assert_eq!(ctx.todos().visible(ctx.filter.get_untracked()).len(), 5);

        // same store handle is reachable through context
        let store = use_app_store();
        ctx.toggle(0);
        assert_eq!(store.todos().get_untracked().active_count(), 6);
    }
}
