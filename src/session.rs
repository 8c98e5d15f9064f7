//! UI Session
//!
//! View-local state (input buffer, edit cursor, filter) and the mapping
//! from user gestures to store actions. Knows nothing about the DOM.

use crate::models::Filter;
use crate::todo_list::{Action, TodoList};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub input: String,
    /// Index of the item being edited. Not revalidated when the list
    /// changes shape.
    pub edit_cursor: Option<usize>,
    pub filter: Filter,
}

impl Session {
    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn is_editing(&self) -> bool {
        self.edit_cursor.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update" } else { "Add" }
    }

    /// Turn the buffer into an add or update. Whitespace-only input is
    /// ignored and left in place.
    pub fn submit(&mut self) -> Option<Action> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        let action = match self.edit_cursor.take() {
            Some(index) => Action::UpdateTodo(index, text),
            None => Action::AddTodo(text),
        };
        Some(action)
    }

    /// Start editing the item at `index`, copying its text into the buffer
    pub fn begin_edit(&mut self, todos: &TodoList, index: usize) {
        if let Some(todo) = todos.get(index) {
            self.edit_cursor = Some(index);
            self.input = todo.text.clone();
        }
    }
}
