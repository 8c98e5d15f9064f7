//! Todo List
//!
//! Ordered, index-addressed collection of todos and the reducer that
//! produces the next list for each action.

use crate::models::{Filter, Todo};

/// Everything that can change the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTodo(String),
    RemoveTodo(usize),
    ToggleTodo(usize),
    UpdateTodo(usize, String),
    ClearCompleted,
}

/// Ordered list of todos. Items are addressed by position only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new(items: Vec<Todo>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.items.iter()
    }

    /// Number of items not yet completed
    pub fn active_count(&self) -> usize {
        self.iter().filter(|t| !t.completed).count()
    }

    /// Items matching `filter`, each paired with its index in the full list
    pub fn visible(&self, filter: Filter) -> Vec<(usize, Todo)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, todo)| filter.matches(todo))
            .map(|(index, todo)| (index, todo.clone()))
            .collect()
    }

    /// Reduce: returns the list that results from applying `action`.
    /// Out-of-range indices leave the list unchanged.
    pub fn apply(&self, action: Action) -> TodoList {
        let items = match action {
            Action::AddTodo(text) => {
                let mut items = self.items.clone();
                items.push(Todo::new(text));
                items
            }
            Action::RemoveTodo(target) => self
                .items
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != target)
                .map(|(_, todo)| todo.clone())
                .collect(),
            Action::ToggleTodo(target) => self
                .items
                .iter()
                .enumerate()
                .map(|(index, todo)| if index == target { todo.toggled() } else { todo.clone() })
                .collect(),
            Action::UpdateTodo(target, text) => self
                .items
                .iter()
                .enumerate()
                .map(|(index, todo)| if index == target { todo.with_text(&text) } else { todo.clone() })
                .collect(),
            Action::ClearCompleted => self
                .items
                .iter()
                .filter(|todo| !todo.completed)
                .cloned()
                .collect(),
        };
        TodoList { items }
    }
}
