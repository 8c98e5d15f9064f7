//! UI Components
//!
//! Leptos components for the to-do page.

mod todo_form;
mod todo_row;
mod todo_list_view;
mod filter_bar;
mod todo_footer;

pub use todo_form::TodoForm;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
pub use filter_bar::FilterBar;
pub use todo_footer::TodoFooter;
