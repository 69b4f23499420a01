//! UI Components
//!
//! Leptos components making up the page.

mod header;
mod layout;
mod new_todo_form;
mod todo_list;
mod todo_list_item;

pub use header::Header;
pub use layout::Layout;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_list_item::TodoListItem;
