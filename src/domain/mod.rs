//! Domain types for the to-do service.
//!
//! - `Item` / `ItemIn`: to-do entries and their write payload
//! - `TodoList` / `TodoListIn`: named groupings of items
//! - `TodoState`: closed set of item workflow states
//! - `Page`: skip/take window for list endpoints

pub mod item;
pub mod page;
pub mod state;
pub mod todo_list;

pub use item::{Item, ItemIn};
pub use page::Page;
pub use state::{TodoState, TodoStateParseError};
pub use todo_list::{TodoList, TodoListIn};
