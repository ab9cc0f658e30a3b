pub mod enums;
pub mod key;
pub mod store;
pub mod task;
pub mod views;

pub use enums::{Category, Theme, UiMode};
pub use key::derive_key;
pub use task::{Subtask, Task, TaskDraft};
pub use views::{filter_tasks, flatten_visible, reconcile_order, tree_connector, FlatRow};
