pub mod insert;
pub mod reconcile;
pub mod remove;
pub mod rollover;

pub use insert::{insert_incomplete_todos, remove_empty_todos};
pub use reconcile::{filter_out_existing_todos, remaining_incomplete_todos};
pub use remove::remove_incomplete_todos;
pub use rollover::{RolloverError, RolloverOutcome, roll_forward};
