pub mod config;
pub mod todo;

pub use config::{Config, LookBackMode};
pub use todo::{TodoForest, TodoNode, UNTITLED_SECTION, top_level_count};
