use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Section key used when grouping is disabled or no heading precedes an item
pub const UNTITLED_SECTION: &str = "Untitled";

/// Top-level todos per section, in document order.
///
/// Keys are full heading lines (e.g. `## Work`) or [`UNTITLED_SECTION`].
/// Only top-level nodes appear as values; nested nodes live in `children`.
pub type TodoForest = IndexMap<String, Vec<TodoNode>>;

/// A single checkbox outline item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoNode {
    /// Label text after the checkbox. The sole identity key across days:
    /// two todos match iff their items are string-equal.
    pub item: String,
    /// Raw marker character found inside the brackets
    pub state: char,
    /// Whether `state` is in the configured complete set
    pub complete: bool,
    /// Nested items, in document order
    pub children: Vec<TodoNode>,
}

impl TodoNode {
    pub fn new(item: impl Into<String>, state: char, complete: bool) -> Self {
        TodoNode {
            item: item.into(),
            state,
            complete,
            children: Vec::new(),
        }
    }

    /// True if this node or any descendant (at any depth) is incomplete
    pub fn has_incomplete_item(&self) -> bool {
        if !self.complete {
            return true;
        }
        self.children.iter().any(TodoNode::has_incomplete_item)
    }
}

/// Count of top-level todos across all sections of a forest
pub fn top_level_count(forest: &TodoForest) -> usize {
    forest.values().map(Vec::len).sum()
}
