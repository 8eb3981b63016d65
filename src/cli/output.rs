use serde::Serialize;

use crate::model::todo::{TodoForest, TodoNode};
use crate::parse::todos_to_string;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson {
    pub item: String,
    pub state: char,
    pub complete: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TodoJson>,
}

impl From<&TodoNode> for TodoJson {
    fn from(todo: &TodoNode) -> Self {
        TodoJson {
            item: todo.item.clone(),
            state: todo.state,
            complete: todo.complete,
            children: todo.children.iter().map(TodoJson::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct SectionJson {
    pub section: String,
    pub todos: Vec<TodoJson>,
}

#[derive(Serialize)]
pub struct RunSummaryJson {
    pub date: String,
    pub notes_examined: usize,
    pub incomplete_found: usize,
    pub carried: usize,
    pub previous_rewritten: usize,
    pub dry_run: bool,
}

pub fn forest_to_json(forest: &TodoForest) -> Vec<SectionJson> {
    forest
        .iter()
        .map(|(section, todos)| SectionJson {
            section: section.clone(),
            todos: todos.iter().map(TodoJson::from).collect(),
        })
        .collect()
}

/// Human-readable forest rendering: heading line, then the serialized
/// todos, blank line between sections.
pub fn format_forest(forest: &TodoForest) -> String {
    let mut blocks = Vec::new();
    for (section, todos) in forest {
        blocks.push(format!("{}\n{}", section, todos_to_string(todos)));
    }
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::todo::UNTITLED_SECTION;

    #[test]
    fn test_format_forest_sections() {
        let mut forest = TodoForest::new();
        forest.insert(UNTITLED_SECTION.to_string(), vec![TodoNode::new("a", ' ', false)]);
        forest.insert("## Work".to_string(), vec![TodoNode::new("b", 'x', true)]);
        assert_eq!(
            format_forest(&forest),
            "Untitled\n- [ ] a\n\n## Work\n- [x] b"
        );
    }

    #[test]
    fn test_todo_json_omits_empty_children() {
        let json = serde_json::to_string(&TodoJson::from(&TodoNode::new("a", ' ', false))).unwrap();
        assert!(!json.contains("children"));
    }
}
