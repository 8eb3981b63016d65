use crate::model::todo::TodoNode;

/// Render one todo and its children, depth-first, one line per node.
/// Depth is rendered as one tab per level: `\t- [<state>] <item>`.
pub fn todo_to_lines(todo: &TodoNode, depth: usize) -> Vec<String> {
    let mut entries = vec![format!("{}- [{}] {}", "\t".repeat(depth), todo.state, todo.item)];
    for child in &todo.children {
        entries.extend(todo_to_lines(child, depth + 1));
    }
    entries
}

/// Render a run of top-level todos as newline-joined lines, no trailing
/// newline.
pub fn todos_to_string(todos: &[TodoNode]) -> String {
    let mut entries = Vec::new();
    for todo in todos {
        entries.extend(todo_to_lines(todo, 0));
    }
    entries.join("\n")
}
