use crate::model::todo::{TodoForest, UNTITLED_SECTION};
use crate::parse::{TodoPattern, parse_for_todos, parse_line_for_heading};

/// Rewrite a prior note's text, dropping the todos that were carried into
/// today's note.
///
/// The text is re-scanned with the same parser used for collection. A
/// matched todo is dropped with all the lines its subtree consumed, unless
/// it is itself complete with no incomplete descendant: that shape means a
/// later note re-introduced the item, and the completed copy should stay
/// where it was. Non-todo lines and untargeted todos pass through
/// untouched.
///
/// When a dropped todo's children differ from the version carried forward,
/// those children are gone for good. Accepted trade-off.
pub fn remove_incomplete_todos(
    previous_text: &str,
    carried: &TodoForest,
    by_section: bool,
    pattern: &TodoPattern,
) -> String {
    let lines: Vec<&str> = previous_text.split('\n').collect();
    let mut kept: Vec<&str> = Vec::new();
    let mut section: Option<String> = None;

    let mut i = 0;
    while i < lines.len() {
        let (todo, consumed) = parse_for_todos(pattern, &lines, i, -1);
        match todo {
            Some(todo) if !todo.item.is_empty() => {
                let key = match (&section, by_section) {
                    (Some(heading), true) => heading.as_str(),
                    _ => UNTITLED_SECTION,
                };
                let targeted = carried
                    .get(key)
                    .is_some_and(|todos| todos.iter().any(|c| c.item == todo.item));
                if targeted {
                    if todo.complete && !todo.has_incomplete_item() {
                        log::info!("not removing {:?}: it is complete here", todo.item);
                        kept.extend(&lines[i..i + consumed]);
                    } else {
                        log::info!("removing {:?}: it was carried to today's note", todo.item);
                    }
                } else {
                    kept.extend(&lines[i..i + consumed]);
                }
                i += consumed;
            }
            _ => {
                if let Some(heading) = parse_line_for_heading(lines[i]) {
                    section = Some(heading.to_string());
                }
                kept.push(lines[i]);
                i += 1;
            }
        }
    }
    kept.join("\n")
}
