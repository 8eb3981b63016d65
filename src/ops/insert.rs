use std::sync::LazyLock;

use regex::Regex;

use crate::model::todo::TodoForest;
use crate::parse::todos_to_string;

static EMPTY_TODO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*- \[ \]\s*$").expect("empty-todo pattern is valid")
});

/// Insert carried todos into today's note text.
///
/// With `by_section` false every section's items are appended to the end
/// of the note, each run preceded by a blank line. With `by_section` true
/// each section key is looked up as a literal substring of the (already
/// partially updated) note text and the items become the first lines under
/// that heading; a heading that cannot be found is logged and that
/// section's items are appended to the end instead. The substring match is
/// deliberate: it mirrors the section keys being full heading lines, but
/// is ambiguous when the same heading text recurs inside the note.
pub fn insert_incomplete_todos(todos: &TodoForest, by_section: bool, note_text: &str) -> String {
    let mut new_text = note_text.to_string();
    if by_section {
        for (section, entries) in todos {
            match new_text.find(section.as_str()) {
                Some(index) => {
                    log::debug!("adding todos for section {section} under its heading");
                    let (before, rest) = new_text.split_at(index);
                    let after = &rest[section.len()..];
                    let mut rebuilt =
                        String::with_capacity(new_text.len() + section.len() + entries.len() * 16);
                    rebuilt.push_str(before);
                    rebuilt.push_str(section);
                    rebuilt.push('\n');
                    rebuilt.push_str(&todos_to_string(entries));
                    rebuilt.push_str(after);
                    new_text = rebuilt;
                }
                None => {
                    log::warn!(
                        "failed to find heading {section:?} in today's note; adding its items to the end"
                    );
                    new_text.push('\n');
                    new_text.push_str(&todos_to_string(entries));
                }
            }
        }
    } else {
        log::debug!("adding incomplete todos to the end of the note");
        for entries in todos.values() {
            new_text.push('\n');
            new_text.push_str(&todos_to_string(entries));
        }
    }
    new_text
}

/// Strip empty incomplete todos (`- [ ]` with nothing after it) from the
/// whole note. The match is global, not section-scoped; the line's newline
/// survives, leaving a blank line behind.
pub fn remove_empty_todos(note_text: &str) -> String {
    EMPTY_TODO_RE.replace_all(note_text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::todo::{TodoNode, UNTITLED_SECTION};
    use pretty_assertions::assert_eq;

    fn open(item: &str) -> TodoNode {
        TodoNode::new(item, ' ', false)
    }

    #[test]
    fn test_append_to_end_without_sections() {
        let mut item2 = TodoNode::new("item 2", 'x', true);
        item2.children.push(open("item 3"));
        item2.children.push(TodoNode::new("item 4", 'x', true));
        let mut forest = TodoForest::new();
        forest.insert(UNTITLED_SECTION.to_string(), vec![open("item 1"), item2]);

        let result = insert_incomplete_todos(&forest, false, "beginning\nmore text\n");
        assert_eq!(
            result,
            "beginning\nmore text\n\n- [ ] item 1\n- [x] item 2\n\t- [ ] item 3\n\t- [x] item 4"
        );
    }

    #[test]
    fn test_insert_under_matching_heading() {
        let mut forest = TodoForest::new();
        forest.insert("## Work".to_string(), vec![open("carried")]);

        let note = "# Today\n\n## Work\n- [ ] existing\n\n## Home\n";
        let result = insert_incomplete_todos(&forest, true, note);
        assert_eq!(
            result,
            "# Today\n\n## Work\n- [ ] carried\n- [ ] existing\n\n## Home\n"
        );
    }

    #[test]
    fn test_missing_heading_falls_back_to_append() {
        let mut forest = TodoForest::new();
        forest.insert("## Errands".to_string(), vec![open("stamps")]);

        let result = insert_incomplete_todos(&forest, true, "# Today\n");
        assert_eq!(result, "# Today\n\n- [ ] stamps");
    }

    #[test]
    fn test_multiple_sections_inserted_in_forest_order() {
        let mut forest = TodoForest::new();
        forest.insert("## Work".to_string(), vec![open("report")]);
        forest.insert("## Home".to_string(), vec![open("dishes")]);

        let note = "## Work\n\n## Home\n";
        let result = insert_incomplete_todos(&forest, true, note);
        assert_eq!(result, "## Work\n- [ ] report\n\n## Home\n- [ ] dishes\n");
    }

    #[test]
    fn test_heading_text_recurring_in_body_is_matched_first() {
        // Known quirk: the heading is found by raw substring search, so an
        // earlier verbatim occurrence of the heading text wins even though
        // it is not a heading line.
        let mut forest = TodoForest::new();
        forest.insert("## Work".to_string(), vec![open("carried")]);

        let note = "quote: ## Work is busy\n\n## Work\n";
        let result = insert_incomplete_todos(&forest, true, note);
        assert_eq!(result, "quote: ## Work\n- [ ] carried is busy\n\n## Work\n");
    }

    #[test]
    fn test_remove_empty_todos_strips_globally() {
        let note = "- [ ] keep me\n- [ ]\n## Work\n\t- [ ] \n- [x]\n";
        let result = remove_empty_todos(note);
        assert_eq!(result, "- [ ] keep me\n\n## Work\n\n- [x]\n");
    }

    #[test]
    fn test_remove_empty_todos_ignores_marked_boxes() {
        let note = "- [x]\n- [/]\n";
        assert_eq!(remove_empty_todos(note), note);
    }
}
