use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

use crate::model::config::Config;
use crate::model::todo::{TodoForest, TodoNode, UNTITLED_SECTION};

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#+\s.+").expect("heading pattern is valid")
});

/// Compiled matcher for todo lines, built from the configured marker sets.
///
/// The line pattern is `^\s*- \[(<markers>)\] (.*)`. Only `-`, `^` and `\`
/// are escaped inside the character class; all other markers pass through
/// literally, so an exotic configured marker can fail to compile.
#[derive(Debug, Clone)]
pub struct TodoPattern {
    regex: Regex,
    complete: IndexSet<char>,
}

impl TodoPattern {
    pub fn new(
        allowed: &IndexSet<char>,
        complete: &IndexSet<char>,
    ) -> Result<TodoPattern, regex::Error> {
        let mut class = String::new();
        for &c in allowed {
            if matches!(c, '-' | '^' | '\\') {
                class.push('\\');
            }
            class.push(c);
        }
        let regex = Regex::new(&format!(r"^\s*- \[([{}])\] (.*)", class))?;
        Ok(TodoPattern {
            regex,
            complete: complete.clone(),
        })
    }

    pub fn from_config(config: &Config) -> Result<TodoPattern, regex::Error> {
        TodoPattern::new(&config.allowed_chars(), &config.complete_chars())
    }

    pub fn is_complete(&self, state: char) -> bool {
        self.complete.contains(&state)
    }
}

/// Parse the line at `line_num` as a todo together with its nested children.
///
/// A line only counts as a todo here if its indentation (characters before
/// the first `-`) is strictly greater than `level`; a syntactically valid
/// todo at or below `level` belongs to an enclosing call and yields `None`,
/// which is how a sibling run terminates. Top-level callers pass `level = -1`.
///
/// Returns the node and the total number of lines consumed (the node plus
/// all descendants), so the caller can skip past the whole subtree.
pub fn parse_for_todos(
    pattern: &TodoPattern,
    lines: &[&str],
    line_num: usize,
    level: isize,
) -> (Option<TodoNode>, usize) {
    let Some(line) = lines.get(line_num) else {
        return (None, 0);
    };
    let Some(caps) = pattern.regex.captures(line) else {
        return (None, 0);
    };
    let indent = line.find('-').unwrap_or(0) as isize;
    if indent <= level {
        return (None, 0);
    }

    let state = caps
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .unwrap_or(' ');
    let item = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
    let mut node = TodoNode::new(item, state, pattern.is_complete(state));

    // Scan for nested todos belonging to this one
    let mut consumed = 1;
    loop {
        let (child, child_lines) = parse_for_todos(pattern, lines, line_num + consumed, indent);
        match child {
            Some(child) => {
                node.children.push(child);
                consumed += child_lines;
            }
            None => break,
        }
    }

    (Some(node), consumed)
}

/// If `line` is a markdown heading (`#+` then whitespace then text),
/// return the whole line as the section key, hash marks included.
pub fn parse_line_for_heading(line: &str) -> Option<&str> {
    HEADING_RE.is_match(line).then_some(line)
}

/// Parse a note's full text into top-level todos grouped by section.
///
/// Headings set the current section for the items that follow; blank and
/// plain lines do not reset it. With `group_by_section` false, or before
/// the first heading, items land under [`UNTITLED_SECTION`]. Todos with an
/// empty label are discarded.
pub fn parse_text_for_todos(
    text: &str,
    group_by_section: bool,
    pattern: &TodoPattern,
) -> TodoForest {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut section: Option<String> = None;
    let mut forest = TodoForest::new();

    let mut i = 0;
    while i < lines.len() {
        let (todo, consumed) = parse_for_todos(pattern, &lines, i, -1);
        match todo {
            Some(todo) if !todo.item.is_empty() => {
                let key = match (&section, group_by_section) {
                    (Some(heading), true) => heading.as_str(),
                    _ => UNTITLED_SECTION,
                };
                forest.entry(key.to_string()).or_default().push(todo);
                i += consumed;
            }
            Some(_) => {
                // Empty label: discard the node but advance only one line,
                // so its children re-parse as their own top-level items
                i += 1;
            }
            None => {
                if let Some(heading) = parse_line_for_heading(lines[i]) {
                    section = Some(heading.to_string());
                }
                i += 1;
            }
        }
    }
    forest
}
