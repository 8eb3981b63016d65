use crate::model::todo::{TodoForest, TodoNode};

/// Fold several days' forests (oldest first) into the todos still open.
///
/// A top-level todo with any incomplete item in its hierarchy is carried
/// into the result under its section; if the same label is already there,
/// the newer occurrence replaces it wholesale, children and all. A todo
/// that shows up fully complete cancels any earlier occurrence of its
/// label. Children are never compared; the last-seen version wins.
pub fn remaining_incomplete_todos(days: &[TodoForest]) -> TodoForest {
    let mut incomplete = TodoForest::new();
    for day in days {
        for (section, todos) in day {
            for todo in todos {
                if todo.has_incomplete_item() {
                    let entries = incomplete.entry(section.clone()).or_default();
                    match entries.iter_mut().find(|e| e.item == todo.item) {
                        Some(existing) => *existing = todo.clone(),
                        None => entries.push(todo.clone()),
                    }
                } else if let Some(entries) = incomplete.get_mut(section) {
                    // A later completion cancels an earlier incompleteness.
                    // The section key stays, even when its list empties.
                    entries.retain(|e| e.item != todo.item);
                }
            }
        }
    }
    incomplete
}

/// Drop candidate todos whose label already appears in `existing` under
/// the same section. Sections absent from `existing` pass through whole;
/// sections with nothing left are omitted.
pub fn filter_out_existing_todos(candidate: TodoForest, existing: &TodoForest) -> TodoForest {
    let mut remaining = TodoForest::new();
    for (section, entries) in candidate {
        match existing.get(&section) {
            None => {
                remaining.insert(section, entries);
            }
            Some(present) => {
                let fresh: Vec<TodoNode> = entries
                    .into_iter()
                    .filter(|entry| !present.iter().any(|p| p.item == entry.item))
                    .collect();
                if !fresh.is_empty() {
                    remaining.insert(section, fresh);
                }
            }
        }
    }
    remaining
}
