use crate::model::config::Config;
use crate::model::todo::{TodoForest, top_level_count};
use crate::ops::insert::{insert_incomplete_todos, remove_empty_todos};
use crate::ops::reconcile::{filter_out_existing_todos, remaining_incomplete_todos};
use crate::ops::remove::remove_incomplete_todos;
use crate::parse::{TodoPattern, parse_text_for_todos};

/// Error type for a rollover run
#[derive(Debug, thiserror::Error)]
pub enum RolloverError {
    #[error("todo marker set does not form a valid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result of one rollover pass, pure text in / text out.
#[derive(Debug)]
pub struct RolloverOutcome {
    /// Updated text for today's note
    pub today_text: String,
    /// Per prior note (same order as the input), the rewritten text, or
    /// None when that note is unchanged
    pub updated_previous: Vec<Option<String>>,
    /// Top-level todos still open across the prior notes
    pub incomplete_found: usize,
    /// Of those, how many were actually added to today's note
    pub carried: usize,
    /// The forest that was inserted, for reporting
    pub carried_todos: TodoForest,
}

/// Run the whole pipeline over in-memory note texts.
///
/// `previous_texts` must be ordered oldest first; the ordering decides
/// which day's version of a repeated item wins. Today's note text comes in
/// separately and is never treated as a source of carried items, only as
/// the dedup baseline and insertion target.
pub fn roll_forward(
    previous_texts: &[String],
    today_text: &str,
    config: &Config,
) -> Result<RolloverOutcome, RolloverError> {
    let pattern = TodoPattern::from_config(config)?;

    let previous_forests: Vec<TodoForest> = previous_texts
        .iter()
        .map(|text| parse_text_for_todos(text, config.group_by_section, &pattern))
        .collect();
    for (i, forest) in previous_forests.iter().enumerate() {
        log::debug!(
            "note {} of {}: {} top-level todos",
            i + 1,
            previous_forests.len(),
            top_level_count(forest)
        );
    }
    let today_forest = parse_text_for_todos(today_text, config.group_by_section, &pattern);

    let incomplete = remaining_incomplete_todos(&previous_forests);
    let incomplete_found = top_level_count(&incomplete);
    log::info!("{incomplete_found} top-level incomplete todos found in previous notes");

    let missing = filter_out_existing_todos(incomplete, &today_forest);
    let carried = top_level_count(&missing);
    log::info!("of those, {carried} not yet in today's note");

    let mut new_today = if carried > 0 {
        insert_incomplete_todos(&missing, config.group_by_section, today_text)
    } else {
        today_text.to_string()
    };
    if config.remove_empty_todos {
        new_today = remove_empty_todos(&new_today);
    }

    let updated_previous = if config.remove_from_previous {
        previous_texts
            .iter()
            .map(|text| {
                let rewritten =
                    remove_incomplete_todos(text, &missing, config.group_by_section, &pattern);
                (rewritten != *text).then_some(rewritten)
            })
            .collect()
    } else {
        vec![None; previous_texts.len()]
    };

    Ok(RolloverOutcome {
        today_text: new_today,
        updated_previous,
        incomplete_found,
        carried,
        carried_todos: missing,
    })
}
