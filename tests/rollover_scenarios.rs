//! End-to-end scenarios for the parse → reconcile → filter → insert →
//! remove pipeline, exercised through the public library API.

use pretty_assertions::assert_eq;
use rollover::model::{Config, TodoForest, TodoNode, UNTITLED_SECTION};
use rollover::ops::{
    filter_out_existing_todos, insert_incomplete_todos, remaining_incomplete_todos,
    remove_incomplete_todos, roll_forward,
};
use rollover::parse::{TodoPattern, parse_for_todos, parse_text_for_todos, todos_to_string};

fn pattern() -> TodoPattern {
    TodoPattern::from_config(&Config::default()).unwrap()
}

fn parse(text: &str) -> TodoForest {
    parse_text_for_todos(text, true, &pattern())
}

// ---------------------------------------------------------------------------
// Reconciliation scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_two_days_same_item_yields_one_entry() {
    let days = vec![parse("- [ ] item 1\n"), parse("- [ ] item 1\n")];
    let result = remaining_incomplete_todos(&days);
    assert_eq!(result.len(), 1);
    assert_eq!(result[UNTITLED_SECTION].len(), 1);
    assert_eq!(result[UNTITLED_SECTION][0].item, "item 1");
}

#[test]
fn scenario_completion_on_day_two_cancels() {
    let days = vec![parse("- [ ] item 1\n"), parse("- [x] item 1\n")];
    let result = remaining_incomplete_todos(&days);
    assert_eq!(result[UNTITLED_SECTION], Vec::<TodoNode>::new());
}

#[test]
fn scenario_reappearance_on_day_three_comes_back() {
    let days = vec![
        parse("- [ ] item 1\n"),
        parse("- [x] item 1\n"),
        parse("- [ ] item 1\n"),
    ];
    let result = remaining_incomplete_todos(&days);
    assert_eq!(result[UNTITLED_SECTION].len(), 1);
    assert!(!result[UNTITLED_SECTION][0].complete);
}

// ---------------------------------------------------------------------------
// Insertion scenario
// ---------------------------------------------------------------------------

#[test]
fn scenario_insert_without_sections_appends_block() {
    let forest = parse("- [ ] item 1\n- [x] item 2\n\t- [ ] item 3\n\t- [x] item 4\n");
    let result = insert_incomplete_todos(&forest, false, "beginning\nmore text\n");
    assert_eq!(
        result,
        "beginning\nmore text\n\n- [ ] item 1\n- [x] item 2\n\t- [ ] item 3\n\t- [x] item 4"
    );
}

// ---------------------------------------------------------------------------
// Removal scenario
// ---------------------------------------------------------------------------

#[test]
fn scenario_completed_copy_survives_removal() {
    // The label is targeted for removal, but this note holds a completed
    // copy with no incomplete children: it stays, descendants included
    let source = "## Work\n- [x] item 1\n\t- [x] sub a\n\t- [X] sub b\nafterword\n";
    let targets = parse("## Work\n- [ ] item 1\n");
    let result = remove_incomplete_todos(source, &targets, true, &pattern());
    assert_eq!(result, source);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn property_render_then_reparse_reproduces_node() {
    let text = "- [/] parent item\n\t- [x] done child\n\t- [ ] open child\n\t\t- [X] leaf";
    let lines: Vec<&str> = text.split('\n').collect();
    let (node, consumed) = parse_for_todos(&pattern(), &lines, 0, -1);
    let node = node.unwrap();
    assert_eq!(consumed, 4);

    let rendered = todos_to_string(std::slice::from_ref(&node));
    assert_eq!(rendered, text);

    let relines: Vec<&str> = rendered.split('\n').collect();
    let (reparsed, _) = parse_for_todos(&pattern(), &relines, 0, -1);
    assert_eq!(reparsed.unwrap(), node);
}

#[test]
fn property_filter_against_empty_is_identity() {
    let forest = parse("## Work\n- [ ] a\n- [x] b\n\t- [ ] c\n");
    let result = filter_out_existing_todos(forest.clone(), &TodoForest::new());
    assert_eq!(result, forest);
}

#[test]
fn property_filter_against_self_empties_shared_sections() {
    let forest = parse("## Work\n- [ ] a\n\n## Home\n- [ ] b\n");
    let result = filter_out_existing_todos(forest.clone(), &forest);
    assert!(result.is_empty());
}

#[test]
fn property_single_day_reconcile_drops_only_fully_complete() {
    let forest = parse(
        "## Work\n- [ ] open\n- [x] closed\n- [x] closed parent\n\t- [ ] open child\n",
    );
    let result = remaining_incomplete_todos(std::slice::from_ref(&forest));
    let items: Vec<&str> = result["## Work"].iter().map(|t| t.item.as_str()).collect();
    assert_eq!(items, vec!["open", "closed parent"]);
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

#[test]
fn full_week_rollover_with_removal() {
    let monday = "\
# Monday

## Work
- [ ] quarterly report
\t- [x] gather numbers
\t- [ ] write summary
- [x] email client

## Home
- [ ] fix the gate
";
    let tuesday = "\
# Tuesday

## Work
- [x] quarterly report
\t- [x] gather numbers
\t- [x] write summary
- [ ] review slides
";
    let wednesday = "\
# Wednesday

## Work
- [ ] plan offsite

## Home
";
    let config = Config {
        remove_from_previous: true,
        remove_empty_todos: false,
        ..Config::default()
    };
    let previous = vec![monday.to_string(), tuesday.to_string()];
    let outcome = roll_forward(&previous, wednesday, &config).unwrap();

    // report completed Tuesday; slides and the gate are still open
    assert_eq!(outcome.incomplete_found, 2);
    assert_eq!(outcome.carried, 2);
    assert_eq!(
        outcome.today_text,
        "\
# Wednesday

## Work
- [ ] review slides
- [ ] plan offsite

## Home
- [ ] fix the gate
"
    );

    // Monday keeps its email and its report (neither was carried); the
    // gate was carried, so it is dropped
    let monday_after = outcome.updated_previous[0].as_deref().unwrap();
    assert!(monday_after.contains("- [ ] quarterly report"));
    assert!(monday_after.contains("- [x] email client"));
    assert!(!monday_after.contains("fix the gate"));

    // Tuesday loses the carried slides, keeps its completed report
    let tuesday_after = outcome.updated_previous[1].as_deref().unwrap();
    assert!(tuesday_after.contains("- [x] quarterly report"));
    assert!(!tuesday_after.contains("review slides"));
}
