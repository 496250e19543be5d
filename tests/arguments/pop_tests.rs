//! Integration tests for the destructive pop family.

use ember::arguments::ArgumentList;
use ember::foundation::Duration;

fn args(tokens: &[&str]) -> ArgumentList {
    tokens.iter().copied().collect()
}

fn remaining(list: &ArgumentList) -> Vec<String> {
    (0..list.len())
        .map(|i| list.get(i).unwrap().to_string())
        .collect()
}

#[test]
fn pop_literal_peels_subcommands() {
    let mut list = args(&["time", "set", "4:30am"]);
    assert!(list.try_pop_literal("time"));
    assert!(list.try_pop_literal("set"));
    assert!(!list.try_pop_literal("add"));
    assert_eq!(remaining(&list), ["4:30am"]);
    assert_eq!(list.consumed(), 2);
}

#[test]
fn pop_one_takes_a_leading_value() {
    let mut list = args(&["30s", "then", "more"]);
    let duration = list.try_pop_one::<Duration>().unwrap();
    assert_eq!(duration.seconds(), 30.0);
    assert_eq!(remaining(&list), ["then", "more"]);
}

#[test]
fn pop_one_with_prefix_semantics() {
    // Trailing tokens beyond the matched prefix are fine
    let mut list = args(&["depth", "7", "and", "more"]);
    assert_eq!(list.try_pop_one_with::<i32>(Some("depth"), None), Some(7));
    assert_eq!(remaining(&list), ["and", "more"]);

    // But the literals must sit exactly at their positions
    let mut list = args(&["7", "depth"]);
    assert_eq!(list.try_pop_one_with::<i32>(Some("depth"), None), None);
    assert_eq!(list.len(), 2);
}

#[test]
fn pop_any_removes_exactly_the_matched_pair() {
    let mut list = args(&["foo", "bar", "depth", "7", "baz"]);
    assert_eq!(list.try_pop_any::<i32>("depth"), Some(7));
    assert_eq!(remaining(&list), ["foo", "bar", "baz"]);
}

#[test]
fn pop_any_scans_the_full_sequence() {
    // No match anywhere - including a literal with no following value
    let mut list = args(&["a", "b", "depth"]);
    assert_eq!(list.try_pop_any::<i32>("depth"), None);
    assert_eq!(remaining(&list), ["a", "b", "depth"]);

    // Match deep in the sequence
    let mut list = args(&["a", "b", "c", "d", "depth", "42"]);
    assert_eq!(list.try_pop_any::<i32>("depth"), Some(42));
    assert_eq!(remaining(&list), ["a", "b", "c", "d"]);
}

#[test]
fn pop_any_takes_the_first_of_several_matches() {
    let mut list = args(&["depth", "1", "depth", "2"]);
    assert_eq!(list.try_pop_any::<i32>("depth"), Some(1));
    assert_eq!(remaining(&list), ["depth", "2"]);
    assert_eq!(list.try_pop_any::<i32>("depth"), Some(2));
    assert!(list.is_empty());
}

#[test]
fn pops_compose_with_patterns() {
    // A realistic flow: peel the subcommand, grab an option pair from
    // anywhere, then pattern-match what is left.
    let mut list = args(&["give", "sword", "count", "3", "to", "guard"]);
    assert!(list.try_pop_literal("give"));
    assert_eq!(list.try_pop_any::<i32>("count"), Some(3));
    assert_eq!(
        list.try_parse_two_with::<String, String>(None, Some("to"), None),
        Some(("sword".to_string(), "guard".to_string()))
    );
}
