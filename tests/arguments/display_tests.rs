//! Integration tests for tokenization and display escaping.

use ember::arguments::ArgumentList;

#[test]
fn tokenize_preserves_argument_order() {
    let args = ArgumentList::tokenize("ban griefer 2h spam");
    let tokens: Vec<_> = (0..args.len()).map(|i| args.get(i).unwrap()).collect();
    assert_eq!(tokens, ["ban", "griefer", "2h", "spam"]);
}

#[test]
fn escaped_space_stays_in_one_token() {
    let args = ArgumentList::tokenize(r"motd Welcome\ back everyone");
    assert_eq!(args.len(), 3);
    assert_eq!(args.get(1), Some("Welcome back"));
}

#[test]
fn display_is_reconstructible_for_space_escapes() {
    let args: ArgumentList = ["say", "two words", "end"].into_iter().collect();
    let rendered = args.to_string();
    assert_eq!(rendered, r"say two\ words end");
    assert_eq!(ArgumentList::tokenize(&rendered), args);
}

#[test]
fn display_of_empty_list_is_empty() {
    assert_eq!(ArgumentList::new().to_string(), "");
}

#[test]
fn indices_are_validated_not_panicking() {
    let args = ArgumentList::tokenize("one two");
    assert_eq!(args.get(5), None);
    assert!(args.try_get_at::<i32>(999).is_none());
}
