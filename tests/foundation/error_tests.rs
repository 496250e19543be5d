//! Integration tests for the error taxonomy.
//!
//! Tests error construction, kinds, and the rendered user-facing messages.

use ember::foundation::{Error, ErrorKind};

#[test]
fn too_few_arguments_message() {
    let err = Error::too_few_arguments();
    assert!(matches!(err.kind, ErrorKind::TooFewArguments));
    assert_eq!(format!("{err}"), "too few arguments given");
}

#[test]
fn type_mismatch_names_position_and_type() {
    let err = Error::type_mismatch(3, "a duration");
    assert_eq!(format!("{err}"), "expected a duration for argument 3");
    if let ErrorKind::TypeMismatch { position, expected } = &err.kind {
        assert_eq!(*position, 3);
        assert_eq!(*expected, "a duration");
    } else {
        panic!("wrong kind: {:?}", err.kind);
    }
}

#[test]
fn syntax_error_carries_rendered_usage() {
    let err = Error::syntax("set <a time of day>");
    assert_eq!(format!("{err}"), "expected syntax: set <a time of day>");
    if let ErrorKind::Syntax { usage } = &err.kind {
        assert_eq!(usage, "set <a time of day>");
    } else {
        panic!("wrong kind");
    }
}

#[test]
fn no_arguments_expected_message() {
    assert_eq!(
        format!("{}", Error::no_arguments_expected()),
        "no arguments expected"
    );
}

#[test]
fn invalid_time_message() {
    let err = Error::invalid_time();
    assert!(matches!(err.kind, ErrorKind::InvalidTime));
    assert_eq!(format!("{err}"), "invalid time");
}

#[test]
fn errors_implement_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::too_few_arguments());
}
