//! Integration tests for Duration parsing.
//!
//! Sweeps the suffix grids over every byte-sized count and checks the
//! order-sensitive suffix handling.

use ember::foundation::Duration;

#[test]
fn seconds_suffix_over_full_byte_range() {
    for i in 0u32..=255 {
        let parsed = Duration::parse(&format!("{i}s")).unwrap();
        assert_eq!(parsed.seconds(), f64::from(i), "{i}s");
    }
}

#[test]
fn millisecond_suffix_over_full_byte_range() {
    for i in 0u32..=255 {
        let parsed = Duration::parse(&format!("{i}ms")).unwrap();
        assert_eq!(parsed.seconds(), f64::from(i) * 1e-3, "{i}ms");
    }
}

#[test]
fn hour_suffix_over_full_byte_range() {
    for i in 0u32..=255 {
        let parsed = Duration::parse(&format!("{i}h")).unwrap();
        assert_eq!(parsed.seconds(), f64::from(i) * 3600.0, "{i}h");
    }
}

#[test]
fn all_suffix_scales() {
    let cases = [
        ("3ms", 3e-3),
        ("3us", 3e-6),
        ("3s", 3.0),
        ("3m", 180.0),
        ("3h", 10_800.0),
        ("3d", 259_200.0),
        ("3mo", 3.0 * 30.0 * 86_400.0),
        ("3y", 3.0 * 365.0 * 86_400.0),
        ("3yr", 3.0 * 365.0 * 86_400.0),
        ("3", 3.0),
    ];
    for (input, seconds) in cases {
        assert_eq!(Duration::parse(input).unwrap().seconds(), seconds, "{input}");
    }
}

#[test]
fn month_and_year_are_not_eaten_by_shorter_suffixes() {
    // "mo" must not parse as minutes, "yr" must not parse as years-plus-junk
    assert_eq!(Duration::parse("1mo").unwrap().seconds(), 2_592_000.0);
    assert_eq!(Duration::parse("1yr").unwrap(), Duration::parse("1y").unwrap());
}

#[test]
fn suffix_without_number_fails() {
    for input in ["ms", "us", "s", "m", "h", "d", "mo", "y", "yr"] {
        assert_eq!(Duration::parse(input), None, "{input}");
    }
}

#[test]
fn composite_literals_are_unsupported() {
    assert_eq!(Duration::parse("4h30m"), None);
    assert_eq!(Duration::parse("1m30s"), None);
}
