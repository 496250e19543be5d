//! Integration tests for the `H:MMam` / `H:MMpm` grammar.

use ember::worldtime::{Meridiem, WorldTime};

#[test]
fn parses_every_valid_minute_tick() {
    for hour in 1..=12u8 {
        for minute in 0..60u8 {
            for marker in ["am", "pm"] {
                let input = format!("{hour}:{minute:02}{marker}");
                let time = WorldTime::parse(&input).unwrap_or_else(|| panic!("{input}"));
                assert_eq!(time.hour(), hour, "{input}");
                assert_eq!(time.minute(), minute, "{input}");
            }
        }
    }
}

#[test]
fn meridiem_marker_is_case_insensitive() {
    for input in ["4:30am", "4:30AM", "4:30Am", "4:30aM"] {
        assert_eq!(WorldTime::parse(input).unwrap().meridiem(), Meridiem::Am, "{input}");
    }
    assert_eq!(WorldTime::parse("4:30PM").unwrap().meridiem(), Meridiem::Pm);
}

#[test]
fn hour_must_be_one_through_twelve() {
    assert!(WorldTime::parse("0:30am").is_none());
    assert!(WorldTime::parse("13:30am").is_none());
    assert!(WorldTime::parse("99:30am").is_none());
    assert!(WorldTime::parse("1:30am").is_some());
    assert!(WorldTime::parse("12:30am").is_some());
}

#[test]
fn minute_must_be_exactly_two_digits() {
    assert!(WorldTime::parse("4:5am").is_none());
    assert!(WorldTime::parse("4:059am").is_none());
    assert!(WorldTime::parse("4:05am").is_some());
}

#[test]
fn minute_must_be_under_sixty() {
    assert!(WorldTime::parse("4:59am").is_some());
    assert!(WorldTime::parse("4:60am").is_none());
    assert!(WorldTime::parse("4:99am").is_none());
}

#[test]
fn malformed_shapes_yield_no_match() {
    for input in [
        "",
        ":",
        "430am",
        "4:30",
        "4:30 am",
        "4.30am",
        "4:30zm",
        "am:30am",
        "4:3Oam",
        "4::30am",
        "12:00noon",
    ] {
        assert!(WorldTime::parse(input).is_none(), "{input}");
    }
}

#[test]
fn display_matches_the_clock_format() {
    assert_eq!(WorldTime::parse("4:05am").unwrap().to_string(), "4:05 AM");
    assert_eq!(WorldTime::parse("12:00pm").unwrap().to_string(), "12:00 PM");
    assert_eq!(WorldTime::parse("11:59PM").unwrap().to_string(), "11:59 PM");
}
