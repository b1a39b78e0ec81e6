//! Tests for the day-2 password-philosophy solver
//!
//! One parsed policy line, two readings: an inclusive occurrence-count
//! range (part 1) and a pair of 1-indexed positions of which exactly one
//! must hold the letter (part 2).

use solstice::solvers::{Policy, PolicyLine, PolicyParseError};
use solstice::solvers::password_philosophy::{parse_lines, part_1, part_2};

const SAMPLE: &str = "1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n";

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_line_shape() {
    let line: PolicyLine = "1-3 a: abcde".parse().unwrap();
    assert_eq!(
        line,
        PolicyLine {
            policy: Policy {
                a: 1,
                b: 3,
                letter: 'a'
            },
            password: "abcde".to_string(),
        }
    );
}

#[test]
fn parse_lines_sample() {
    let lines = parse_lines(SAMPLE).unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].policy.letter, 'c');
    assert_eq!(lines[2].password, "ccccccccc");
}

#[test]
fn parse_rejects_missing_colon() {
    let err = "1-3 a abcde".parse::<PolicyLine>().unwrap_err();
    assert_eq!(
        err,
        PolicyParseError::MissingDelimiter {
            line: "1-3 a abcde".to_string(),
            delimiter: ": ",
        }
    );
}

#[test]
fn parse_rejects_missing_dash() {
    let err = "13 a: abcde".parse::<PolicyLine>().unwrap_err();
    assert_eq!(
        err,
        PolicyParseError::MissingDelimiter {
            line: "13 a: abcde".to_string(),
            delimiter: "-",
        }
    );
}

#[test]
fn parse_rejects_non_numeric_bound() {
    let err = "x-3 a: abcde".parse::<PolicyLine>().unwrap_err();
    assert_eq!(
        err,
        PolicyParseError::BadNumber {
            line: "x-3 a: abcde".to_string(),
            token: "x".to_string(),
        }
    );
}

#[test]
fn parse_rejects_multi_character_letter() {
    let err = "1-3 ab: abcde".parse::<PolicyLine>().unwrap_err();
    assert_eq!(err, PolicyParseError::BadLetter("1-3 ab: abcde".to_string()));
}

// =============================================================================
// Count rule (part 1)
// =============================================================================

#[test]
fn part_1_sample() {
    let lines = parse_lines(SAMPLE).unwrap();
    assert_eq!(part_1(&lines), 2);
}

#[test]
fn count_rule_exact_bound() {
    // low == high admits only that exact occurrence count.
    let policy = Policy {
        a: 2,
        b: 2,
        letter: 'a',
    };
    assert!(policy.allows_count("aa"));
    assert!(!policy.allows_count("a"));
    assert!(!policy.allows_count("aaa"));
}

#[test]
fn count_rule_inclusive_bounds() {
    let policy = Policy {
        a: 1,
        b: 3,
        letter: 'c',
    };
    assert!(policy.allows_count("c"));
    assert!(policy.allows_count("ccc"));
    assert!(!policy.allows_count("dddd"));
    assert!(!policy.allows_count("cccc"));
}

// =============================================================================
// Position rule (part 2)
// =============================================================================

#[test]
fn part_2_sample() {
    let lines = parse_lines(SAMPLE).unwrap();
    assert_eq!(part_2(&lines), 1);
}

#[test]
fn position_rule_exactly_one_match() {
    let policy = Policy {
        a: 1,
        b: 3,
        letter: 'a',
    };
    assert!(policy.allows_positions("abcde"));
    // Letter at both positions fails the exclusive-or.
    assert!(!policy.allows_positions("aba"));
    // Letter at neither position fails too.
    assert!(!policy.allows_positions("bcdef"));
}

#[test]
fn position_rule_equal_positions_never_valid() {
    let policy = Policy {
        a: 2,
        b: 2,
        letter: 'b',
    };
    assert!(!policy.allows_positions("abc"));
    assert!(!policy.allows_positions("xyz"));
}

#[test]
fn position_rule_out_of_range_position() {
    // A position past the end of the password simply does not match.
    let policy = Policy {
        a: 1,
        b: 99,
        letter: 'a',
    };
    assert!(policy.allows_positions("abc"));
}

#[test]
fn parts_are_idempotent() {
    let lines = parse_lines(SAMPLE).unwrap();
    assert_eq!(part_1(&lines), part_1(&lines));
    assert_eq!(part_2(&lines), part_2(&lines));
}
