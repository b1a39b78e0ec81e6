//! Day 2: password philosophy
//!
//! Each input line pairs a policy with a password. The same parsed line is
//! read under two rules: part 1 treats the policy numbers as an inclusive
//! occurrence-count range for the letter, part 2 treats them as 1-indexed
//! positions of which exactly one must hold the letter. Both parts answer
//! with the count of valid lines.

use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::input;

use super::{Solution, Solver};

/// Errors that can occur while parsing a policy line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyParseError {
    /// A fixed delimiter is missing from the line
    #[error("line {line:?}: missing {delimiter:?}")]
    MissingDelimiter {
        /// The offending line
        line: String,
        /// The delimiter that was not found
        delimiter: &'static str,
    },

    /// A policy bound or position is not an integer
    #[error("line {line:?}: {token:?} is not a number")]
    BadNumber {
        /// The offending line
        line: String,
        /// The token that failed integer conversion
        token: String,
    },

    /// The policy letter is not a single character
    #[error("line {0:?}: policy letter must be a single character")]
    BadLetter(String),
}

/// A per-line validation rule: two numbers and a letter
///
/// The numbers are an occurrence-count range under the old interpretation
/// and a pair of 1-indexed positions under the corrected one; the same
/// parsed policy serves both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// First number (low bound, or first position)
    pub a: usize,
    /// Second number (high bound, or second position)
    pub b: usize,
    /// The letter the rule applies to
    pub letter: char,
}

impl Policy {
    /// Count rule: `letter` occurs between `a` and `b` times inclusive.
    #[must_use]
    pub fn allows_count(&self, password: &str) -> bool {
        let occurrences = password.chars().filter(|&c| c == self.letter).count();
        (self.a..=self.b).contains(&occurrences)
    }

    /// Position rule: `letter` sits at exactly one of the 1-indexed
    /// positions `a` and `b`. Equal positions can never satisfy the
    /// exclusive-or, so they are always invalid.
    #[must_use]
    pub fn allows_positions(&self, password: &str) -> bool {
        let holds_letter = |position: usize| {
            position
                .checked_sub(1)
                .and_then(|index| password.chars().nth(index))
                == Some(self.letter)
        };
        holds_letter(self.a) ^ holds_letter(self.b)
    }
}

/// One parsed input line: a policy and the password it governs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyLine {
    /// The validation rule
    pub policy: Policy,
    /// The password to validate
    pub password: String,
}

impl FromStr for PolicyLine {
    type Err = PolicyParseError;

    /// Parse `"<a>-<b> <letter>: <password>"`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let missing = |delimiter| PolicyParseError::MissingDelimiter {
            line: line.to_string(),
            delimiter,
        };

        let (policy, password) = line.split_once(": ").ok_or_else(|| missing(": "))?;
        let (range, letter) = policy.split_once(' ').ok_or_else(|| missing(" "))?;
        let (low, high) = range.split_once('-').ok_or_else(|| missing("-"))?;

        let number = |token: &str| {
            token.parse().map_err(|_| PolicyParseError::BadNumber {
                line: line.to_string(),
                token: token.to_string(),
            })
        };

        let mut letters = letter.chars();
        let letter = match (letters.next(), letters.next()) {
            (Some(c), None) => c,
            _ => return Err(PolicyParseError::BadLetter(line.to_string())),
        };

        Ok(Self {
            policy: Policy {
                a: number(low)?,
                b: number(high)?,
                letter,
            },
            password: password.to_string(),
        })
    }
}

/// Parse every input line into a [`PolicyLine`], in input order.
pub fn parse_lines(input: &str) -> Result<Vec<PolicyLine>, PolicyParseError> {
    input::lines(input).map(str::parse).collect()
}

/// Count the lines whose password is valid under the count rule.
#[must_use]
pub fn part_1(lines: &[PolicyLine]) -> usize {
    lines.iter().filter(|l| l.policy.allows_count(&l.password)).count()
}

/// Count the lines whose password is valid under the position rule.
#[must_use]
pub fn part_2(lines: &[PolicyLine]) -> usize {
    lines.iter().filter(|l| l.policy.allows_positions(&l.password)).count()
}

/// Day-2 solver
#[derive(Debug, Clone, Copy)]
pub struct PasswordPhilosophy;

impl Solver for PasswordPhilosophy {
    fn day(&self) -> u8 {
        2
    }

    fn name(&self) -> &'static str {
        "password philosophy"
    }

    fn solve(&self, input: &str) -> anyhow::Result<Solution> {
        let lines = parse_lines(input)?;
        debug!("parsed {} policy lines", lines.len());

        Ok(Solution {
            part_1: part_1(&lines).to_string(),
            part_2: part_2(&lines).to_string(),
        })
    }
}
