//! Day 1: report repair
//!
//! Given a list of expense entries, find the combination of exactly two
//! (part 1) or exactly three (part 2) entries that sums to 2020 and answer
//! with the product of those entries. Combinations are enumerated in
//! lexicographic order over index positions and the search stops at the
//! first match; the puzzle guarantees exactly one qualifying combination,
//! so zero or multiple matches are not handled specially.

use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::input;

use super::{Solution, Solver};

/// The sum every qualifying combination must reach
const TARGET: i64 = 2020;

/// Errors that can occur while solving the report-repair puzzle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// No combination of the requested size sums to the target
    #[error("no combination of {size} entries sums to {TARGET}")]
    NoCombination {
        /// Combination size the exhausted search was looking for
        size: usize,
    },

    /// An input line is not an integer
    #[error("entry {0:?} is not an integer")]
    BadEntry(String),
}

/// Parse the expense entries, one integer per line, in input order.
pub fn parse_entries(input: &str) -> Result<Vec<i64>, SolveError> {
    input::lines(input)
        .map(|line| line.parse().map_err(|_| SolveError::BadEntry(line.to_string())))
        .collect()
}

/// Product of the first pair of entries summing to 2020.
pub fn part_1(entries: &[i64]) -> Result<i64, SolveError> {
    product_of_combination(entries, 2)
}

/// Product of the first triple of entries summing to 2020.
pub fn part_2(entries: &[i64]) -> Result<i64, SolveError> {
    product_of_combination(entries, 3)
}

fn product_of_combination(entries: &[i64], size: usize) -> Result<i64, SolveError> {
    entries
        .iter()
        .copied()
        .combinations(size)
        .find(|combination| combination.iter().sum::<i64>() == TARGET)
        .map(|combination| combination.iter().product())
        .ok_or(SolveError::NoCombination { size })
}

/// Day-1 solver
#[derive(Debug, Clone, Copy)]
pub struct ReportRepair;

impl Solver for ReportRepair {
    fn day(&self) -> u8 {
        1
    }

    fn name(&self) -> &'static str {
        "report repair"
    }

    fn solve(&self, input: &str) -> anyhow::Result<Solution> {
        let entries = parse_entries(input)?;
        debug!("parsed {} expense entries", entries.len());

        Ok(Solution {
            part_1: part_1(&entries)?.to_string(),
            part_2: part_2(&entries)?.to_string(),
        })
    }
}
