//! Puzzle solvers
//!
//! Each daily puzzle is an isolated module exposing pure `part_1` / `part_2`
//! functions over parsed input. The [`Solver`] trait wraps a day's pair of
//! parts behind a uniform interface so the CLI can dispatch by day number.

pub mod password_philosophy;
pub mod report_repair;

// Re-export types for public API (used by unit tests)
#[allow(unused_imports)]
pub use password_philosophy::{Policy, PolicyLine, PolicyParseError};
#[allow(unused_imports)]
pub use report_repair::SolveError;

/// The two answers a day's solver produces
///
/// Answers are carried as strings so the registry stays homogeneous while
/// one day returns a product and another returns counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Answer to part 1
    pub part_1: String,
    /// Answer to part 2
    pub part_2: String,
}

/// A solver for one day's puzzle
pub trait Solver: Send + Sync {
    /// The day number this solver answers (e.g. 1)
    fn day(&self) -> u8;

    /// Get the puzzle's name (e.g. "report repair")
    fn name(&self) -> &str;

    /// Solve both parts against the raw input text
    fn solve(&self, input: &str) -> anyhow::Result<Solution>;
}

/// Registry of solvers by day number
pub struct SolverRegistry {
    solvers: Vec<Box<dyn Solver>>,
}

impl std::fmt::Debug for SolverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverRegistry")
            .field("solvers", &format!("{} solver(s)", self.solvers.len()))
            .finish()
    }
}

impl Default for SolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverRegistry {
    /// Create a new registry with built-in solvers
    #[must_use]
    pub fn new() -> Self {
        Self {
            solvers: vec![
                Box::new(report_repair::ReportRepair),
                Box::new(password_philosophy::PasswordPhilosophy),
                // Add more built-in solvers here
            ],
        }
    }

    /// Get the solver for a day number
    #[must_use]
    pub fn solver_for(&self, day: u8) -> Option<&dyn Solver> {
        self.solvers.iter().find(|s| s.day() == day).map(AsRef::as_ref)
    }

    /// Iterate all registered solvers in day order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Solver> {
        self.solvers.iter().map(AsRef::as_ref)
    }
}
