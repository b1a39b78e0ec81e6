//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of solving one day's puzzle
#[derive(Debug, Serialize)]
pub struct SolveReport {
    /// The day number that was solved
    pub day: u8,
    /// The puzzle's name
    pub name: String,
    /// Answer to part 1
    pub part_1: String,
    /// Answer to part 2
    pub part_2: String,
}

/// Result of listing the available puzzle days
#[derive(Debug, Serialize)]
pub struct DaysReport {
    /// The days this build can solve
    pub days: Vec<DayInfo>,
}

/// One available puzzle day
#[derive(Debug, Serialize)]
pub struct DayInfo {
    /// Day number
    pub day: u8,
    /// Puzzle name
    pub name: String,
}

impl SolveReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Part 1: {}", self.part_1);
        println!("Part 2: {}", self.part_2);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl DaysReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.days.is_empty() {
            println!("No solvers registered.");
            return;
        }

        println!("Available days:");
        for d in &self.days {
            println!("  {:>2}  {}", d.day, d.name);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
