//! Solve one day's puzzle against an input file

use std::path::Path;

use anyhow::{Context, bail};
use log::debug;

use solstice::input;
use solstice::output::{OutputMode, SolveReport};
use solstice::solvers::SolverRegistry;

/// Solve the given day's puzzle and print both answers
pub fn solve(day: u8, input_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let registry = SolverRegistry::new();
    let Some(solver) = registry.solver_for(day) else {
        bail!("no solver for day {day} (run 'solstice days' to list available puzzles)");
    };

    let raw = input::load(input_path)?;
    debug!("loaded {} bytes of input for day {day}", raw.len());

    let solution = solver
        .solve(&raw)
        .with_context(|| format!("day {day} ({})", solver.name()))?;

    let report = SolveReport {
        day,
        name: solver.name().to_string(),
        part_1: solution.part_1,
        part_2: solution.part_2,
    };
    report.render(mode);

    Ok(())
}
