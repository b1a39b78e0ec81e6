//! List the puzzle days this build can solve

use solstice::output::{DayInfo, DaysReport, OutputMode};
use solstice::solvers::SolverRegistry;

/// Print the registered puzzle days
pub fn days(mode: OutputMode) -> anyhow::Result<()> {
    let registry = SolverRegistry::new();

    let report = DaysReport {
        days: registry
            .iter()
            .map(|solver| DayInfo {
                day: solver.day(),
                name: solver.name().to_string(),
            })
            .collect(),
    };
    report.render(mode);

    Ok(())
}
