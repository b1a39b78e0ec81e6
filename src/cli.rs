//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use solstice::output::OutputMode;

/// solstice - Solve daily text puzzles
#[derive(Parser, Debug)]
#[command(
    name = "solstice",
    version,
    about = "Solve daily text puzzles",
    long_about = "Solve daily text puzzles from plain-text input files.\n\n\
                  Each day's puzzle has two parts; both answers are computed\n\
                  in one pass and printed as 'Part 1' and 'Part 2'."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve one day's puzzle
    Solve {
        /// Puzzle day number (e.g. 1)
        day: u8,

        /// Input file path; pass "-" or omit to read stdin
        input: Option<PathBuf>,
    },

    /// List the puzzle days this build can solve
    Days,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Solve { day, input }) => {
            commands::solve(day, input.as_deref(), output_mode)
        },
        Some(Command::Days) => commands::days(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("solstice v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("solstice v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'solstice --help' for usage");
                println!("Run 'solstice days' to see the available puzzles");
            }
            Ok(())
        },
    }
}
