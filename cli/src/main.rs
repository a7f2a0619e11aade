mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use lapmatch::SolveError;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lapmatch")]
#[command(about = "Solve minimum-cost assignment problems over cost matrices")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Solve a cost matrix and print the assignment")]
    Solve {
        #[arg(help = "Path to the matrix file (JSON rows of numbers; null marks a forbidden pairing)")]
        matrix: String,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(long, help = "Maximize total cost instead of minimizing (negates costs around the solve)")]
        maximize: bool,
        #[arg(long, help = "Use exact zero comparison (only safe for integer-valued costs)")]
        exact: bool,
        #[arg(long, value_name = "TOL", help = "Absolute tolerance for zero tests")]
        tolerance: Option<f64>,
        #[arg(long, short, help = "Quiet mode: only show the summary line")]
        quiet: bool,
        #[arg(long, short, help = "Verbose mode: echo the padded cost matrix")]
        verbose: bool,
    },
    #[command(about = "Show information about a matrix file")]
    Info {
        #[arg(help = "Path to the matrix file")]
        matrix: String,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve {
            matrix,
            format,
            maximize,
            exact,
            tolerance,
            quiet,
            verbose,
        } => commands::solve::run(&matrix, format, maximize, exact, tolerance, quiet, verbose),
        Commands::Info { matrix } => commands::info::run(&matrix),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            if let Some(solve_err) = err.downcast_ref::<SolveError>() {
                eprintln!("error: {solve_err}");
                ExitCode::from(3)
            } else {
                eprintln!("error: {err:#}");
                ExitCode::from(2)
            }
        }
    }
}
