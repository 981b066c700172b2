use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, error, info};
use project_euler::{PROBLEMS, report, run_problem};

#[derive(Parser)]
#[command(name = "project-euler")]
#[command(about = "Run Project Euler solutions")]
struct Cli {
    /// Run a specific problem by number
    #[arg(short, long)]
    problem: Option<u32>,

    /// Run all available problems
    #[arg(short, long)]
    all: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.all {
        let mut failed = 0;
        for &id in PROBLEMS {
            if let Err(e) = report(id, || run_problem(id)) {
                error!("problem {} failed: {}", id, e);
                failed += 1;
            }
        }
        info!("ran {} problems, {} failed", PROBLEMS.len(), failed);
        if failed > 0 {
            return ExitCode::FAILURE;
        }
    } else if let Some(id) = cli.problem {
        if let Err(e) = report(id, || run_problem(id)) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    } else {
        eprintln!("Usage: project-euler --problem <N> or --all");
        eprintln!("Available problems: {:?}", PROBLEMS);
    }
    ExitCode::SUCCESS
}
