use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use torchbridge::search::{
    search_engines::{SearchEngine, SearchEngineName, SearchResult},
    HeuristicName, Problem, Verbosity,
};
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Solve a bridge-and-torch river crossing problem optimally.
struct Cli {
    #[arg(help = "The problem file's base name, looked up in the `tests` \
        directory next to the working directory")]
    problem: String,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::PairedCrossings
    )]
    heuristic_name: HeuristicName,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

/// Problem files live in a `tests` directory that is a sibling of the
/// working directory; the CLI takes just the base name.
fn resolve_problem_path(base_name: &str) -> PathBuf {
    Path::new("..").join("tests").join(base_name)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let path = resolve_problem_path(&cli.problem);
    let problem = match Problem::from_path(&path) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        participants = problem.participants().len(),
        time_budget = problem.time_budget(),
        "problem loaded"
    );

    let mut engine = cli.search_engine_name.create();
    let heuristic = cli.heuristic_name.create();
    let search_start = Instant::now();
    let (result, statistics) = engine.search(&problem, heuristic);
    let search_duration = search_start.elapsed();

    match result {
        SearchResult::Success(plan) => {
            println!("Optimal solution found !");
            println!("Path to the solution: ");
            print!("{}", plan.display(&problem));
        }
        SearchResult::BudgetExceeded => {
            println!("The maximum time for finding the solution has been exceeded !");
        }
        SearchResult::Unsolvable => {
            println!("No solution exists for this problem !");
        }
    }
    info!(
        time_passed = statistics.time_passed(),
        expanded_nodes = statistics.expanded_nodes(),
    );
    println!("Search time: {} sec", search_duration.as_secs_f64());
    ExitCode::SUCCESS
}
