use clap::Parser;
use npuzzle_solver::config::SolverConfig;
use npuzzle_solver::heuristics::Heuristic;
use npuzzle_solver::solver::Solver;
use npuzzle_solver::utils::read_board_file;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the puzzle file (N, then N rows of N tiles with 0 as the blank)
    puzzle_file: PathBuf,

    /// TOML file with solver settings
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Heuristic driving node priority; overrides the config file
    #[clap(long, value_enum)]
    heuristic: Option<Heuristic>,

    /// Give up after this many search rounds; overrides the config file
    #[clap(long)]
    max_rounds: Option<u64>,

    /// Give up after this many seconds; overrides the config file
    #[clap(long)]
    time_limit: Option<u64>,

    /// Only print the move count
    #[clap(short, long)]
    quiet: bool,

    /// Log more (-v for info, -vv for debug); RUST_LOG takes precedence
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &Args) -> npuzzle_solver::Result<SolverConfig> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    if let Some(heuristic) = args.heuristic {
        config = config.with_heuristic(heuristic);
    }
    if let Some(rounds) = args.max_rounds {
        config = config.with_max_rounds(rounds);
    }
    if let Some(seconds) = args.time_limit {
        config = config.with_time_limit_secs(seconds);
    }
    Ok(config)
}

fn run(args: &Args) -> npuzzle_solver::Result<()> {
    let config = build_config(args)?;
    let board = read_board_file(&args.puzzle_file)?;
    let solver = Solver::with_config(board, &config)?;

    match (solver.moves(), solver.solution()) {
        (Some(moves), Some(boards)) => {
            println!("Minimum number of moves = {}", moves);
            if !args.quiet {
                if let Some(directions) = solver.directions() {
                    let names: Vec<String> = directions.iter().map(|d| d.to_string()).collect();
                    println!("Blank moves: {}", names.join(" "));
                }
                println!();
                for board in boards {
                    println!("{}\n", board);
                }
            }
        }
        _ => println!("No solution possible"),
    }

    let stats = solver.stats();
    tracing::info!(
        rounds = stats.rounds,
        expanded = stats.expanded,
        twin_expanded = stats.twin_expanded,
        peak_frontier = stats.peak_frontier,
        "done"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
