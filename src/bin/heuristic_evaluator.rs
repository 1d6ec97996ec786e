use clap::Parser;
use npuzzle_solver::config::SolverConfig;
use npuzzle_solver::engine::Board;
use npuzzle_solver::error::PuzzleError;
use npuzzle_solver::heuristics::Heuristic;
use npuzzle_solver::solver::Solver;
use std::collections::HashMap;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare heuristics on seeded scrambled boards", long_about = None)]
struct Args {
    /// Board dimension N
    #[clap(short, long, default_value_t = 3)]
    dimension: usize,

    /// Number of boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// Random slides applied to the goal board to scramble it
    #[clap(short, long, default_value_t = 20)]
    walk: usize,

    /// Seed of the first board; board i uses seed + i
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Round limit per solve, so a weak heuristic cannot stall the run
    #[clap(long, default_value_t = 2_000_000)]
    max_rounds: u64,
}

#[derive(Default)]
struct Tally {
    expanded: Vec<u64>,
    gave_up: u32,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.dimension < 2 {
        eprintln!("Error: dimension must be at least 2");
        return ExitCode::FAILURE;
    }

    let heuristics = [Heuristic::Manhattan, Heuristic::Hamming];
    let mut tallies: HashMap<Heuristic, Tally> = HashMap::new();

    println!(
        "Evaluating {} boards ({}x{}, {} slide scramble)...",
        args.boards, args.dimension, args.dimension, args.walk
    );

    for board_idx in 0..args.boards {
        let seed = args.seed + board_idx;
        let initial = Board::scrambled(args.dimension, args.walk, seed);
        println!(
            "\nBoard {} (Seed: {}, Manhattan: {})",
            board_idx,
            seed,
            initial.manhattan()
        );

        let mut optimal: Option<u32> = None;
        for &heuristic in &heuristics {
            let config = SolverConfig::new()
                .with_heuristic(heuristic)
                .with_max_rounds(args.max_rounds);
            let tally = tallies.entry(heuristic).or_default();

            match Solver::with_config(initial.clone(), &config) {
                Ok(solver) => {
                    let moves = solver.moves();
                    let expanded = solver.stats().expanded;
                    println!(
                        "  Heuristic: {:<10} Moves: {:<4} Expanded: {}",
                        heuristic.to_string(),
                        moves.map_or("-".to_string(), |m| m.to_string()),
                        expanded
                    );
                    match (optimal, moves) {
                        (None, _) => optimal = moves,
                        (Some(best), Some(m)) if best != m => warn!(
                            board = board_idx,
                            %heuristic,
                            expected = best,
                            found = m,
                            "heuristics disagree on the optimal move count"
                        ),
                        _ => {}
                    }
                    tally.expanded.push(expanded);
                }
                Err(PuzzleError::SearchLimit { rounds }) => {
                    println!(
                        "  Heuristic: {:<10} gave up after {} rounds",
                        heuristic.to_string(),
                        rounds
                    );
                    tally.gave_up += 1;
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Average Nodes Expanded ---");

    let mut averages: Vec<(Heuristic, f64, u32)> = heuristics
        .iter()
        .filter_map(|h| tallies.get(h).map(|t| (*h, t)))
        .filter(|(_, t)| !t.expanded.is_empty())
        .map(|(h, t)| {
            let total: u64 = t.expanded.iter().sum();
            (h, total as f64 / t.expanded.len() as f64, t.gave_up)
        })
        .collect();
    averages.sort_by(|a, b| a.1.total_cmp(&b.1));

    for (heuristic, average, gave_up) in averages {
        println!(
            "Heuristic {:<10}: Average Expanded = {:.2} (gave up on {})",
            heuristic.to_string(),
            average,
            gave_up
        );
    }
    ExitCode::SUCCESS
}
