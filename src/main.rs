use std::fs;
use std::io::stdout;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};
use slider_puzzle::{Board, Heuristic, Pruning, Solver, SolverConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board file: the dimension n, then n rows of n tiles with 0 as the blank
    board_file: Option<PathBuf>,

    /// Solve a random board of this dimension instead of reading a file
    #[clap(short, long, conflicts_with = "board_file")]
    random: Option<usize>,

    /// Seed for the random board
    #[clap(long, requires = "random")]
    seed: Option<u64>,

    /// Build the random board by sliding the blank this many times from the goal
    #[clap(long, requires = "random")]
    scramble: Option<usize>,

    /// Estimate used to rank search nodes
    #[clap(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,

    /// Never revisit a board that was already expanded
    #[clap(long)]
    closed_set: bool,

    /// Print the blank's direction before each board of the solution
    #[clap(short, long)]
    moves: bool,

    /// Log search progress
    #[clap(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HeuristicArg {
    Manhattan,
    Hamming,
}

impl From<HeuristicArg> for Heuristic {
    fn from(value: HeuristicArg) -> Self {
        match value {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Hamming => Heuristic::Hamming,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "slider_puzzle=debug"
    } else {
        "slider_puzzle=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_board_file(path: &PathBuf) -> Result<Board> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    content
        .parse::<Board>()
        .with_context(|| format!("invalid board in {}", path.display()))
}

fn generate(size: usize, scramble: Option<usize>, rng: &mut impl Rng) -> Result<Board> {
    let board = match scramble {
        Some(steps) => Board::scrambled(size, steps, rng)?,
        None => Board::random(size, rng)?,
    };
    Ok(board)
}

fn load(args: &Args) -> Result<Board> {
    match (&args.board_file, args.random) {
        (Some(path), _) => read_board_file(path),
        (None, Some(size)) => match args.seed {
            Some(seed) => generate(size, args.scramble, &mut StdRng::seed_from_u64(seed)),
            None => generate(size, args.scramble, &mut thread_rng()),
        },
        (None, None) => bail!("provide a board file or --random <N>"),
    }
}

// Same layout as `Display`, with the blank dimmed and settled tiles in green.
fn render(board: &Board, styled: bool) -> String {
    if !styled {
        return board.to_string();
    }

    let size = board.dimension();
    let width = (size * size - 1).to_string().len();
    let mut out = size.to_string();
    for (r, row) in board.rows().enumerate() {
        out.push('\n');
        for (c, &val) in row.iter().enumerate() {
            if c > 0 {
                out.push(' ');
            }
            let cell = format!("{:>width$}", val, width = width);
            let cell = if val == 0 {
                cell.dark_grey().to_string()
            } else if val as usize == r * size + c + 1 {
                cell.green().to_string()
            } else {
                cell
            };
            out.push_str(&cell);
        }
    }
    out
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let initial = load(&args)?;
    initial.validate().context("board is not a permutation")?;

    let pruning = if args.closed_set {
        Pruning::ClosedSet
    } else {
        Pruning::Parent
    };
    let config = SolverConfig::new()
        .with_heuristic(args.heuristic.into())
        .with_pruning(pruning);
    let solver = Solver::with_config(&initial, config);

    let styled = stdout().is_tty();
    match (solver.moves(), solver.solution()) {
        (Some(moves), Some(path)) => {
            println!("Minimum number of moves = {}", moves);
            let directions = solver.solution_moves().unwrap_or_default();
            for (i, board) in path.iter().enumerate() {
                if args.moves && i > 0 {
                    if let Some(dir) = directions.get(i - 1) {
                        println!("{}", dir);
                    }
                }
                println!("{}\n", render(board, styled));
            }
        }
        _ => println!("No solution possible"),
    }

    Ok(())
}
