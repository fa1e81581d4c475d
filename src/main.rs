//! Little-Go: a small-board Go agent.
//!
//! ## Usage
//!
//! - `little-go` - Decide a move from `init/input.txt` into `init/output.txt`
//! - `little-go decide --depth 3` - Same, with explicit options
//! - `little-go show <file>` - Print the boards of an input file
//! - `little-go demo` - Play a short self-play game

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Command, FromArgMatches, Parser, Subcommand};
use log::info;

use little_go::constants::{DEFAULT_DEPTH, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEMO_DEPTH, N};
use little_go::io::{format_move, read_input, write_output};
use little_go::position::{Action, GameState, Move};
use little_go::search::{SearchLimits, Searcher};

/// Little-Go: minimax agent for 5x5 Go
#[derive(Parser)]
#[command(name = "little-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log search progress (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a position, search it, and write the chosen move
    Decide(DecideArgs),
    /// Print the boards of an input file
    Show {
        #[arg(default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,
    },
    /// Play a self-play game on an empty board
    Demo,
}

#[derive(Args)]
struct DecideArgs {
    /// Input record
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,
    /// Output record
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,
    /// Wall-clock budget in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,
    /// Node budget
    #[arg(long)]
    max_nodes: Option<u64>,
    /// Moves already played, counted toward the move limit
    #[arg(long, default_value_t = 0)]
    move_count: usize,
    /// Print the current board before searching
    #[arg(long)]
    show: bool,
}

impl DecideArgs {
    /// Arguments of a bare `decide`, taken from the clap defaults above.
    fn from_defaults() -> Result<Self> {
        let matches = Self::augment_args(Command::new("decide")).try_get_matches_from(["decide"])?;
        Ok(Self::from_arg_matches(&matches)?)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Some(Commands::Decide(args)) => decide(&args),
        Some(Commands::Show { input }) => show(&input),
        Some(Commands::Demo) => {
            run_demo();
            Ok(())
        }
        None => decide(&DecideArgs::from_defaults()?),
    }
}

fn decide(args: &DecideArgs) -> Result<()> {
    let state = read_input(&args.input, N)?.with_move_count(args.move_count);
    if args.show {
        print!("{}", state.board);
    }

    let mut limits = SearchLimits::depth(args.depth);
    if let Some(ms) = args.time_ms {
        limits = limits.with_time_limit(Duration::from_millis(ms));
    }
    if let Some(max_nodes) = args.max_nodes {
        limits = limits.with_max_nodes(max_nodes);
    }
    let decision = Searcher::new(limits).choose_move(&state);
    info!(
        "{:?} plays {} (value {}, {} nodes)",
        state.to_move,
        format_move(decision.mv),
        decision.value,
        decision.nodes
    );
    write_output(&args.output, decision.mv)
}

fn show(input: &Path) -> Result<()> {
    let state = read_input(input, N)?;
    println!("{:?} to move\n", state.to_move);
    println!("Previous:\n{}", state.previous);
    println!("Current:\n{}", state.board);
    Ok(())
}

fn run_demo() {
    println!("Little-Go: minimax self-play on {N}x{N}, depth {DEMO_DEPTH}\n");

    let mut state = GameState::new(N);
    let mut searcher = Searcher::new(SearchLimits::depth(DEMO_DEPTH));
    loop {
        let decision = searcher.choose_move(&state);
        let action = match decision.mv {
            Move::Pass => Action::Pass,
            Move::Place(_) => Action::Move,
        };
        let game_over = state.is_terminal(action);
        println!(
            "{:>2}. {:?} {} (value {})",
            state.move_count + 1,
            state.to_move,
            format_move(decision.mv),
            decision.value
        );
        if game_over {
            break;
        }
        if let Err(e) = state.play(decision.mv) {
            println!("search returned an illegal move: {e}");
            break;
        }
        print!("{}", state.board);
    }

    println!("\nFinal position:\n{}", state.board);
    match state.winner() {
        Some(color) => println!("{color:?} wins"),
        None => println!("Tie"),
    }
}
