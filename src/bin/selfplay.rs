use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lines_of_action::config::{MatchConfig, StrategyKind};
use lines_of_action::{Game, GameStatus, Side};

/// Play a Lines of Action game between two automated players.
#[derive(Debug, Parser)]
#[command(name = "selfplay")]
struct Args {
    /// Stop after this many plies if nobody has won.
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// How often the distance heuristic forgets its own past moves (0 = never).
    #[arg(long, default_value_t = 10)]
    memory_reset: usize,

    /// Strategy for Black: `distance` or `first-legal`.
    #[arg(long, default_value = "distance")]
    black: StrategyKind,

    /// Strategy for White: `distance` or `first-legal`.
    #[arg(long, default_value = "distance")]
    white: StrategyKind,

    /// Opening moves to play before the machines take over, e.g. `b1-d3,a3-c3`.
    #[arg(long, value_delimiter = ',')]
    opening: Vec<String>,

    /// Only print the final position.
    #[arg(long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = MatchConfig::new(args.max_plies)
        .with_memory_reset(args.memory_reset)
        .with_strategy(Side::Black, args.black)
        .with_strategy(Side::White, args.white);

    let mut game = Game::new();
    for text in &args.opening {
        if let Err(e) = game.play_notation(text) {
            eprintln!("Opening move {text:?} rejected: {e}");
            std::process::exit(2);
        }
    }

    let mut black = cfg.strategy(Side::Black).build(cfg.memory_reset);
    let mut white = cfg.strategy(Side::White).build(cfg.memory_reset);
    info!(black = %cfg.black, white = %cfg.white, max_plies = cfg.max_plies, "starting match");

    if !args.quiet {
        println!("{}", game.board());
    }

    let mut status = game.status();
    while status == GameStatus::InProgress && game.board().moves_made() < cfg.max_plies {
        let strategy = match game.board().turn() {
            Side::Black => &mut black,
            Side::White => &mut white,
        };
        match game.step(strategy) {
            Ok((mv, next)) => {
                if !args.quiet {
                    println!("{}. {mv}", game.board().moves_made());
                    println!("{}", game.board());
                }
                status = next;
            }
            Err(e) => {
                warn!(side = %game.board().turn(), "{e}");
                break;
            }
        }
    }

    if args.quiet {
        println!("{}", game.board());
    }
    match status {
        GameStatus::Over { winner } => {
            println!("{} wins after {} plies.", capitalize(winner.full_name()), game.board().moves_made())
        }
        GameStatus::InProgress => println!("No result after {} plies.", game.board().moves_made()),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
