//! Gomoku AI Engine terminal game
//!
//! Play against the engine on stdin/stdout. Enter moves as `row col`
//! (0-based), `undo` to take back your last move, or `quit`.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::warn;

use gomoku::{AIEngine, Difficulty, EngineConfig, GameError, GameOutcome, GameState, Stone};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Play Gomoku against a minimax engine")]
struct Cli {
    /// Engine strength (search depth 2, 3 or 4)
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,

    /// Override the search depth set by --difficulty
    #[arg(long)]
    depth: Option<u8>,

    /// Search threads (0 = one per logical CPU)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Your color; Black moves first
    #[arg(long, value_enum, default_value_t = Side::Black)]
    side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Place(i32, i32),
    Undo,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["quit" | "q" | "exit"] => Some(Command::Quit),
        ["undo" | "u"] => Some(Command::Undo),
        [row, col] => Some(Command::Place(row.parse().ok()?, col.parse().ok()?)),
        _ => None,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = EngineConfig::new(cli.difficulty).with_threads(cli.threads);
    if let Some(depth) = cli.depth {
        config = config.with_depth(depth);
    }
    let engine = AIEngine::with_config(config)?;
    let mut game = GameState::new(cli.side.into());

    println!(
        "You play {:?} ({}). Depth {}, {} threads.",
        game.human(),
        game.human().symbol(),
        engine.depth(),
        engine.threads()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        if game.is_ai_turn() {
            game.play_ai_move(&engine)?;
            if let Some(result) = game.last_ai_result() {
                if let Some(mv) = result.best_move {
                    println!(
                        "AI plays ({}, {})  [{} nodes, {}ms]",
                        mv.row, mv.col, result.nodes, result.time_ms
                    );
                }
            }
        }

        println!("\n{}", game.board());

        if let Some(outcome) = game.outcome() {
            match outcome {
                GameOutcome::Win { winner, .. } if winner == game.human() => println!("You win!"),
                GameOutcome::Win { .. } => println!("AI wins."),
                GameOutcome::Draw => println!("Draw: the board is full."),
            }
            break;
        }

        write!(stdout, "{} > ", game.human().symbol())?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Undo) => match game.undo() {
                Ok(n) => println!("Took back {n} stone(s)."),
                Err(e) => println!("{e}"),
            },
            Some(Command::Place(row, col)) => match game.try_place_stone(row, col) {
                Ok(_) => {}
                Err(e @ (GameError::OutOfBounds { .. } | GameError::Occupied(_))) => println!("{e}"),
                Err(e) => {
                    warn!("unexpected move error: {e}");
                    println!("{e}");
                }
            },
            None => println!("Enter `row col`, `undo` or `quit`."),
        }
    }

    Ok(())
}
