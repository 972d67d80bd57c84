//! Weiqi-Rust command line: play against the random bot or run a demo.
//!
//! ## Usage
//!
//! - `weiqi-rust` - Show the demo
//! - `weiqi-rust demo` - Scripted capture/territory/score walk-through
//! - `weiqi-rust play` - Interactive game against the random bot

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use weiqi_rust::board::Board;
use weiqi_rust::bot::RandomBot;
use weiqi_rust::game::{GameStatus, WeiqiGame};
use weiqi_rust::moves::Move;
use weiqi_rust::player::{Player, Seat};
use weiqi_rust::position::Position;
use weiqi_rust::stone::Stone;

/// Weiqi-Rust: a Go rules engine with a random sparring bot
#[derive(Parser)]
#[command(name = "weiqi-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game as black against the random bot
    Play {
        /// Board size (one of 5, 6, 7, 8, 9, 11, 13, 15, 17, 19)
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Seed for the bot's move selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a short scripted demo of captures, territory, and scoring
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Play { size, seed }) => play(size, seed),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_demo() -> Result<()> {
    println!("Weiqi-Rust: Go rules engine\n");

    println!("=== Capture demo ===");
    let mut board: Board = ".BW../BW.../W..../...../.....".parse()?;
    println!("{board}");
    println!("White plays (0, 0); both black stones lose their last liberty:\n");
    board.place(Move::new(Position::new(0, 0), Stone::White))?;
    println!("{board}");

    println!("=== Territory & score demo ===");
    let board: Board = ".W.../W.WWW/BWBBB/.B.../.....".parse()?;
    println!("{board}");
    let territories = board.find_territories();
    println!("black territory: {} points", territories.black().len());
    println!("white territory: {} points", territories.white().len());
    println!("neutral points:  {}", territories.neutral().len());
    let score = board.score();
    println!("area score: black {}, white {}", score.black, score.white);
    Ok(())
}

fn play(size: usize, seed: Option<u64>) -> Result<()> {
    let board = Board::empty(size)?;
    let bot = match seed {
        Some(seed) => RandomBot::with_seed(Stone::White, seed),
        None => RandomBot::new(Stone::White),
    };
    let human = Player::new("human".to_string(), Stone::Black);
    let mut game = WeiqiGame::new(board, Seat::Human(human), Seat::Bot(bot))?;

    println!("You play black. Enter moves as 'x y', or 'resign'.");
    let stdin = io::stdin();
    loop {
        println!("{}", game.board());
        print!("black> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if line == "resign" {
            game.resign(Stone::Black)?;
        } else {
            let Some(position) = parse_position(line) else {
                println!("expected 'x y' or 'resign'");
                continue;
            };
            if let Err(error) = game.make_move(Stone::Black, Some(position)) {
                println!("illegal move: {error}");
                continue;
            }
            if let Err(error) = game.make_move(Stone::White, None) {
                println!("{error}");
                break;
            }
        }

        if let GameStatus::Over { winner } = game.status() {
            println!("game over: {winner:?} wins");
            break;
        }
    }

    let score = game.score();
    println!("final area score: black {}, white {}", score.black, score.white);
    Ok(())
}

fn parse_position(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(x, y))
}
