//! Terminal draughts against the engine.
//!
//! Reads commands from stdin and prints the board after every turn. The
//! computer's search runs on the blocking thread pool so the input loop
//! stays responsive.

mod command;
mod config;

use anyhow::Context;
use clap::Parser;
use command::{Command, HELP};
use config::{DraughtsConfig, Opponent, Policy};
use draughts_engine::{Game, Outcome, TurnStatus};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "draughts")]
#[command(about = "Play 8x8 draughts against the computer")]
struct Cli {
    /// Config file (defaults to draughts.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// How the computer chooses its moves
    #[arg(short, long, value_enum)]
    difficulty: Option<Policy>,
    /// Search depth for minimax
    #[arg(long)]
    depth: Option<u8>,
    /// Side played by the computer
    #[arg(long, value_enum)]
    computer: Option<Opponent>,
    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn apply(&self, config: &mut DraughtsConfig) {
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(computer) = self.computer {
            config.computer = computer;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let path = cli
        .config
        .clone()
        .unwrap_or_else(DraughtsConfig::config_path);
    let mut config = DraughtsConfig::load_from(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    cli.apply(&mut config);
    debug!(?config, "configuration loaded");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game = Game::with_options(config.computer_side(), config.difficulty());

    println!("Draughts: Red moves first. Type 'help' for commands.");
    match game.computer() {
        Some(side) => println!("The computer plays {} ({}).", side, game.difficulty()),
        None => println!("Two players."),
    }

    run(game, rng).await
}

async fn run(mut game: Game, mut rng: StdRng) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    print_position(&game);

    loop {
        if game.is_computer_turn() {
            let (next, next_rng) = computer_turn(game, rng).await?;
            game = next;
            rng = next_rng;
            print_position(&game);
            continue;
        }

        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Some(Command::Move(request)) => match game.request(request) {
                Ok(TurnStatus::ChainContinues(sq)) => {
                    print_position(&game);
                    println!("Keep capturing with the piece on {}.", sq);
                }
                Ok(_) => print_position(&game),
                Err(e) => println!("{}", e),
            },
            Some(Command::Moves) => {
                let moves = game.legal_moves();
                let list: Vec<String> =
                    moves.as_slice().iter().map(|m| m.to_notation()).collect();
                println!("{}", list.join(" "));
            }
            Some(Command::Undo) => match game.undo_turn() {
                Ok(()) => print_position(&game),
                Err(e) => println!("{}", e),
            },
            Some(Command::New) => {
                game.reset();
                print_position(&game);
            }
            Some(Command::Board) => print_position(&game),
            Some(Command::Help) => println!("{}", HELP),
            Some(Command::Quit) => break,
            None => println!("unrecognised command, try 'help'"),
        }
    }

    Ok(())
}

/// Plays the computer's whole turn on the blocking pool.
async fn computer_turn(mut game: Game, mut rng: StdRng) -> anyhow::Result<(Game, StdRng)> {
    let side = game.side_to_move();
    let (game, rng, played) = tokio::task::spawn_blocking(move || {
        let played = game.play_computer_move(&mut rng);
        (game, rng, played)
    })
    .await
    .context("computer search panicked")?;

    let moves = played.context("computer could not move")?;
    let notation: Vec<String> = moves.iter().map(|m| m.to_notation()).collect();
    debug!(side = %side, moves = moves.len(), "computer turn finished");
    println!("{} plays {}", side, notation.join(", "));
    Ok((game, rng))
}

fn print_position(game: &Game) {
    println!();
    println!("{}", game.board());
    match game.outcome() {
        Outcome::Winner(side) => {
            println!("{} wins. Type 'new' to play again.", side);
        }
        Outcome::Ongoing => {
            let side = game.side_to_move();
            match game.chain_origin() {
                Some(sq) => println!("{} to move, continuing from {}.", side, sq),
                None => println!("{} to move.", side),
            }
        }
    }
}
