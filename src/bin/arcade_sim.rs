//! Arcade simulator - auto-plays games from the command line
//!
//! Useful for eyeballing engine behaviour and for replaying a seed.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use rust_minigames::{
    ArcadeConfig, Board, CardEffect, DrawOutcome, GameError, GameRng, HeuristicAi, KittensGame, MovePolicy,
    Piece, PlayerId, RandomMover,
};

#[derive(Parser, Debug)]
#[command(name = "arcade-sim", about = "Auto-play arcade minigames")]
struct Args {
    /// Master seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    game: GameKind,
}

#[derive(Subcommand, Debug)]
enum GameKind {
    /// Exploding Kittens: every player steals when they can, then draws
    Kittens {
        /// Number of players
        #[arg(long, default_value_t = 4)]
        players: u64,
    },
    /// Connect Four: heuristic AI (red) against a random mover (blue)
    ConnectFour {
        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ArcadeConfig::from_path(path)?,
        None => ArcadeConfig::default(),
    };
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    info!(seed, "starting simulation");

    match args.game {
        GameKind::Kittens { players } => run_kittens(&config, players, seed)?,
        GameKind::ConnectFour { games } => run_connect_four(games, seed),
    }
    Ok(())
}

fn run_kittens(config: &ArcadeConfig, players: u64, seed: u64) -> Result<(), GameError> {
    let roster = (1..=players).map(PlayerId::new).collect();
    let mut game = KittensGame::new(roster, config.kittens.clone(), GameRng::new(seed))?;
    let mut picker = GameRng::new(seed).fork();

    // Every draw shrinks the deck or spends a defuse, so this ends
    for turn in 1usize.. {
        let current = game.current();

        if !game.matching_pairs(current).is_empty() {
            let targets: Vec<PlayerId> = game
                .players()
                .iter()
                .copied()
                .filter(|&p| p != current && game.hand_size(p) > 0)
                .collect();
            if let Some(&target) = picker.choose(&targets) {
                println!("{}", game.steal(current, target)?);
            }
        }

        let outcome = game.draw(current)?;
        println!("{outcome}");
        debug!(
            turn,
            deck = game.deck_len(),
            kittens = game.deck().count_effect(CardEffect::Explode),
            "turn played"
        );

        if let Some(winner) = game.winner() {
            println!("The game is over! {} wins after {turn} turns!", winner.mention());
            return Ok(());
        }
        if game.is_exhausted() {
            warn!(turn, players = game.players().len(), "deck ran out before a winner emerged");
            println!("The deck has run out! The game ends with no winner.");
            return Ok(());
        }
        if outcome.ends_turn() {
            game.advance_turn();
        } else if let DrawOutcome::Exploded { remaining, .. } = outcome {
            info!(remaining, "player eliminated");
        }
    }
    Ok(())
}

fn run_connect_four(games: usize, seed: u64) {
    let mut rng = GameRng::new(seed);
    let heuristic = HeuristicAi;
    let random = RandomMover;
    let (mut red_wins, mut blue_wins, mut draws) = (0usize, 0usize, 0usize);

    for game_index in 0..games {
        let mut board = Board::new();
        let mut piece = Piece::Red;

        loop {
            let policy: &dyn MovePolicy = match piece {
                Piece::Red => &heuristic,
                Piece::Blue => &random,
            };
            let Some(column) = policy.choose_column(&mut board, piece, &mut rng) else {
                draws += 1;
                break;
            };
            if let Err(err) = board.drop_piece(column, piece) {
                warn!(game_index, %err, "policy chose an unplayable column");
                break;
            }

            if board.has_win() {
                match piece {
                    Piece::Red => red_wins += 1,
                    Piece::Blue => blue_wins += 1,
                }
                break;
            }
            if board.is_full() {
                draws += 1;
                break;
            }
            piece = piece.opponent();
        }

        if games == 1 {
            println!("{board}");
        }
    }

    println!("Heuristic wins: {red_wins}");
    println!("Random wins:    {blue_wins}");
    println!("Draws:          {draws}");
}
