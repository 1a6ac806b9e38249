//! Command dispatcher tying chat events to the engines.
//!
//! `Arcade` checks the per-channel session, calls the engine, and turns the
//! outcome (or the error) into replies. Engine errors never escape: they
//! become a channel message and the game is left as it was.

use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};

use super::command::{apply_overrides, Command, CommandError, START_GAME_OVERRIDES};
use super::session::SessionStore;
use super::view::{BoardView, HandView, Reply};
use crate::core::{ArcadeConfig, ChannelId, GameError, GameRng, PlayerId};
use crate::games::connect_four::{ConnectFourGame, Opponent};
use crate::games::kittens::KittensGame;
use crate::rules::GameResult;

/// The bot's game front end.
#[derive(Debug)]
pub struct Arcade {
    config: ArcadeConfig,
    rng: Mutex<GameRng>,
    kittens: SessionStore<KittensGame>,
    connect_four: SessionStore<ConnectFourGame>,
}

impl Arcade {
    /// Create an arcade. Without a configured seed, one is drawn at random.
    #[must_use]
    pub fn new(config: ArcadeConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, prefix = config.prefix.as_str(), "arcade ready");
        Self {
            config,
            rng: Mutex::new(GameRng::new(seed)),
            kittens: SessionStore::new(),
            connect_four: SessionStore::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    #[must_use]
    pub fn kittens(&self) -> &SessionStore<KittensGame> {
        &self.kittens
    }

    #[must_use]
    pub fn connect_four(&self) -> &SessionStore<ConnectFourGame> {
        &self.connect_four
    }

    /// Handle a chat message. Messages that are not arcade commands get no reply.
    pub fn handle_message(&self, channel: ChannelId, author: PlayerId, text: &str) -> Vec<Reply> {
        match Command::parse(&self.config.prefix, text) {
            Ok(Some(command)) => self.handle(channel, author, command),
            Ok(None) => Vec::new(),
            Err(err) => vec![Reply::channel(self.usage(&err))],
        }
    }

    /// Handle a button press.
    pub fn handle_component(&self, channel: ChannelId, author: PlayerId, custom_id: &str) -> Vec<Reply> {
        match Command::from_custom_id(custom_id) {
            Some(command) => self.handle(channel, author, command),
            None => {
                debug!(target: "arcade", custom_id, "unhandled component");
                Vec::new()
            }
        }
    }

    /// Dispatch a parsed command.
    pub fn handle(&self, channel: ChannelId, author: PlayerId, command: Command) -> Vec<Reply> {
        debug!(target: "arcade", channel = channel.0, author = author.raw(), ?command, "command");
        match command {
            Command::StartKittens { overrides, players } => self.start_kittens(channel, &overrides, players),
            Command::Draw => self.draw(channel, author),
            Command::Steal { target } => self.steal(channel, author, target),
            Command::Hand => self.hand(channel, author),
            Command::Cancel => self.cancel_kittens(channel, author),
            Command::PlayCard { card } => self.play_card(channel, author, &card),
            Command::ConnectFour { opponent } => self.start_connect_four(channel, author, opponent),
            Command::DropPiece { column } => self.drop_piece(channel, author, column),
        }
    }

    fn fork_rng(&self) -> GameRng {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner).fork()
    }

    fn usage(&self, err: &CommandError) -> String {
        format!(
            "{}. Usage: `{p}start_game [{}] @players...`, `{p}ek_draw`, `{p}ek_steal @player`, `{p}ek_cancel`, `{p}connect4 [@opponent]`",
            capitalize(&err.to_string()),
            START_GAME_OVERRIDES.join(" "),
            p = self.config.prefix
        )
    }

    fn no_kittens_game(&self) -> Vec<Reply> {
        vec![Reply::channel(format!(
            "No active game in this channel. Start one with {}start_game.",
            self.config.prefix
        ))]
    }

    // === Exploding Kittens ===

    fn start_kittens(&self, channel: ChannelId, overrides: &[usize], players: Vec<PlayerId>) -> Vec<Reply> {
        if self.kittens.contains(channel) {
            return vec![Reply::channel("A game is already in progress in this channel.")];
        }

        let config = apply_overrides(self.config.kittens.clone(), overrides);
        let game = match KittensGame::new(players, config, self.fork_rng()) {
            Ok(game) => game,
            Err(err) => return vec![Reply::channel(error_message(&err))],
        };

        let mut replies = vec![Reply::channel(
            "Exploding Kittens game started! Players have been dealt their hands.",
        )];
        replies.extend(game.players().iter().map(|&p| hand_reply(&game, p)));
        replies.push(Reply::channel(format!("{} goes first!", game.current().mention())));

        match self.kittens.try_insert(channel, game) {
            Ok(_) => {
                info!(target: "arcade", channel = channel.0, "kittens game started");
                replies
            }
            // Lost a race with another start in the same channel
            Err(_) => vec![Reply::channel("A game is already in progress in this channel.")],
        }
    }

    fn draw(&self, channel: ChannelId, author: PlayerId) -> Vec<Reply> {
        let replies = self.kittens.with_game(channel, |game| {
            let outcome = match game.draw(author) {
                Ok(outcome) => outcome,
                Err(err) => return vec![Reply::channel(error_message(&err))],
            };

            let mut replies = vec![Reply::channel(outcome.to_string())];
            if let Some(winner) = game.winner() {
                replies.push(Reply::channel(format!("The game is over! {} wins!", winner.mention())));
                return replies;
            }
            if game.is_exhausted() {
                replies.push(Reply::channel(
                    "The deck has run out! The game ends with no winner.",
                ));
                return replies;
            }

            let next = if outcome.ends_turn() {
                game.advance_turn()
            } else {
                game.current()
            };
            replies.push(Reply::channel(format!("It is now {}'s turn.", next.mention())));
            if game.is_active(author) {
                replies.push(hand_reply(game, author));
            }
            replies.push(hand_reply(game, next));
            replies
        });

        let Some(replies) = replies else {
            return self.no_kittens_game();
        };
        self.finish_kittens(channel);
        replies
    }

    fn steal(&self, channel: ChannelId, author: PlayerId, target: PlayerId) -> Vec<Reply> {
        let replies = self.kittens.with_game(channel, |game| match game.steal(author, target) {
            Ok(outcome) if outcome.succeeded() => vec![
                Reply::channel(outcome.to_string()),
                hand_reply(game, author),
                hand_reply(game, target),
            ],
            Ok(outcome) => vec![Reply::channel(outcome.to_string())],
            Err(err) => vec![Reply::channel(error_message(&err))],
        });
        replies.unwrap_or_else(|| self.no_kittens_game())
    }

    fn hand(&self, channel: ChannelId, author: PlayerId) -> Vec<Reply> {
        let replies = self.kittens.with_game(channel, |game| {
            if game.is_active(author) {
                vec![hand_reply(game, author)]
            } else {
                vec![Reply::channel(error_message(&GameError::NotInGame(author)))]
            }
        });
        replies.unwrap_or_else(|| self.no_kittens_game())
    }

    fn cancel_kittens(&self, channel: ChannelId, author: PlayerId) -> Vec<Reply> {
        let Some(member) = self.kittens.with_game(channel, |game| game.is_active(author)) else {
            return self.no_kittens_game();
        };
        if !member {
            return vec![Reply::channel(error_message(&GameError::NotInGame(author)))];
        }

        self.kittens.remove(channel);
        info!(target: "arcade", channel = channel.0, by = author.raw(), "kittens game cancelled");
        vec![Reply::channel(format!(
            "{} cancelled the Exploding Kittens game.",
            author.mention()
        ))]
    }

    /// Hand buttons. Only the draw and steal commands change the game.
    fn play_card(&self, channel: ChannelId, author: PlayerId, card: &str) -> Vec<Reply> {
        let replies = self.kittens.with_game(channel, |game| {
            let held = game
                .hand(author)
                .map(|hand| hand.iter().any(|c| c.name() == card));
            let text = match held {
                None => error_message(&GameError::NotInGame(author)),
                Some(false) => format!("You do not have a {card} card."),
                Some(true) => format!("The {card} card has no effect yet."),
            };
            vec![Reply::channel(text)]
        });
        replies.unwrap_or_else(|| self.no_kittens_game())
    }

    fn finish_kittens(&self, channel: ChannelId) {
        match self.kittens.remove_if_over(channel) {
            Some(GameResult::Winner(winner)) => {
                info!(target: "arcade", channel = channel.0, winner = winner.raw(), "kittens game finished");
            }
            Some(_) => info!(target: "arcade", channel = channel.0, "kittens game finished without a winner"),
            None => {}
        }
    }

    // === Connect Four ===

    fn start_connect_four(&self, channel: ChannelId, author: PlayerId, opponent: Option<PlayerId>) -> Vec<Reply> {
        // A finished board stays around to answer late clicks until replaced
        if self.connect_four.is_finished(channel) == Some(false) {
            return vec![Reply::channel("A Connect 4 game is already in progress in this channel.")];
        }

        let seat = opponent.map_or(Opponent::Ai, Opponent::Human);
        let game = match ConnectFourGame::new(author, seat, self.fork_rng()) {
            Ok(game) => game,
            Err(err) => return vec![Reply::channel(error_message(&err))],
        };

        let view = BoardView::new(&game);
        info!(target: "arcade", channel = channel.0, game_id = game.game_id().as_str(), "connect four started");
        self.connect_four.replace(channel, game);
        vec![Reply::Board(view)]
    }

    fn drop_piece(&self, channel: ChannelId, author: PlayerId, column: usize) -> Vec<Reply> {
        let replies = self.connect_four.with_game(channel, |game| match game.place(author, column) {
            Ok(outcome) => {
                debug!(
                    target: "arcade",
                    column = outcome.placed.column,
                    ai_column = ?outcome.ai_reply.map(|m| m.column),
                    "connect four move"
                );
                vec![Reply::Board(BoardView::new(game))]
            }
            Err(err) => vec![Reply::channel(error_message(&err))],
        });
        replies.unwrap_or_else(|| {
            vec![Reply::channel(format!(
                "No Connect 4 game in this channel. Start one with {}connect4.",
                self.config.prefix
            ))]
        })
    }
}

fn hand_reply(game: &KittensGame, player: PlayerId) -> Reply {
    Reply::Direct {
        to: player,
        view: HandView::new(game, player),
    }
}

/// User-facing text for an engine error.
#[must_use]
pub fn error_message(err: &GameError) -> String {
    match err {
        GameError::OutOfTurn { .. } => "It's not your turn!".to_string(),
        GameError::NotInGame(_) => "You are not playing in this game.".to_string(),
        GameError::ColumnFull { .. } => "This column is full! Choose another one.".to_string(),
        GameError::GameAlreadyOver => "The game is over. Please start a new game!".to_string(),
        GameError::EmptyDeck => {
            warn!(target: "arcade", "draw on an empty deck");
            "The deck is empty!".to_string()
        }
        other => format!("{}.", capitalize(&other.to_string())),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let out_of_turn = GameError::OutOfTurn {
            expected: PlayerId::new(1),
            actual: PlayerId::new(2),
        };
        assert_eq!(error_message(&out_of_turn), "It's not your turn!");
        assert_eq!(
            error_message(&GameError::InvalidColumn { column: 8 }),
            "Column 9 does not exist."
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("missing argument"), "Missing argument");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_unknown_message_is_ignored() {
        let arcade = Arcade::new(ArcadeConfig::default());
        assert!(arcade
            .handle_message(ChannelId::new(1), PlayerId::new(1), "good morning")
            .is_empty());
        assert!(arcade
            .handle_component(ChannelId::new(1), PlayerId::new(1), "shop_buy")
            .is_empty());
    }
}
