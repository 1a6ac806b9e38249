//! Prefix command and button parsing.
//!
//! | Command | Effect |
//! |---|---|
//! | `start_game [hand defuse bomb a2 a3 skip nope future reveal] <@p>...` | new kittens game |
//! | `ek_draw` | draw a card |
//! | `ek_steal <@target>` | steal with a cat pair |
//! | `ek_hand` | resend your hand |
//! | `ek_cancel` | end the channel's kittens game |
//! | `connect4 [<@opponent>]`, `c4` | new Connect Four game, AI if no opponent |
//!
//! Connect Four moves arrive as `column_<n>` button presses, hand cards as
//! `card_<name>`. Numeric settings are capped at [`MAX_COUNT`].

use super::ids;
use crate::core::{KittensConfig, PlayerId, MAX_COUNT};

/// Numeric overrides accepted by `start_game`, in order.
pub const START_GAME_OVERRIDES: [&str; 9] = [
    "starting_hand_size",
    "defuse_count",
    "bomb_count",
    "attack_x2_count",
    "attack_x3_count",
    "skip_count",
    "nope_count",
    "future_count",
    "reveal_future_count",
];

/// Command parse failure, reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid argument `{0}`")]
    InvalidArgument(String),

    #[error("too many settings, at most {max} are accepted")]
    TooManySettings { max: usize },
}

/// A parsed user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StartKittens {
        /// Positional values for `START_GAME_OVERRIDES`.
        overrides: Vec<usize>,
        players: Vec<PlayerId>,
    },
    Draw,
    Steal { target: PlayerId },
    Hand,
    Cancel,
    /// A hand card button was pressed.
    PlayCard { card: String },
    ConnectFour { opponent: Option<PlayerId> },
    DropPiece { column: usize },
}

impl Command {
    /// Parse a chat message.
    ///
    /// Returns `Ok(None)` for messages without the prefix or with an
    /// unknown command name, so other handlers can take them.
    pub fn parse(prefix: &str, text: &str) -> Result<Option<Self>, CommandError> {
        let Some(body) = text.trim().strip_prefix(prefix) else {
            return Ok(None);
        };
        let mut tokens = body.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match name {
            "start_game" => parse_start_game(&args)?,
            "ek_draw" => Command::Draw,
            "ek_hand" => Command::Hand,
            "ek_cancel" => Command::Cancel,
            "ek_steal" => {
                let raw = args.first().ok_or(CommandError::MissingArgument("target"))?;
                Command::Steal {
                    target: parse_player(raw)?,
                }
            }
            "connect4" | "c4" => Command::ConnectFour {
                opponent: args.first().map(|raw| parse_player(raw)).transpose()?,
            },
            _ => return Ok(None),
        };
        Ok(Some(command))
    }

    /// Parse a button press.
    #[must_use]
    pub fn from_custom_id(id: &str) -> Option<Self> {
        if let Some(column) = ids::parse_column_id(id) {
            return Some(Command::DropPiece { column });
        }
        ids::parse_card_id(id).map(|card| Command::PlayCard {
            card: card.to_string(),
        })
    }
}

fn parse_player(raw: &str) -> Result<PlayerId, CommandError> {
    PlayerId::parse(raw).ok_or_else(|| CommandError::InvalidArgument(raw.to_string()))
}

fn parse_start_game(args: &[&str]) -> Result<Command, CommandError> {
    let mut overrides = Vec::new();
    let mut players = Vec::new();

    for raw in args {
        if raw.starts_with("<@") {
            players.push(parse_player(raw)?);
        } else if players.is_empty() {
            let value = raw
                .parse::<usize>()
                .ok()
                .filter(|&v| v <= MAX_COUNT)
                .ok_or_else(|| CommandError::InvalidArgument(raw.to_string()))?;
            overrides.push(value);
        } else {
            // Settings must come before the player list
            return Err(CommandError::InvalidArgument(raw.to_string()));
        }
    }

    if overrides.len() > START_GAME_OVERRIDES.len() {
        return Err(CommandError::TooManySettings {
            max: START_GAME_OVERRIDES.len(),
        });
    }
    if players.is_empty() {
        return Err(CommandError::MissingArgument("players"));
    }
    Ok(Command::StartKittens { overrides, players })
}

/// Apply `start_game` positional overrides on top of a base config.
#[must_use]
pub fn apply_overrides(mut config: KittensConfig, overrides: &[usize]) -> KittensConfig {
    let comp = &mut config.composition;
    let slots: [&mut usize; 9] = [
        &mut config.starting_hand_size,
        &mut comp.defuse_count,
        &mut comp.bomb_count,
        &mut comp.attack_x2_count,
        &mut comp.attack_x3_count,
        &mut comp.skip_count,
        &mut comp.nope_count,
        &mut comp.future_count,
        &mut comp.reveal_future_count,
    ];
    for (slot, value) in slots.into_iter().zip(overrides) {
        *slot = *value;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u64) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_ignores_foreign_messages() {
        assert_eq!(Command::parse("!", "hello"), Ok(None));
        assert_eq!(Command::parse("!", "!"), Ok(None));
        assert_eq!(Command::parse("!", "!music play"), Ok(None));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(Command::parse("!", "!ek_draw"), Ok(Some(Command::Draw)));
        assert_eq!(Command::parse("!", "  !ek_hand "), Ok(Some(Command::Hand)));
        assert_eq!(Command::parse("!", "!ek_cancel"), Ok(Some(Command::Cancel)));
        assert_eq!(
            Command::parse("!", "!ek_steal <@22>"),
            Ok(Some(Command::Steal { target: p(22) }))
        );
        assert_eq!(
            Command::parse("!", "!ek_steal"),
            Err(CommandError::MissingArgument("target"))
        );
    }

    #[test]
    fn test_connect_four_commands() {
        assert_eq!(
            Command::parse("!", "!c4"),
            Ok(Some(Command::ConnectFour { opponent: None }))
        );
        assert_eq!(
            Command::parse("!", "!connect4 <@!5>"),
            Ok(Some(Command::ConnectFour { opponent: Some(p(5)) }))
        );
        assert_eq!(
            Command::parse("!", "!c4 nobody"),
            Err(CommandError::InvalidArgument("nobody".to_string()))
        );
    }

    #[test]
    fn test_start_game_parsing() {
        assert_eq!(
            Command::parse("!", "!start_game 4 3 <@1> <@2>"),
            Ok(Some(Command::StartKittens {
                overrides: vec![4, 3],
                players: vec![p(1), p(2)],
            }))
        );
        assert_eq!(
            Command::parse("!", "!start_game"),
            Err(CommandError::MissingArgument("players"))
        );
        assert_eq!(
            Command::parse("!", "!start_game <@1> 4"),
            Err(CommandError::InvalidArgument("4".to_string()))
        );
        assert_eq!(
            Command::parse("!", "!start_game 1 2 3 4 5 6 7 8 9 10 <@1>"),
            Err(CommandError::TooManySettings { max: 9 })
        );
    }

    #[test]
    fn test_start_game_values_are_capped() {
        assert_eq!(
            Command::parse("!", "!start_game 100 <@1> <@2>"),
            Ok(Some(Command::StartKittens {
                overrides: vec![100],
                players: vec![p(1), p(2)],
            }))
        );
        assert_eq!(
            Command::parse("!", "!start_game 101 <@1> <@2>"),
            Err(CommandError::InvalidArgument("101".to_string()))
        );
        assert_eq!(
            Command::parse("!", "!start_game 9223372036854775808 <@1> <@2>"),
            Err(CommandError::InvalidArgument("9223372036854775808".to_string()))
        );
        assert_eq!(
            Command::parse("!", "!start_game 5 6 1000000000000 <@1> <@2>"),
            Err(CommandError::InvalidArgument("1000000000000".to_string()))
        );
        assert_eq!(
            Command::parse("!", "!start_game -1 <@1> <@2>"),
            Err(CommandError::InvalidArgument("-1".to_string()))
        );
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(Command::parse("?", "?ek_draw"), Ok(Some(Command::Draw)));
        assert_eq!(Command::parse("?", "!ek_draw"), Ok(None));
    }

    #[test]
    fn test_button_parsing() {
        assert_eq!(
            Command::from_custom_id("column_6"),
            Some(Command::DropPiece { column: 6 })
        );
        assert_eq!(
            Command::from_custom_id("card_Defuse"),
            Some(Command::PlayCard {
                card: "Defuse".to_string()
            })
        );
        assert_eq!(
            Command::from_custom_id("card_nope"),
            Some(Command::PlayCard {
                card: "Nope".to_string()
            })
        );
        assert_eq!(Command::from_custom_id("shop_buy"), None);
    }

    #[test]
    fn test_apply_overrides() {
        let config = apply_overrides(KittensConfig::default(), &[3, 2, 1, 0]);
        assert_eq!(config.starting_hand_size, 3);
        assert_eq!(config.composition.defuse_count, 2);
        assert_eq!(config.composition.bomb_count, 1);
        assert_eq!(config.composition.attack_x2_count, 0);
        // Untouched values keep their defaults
        assert_eq!(config.composition.attack_x3_count, 2);
        assert_eq!(config.composition.reveal_future_count, 1);
    }
}
