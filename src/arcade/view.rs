//! Platform-neutral replies and the views they carry.
//!
//! A chat front end turns `Reply::Channel` into a channel message,
//! `Reply::Direct` into a private message with buttons, and
//! `Reply::Board` into an edited embed.

use super::ids;
use crate::core::PlayerId;
use crate::games::connect_four::{ConnectFourGame, Status, COLS};
use crate::games::kittens::KittensGame;
use crate::rules::TurnBasedGame;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Danger,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub custom_id: String,
    pub label: String,
    pub style: ButtonStyle,
    pub disabled: bool,
}

impl Button {
    fn primary(custom_id: String, label: impl Into<String>) -> Self {
        Self {
            custom_id,
            label: label.into(),
            style: ButtonStyle::Primary,
            disabled: false,
        }
    }

    fn danger(custom_id: String, label: impl Into<String>) -> Self {
        Self {
            style: ButtonStyle::Danger,
            ..Self::primary(custom_id, label)
        }
    }
}

/// A player's private hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandView {
    pub title: String,
    /// Card names, one per line in the embed.
    pub cards: Vec<String>,
    pub buttons: Vec<Button>,
}

impl HandView {
    /// Build the hand view for `player`.
    ///
    /// Every card gets a button; buttons are disabled outside the player's
    /// turn. Nope is styled as a danger button with its own id.
    #[must_use]
    pub fn new(game: &KittensGame, player: PlayerId) -> Self {
        let hand = game.hand(player).unwrap_or_default();
        let my_turn = game.current_player() == Some(player);

        let buttons = hand
            .iter()
            .map(|card| {
                let mut button = if card.name() == "Nope" {
                    Button::danger(ids::CARD_NOPE.to_string(), "NOPE")
                } else {
                    Button::primary(ids::card_id(card.name()), card.name())
                };
                button.disabled = !my_turn;
                button
            })
            .collect();

        Self {
            title: "Your Hand".to_string(),
            cards: hand.iter().map(|c| c.name().to_string()).collect(),
            buttons,
        }
    }
}

/// The Connect Four board message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    pub title: String,
    pub description: String,
    /// Column buttons; empty once the game is over.
    pub buttons: Vec<Button>,
}

impl BoardView {
    #[must_use]
    pub fn new(game: &ConnectFourGame) -> Self {
        let board = game.board().to_string();
        let (title, description, open) = match game.status() {
            Status::InProgress { next } => (
                "Connect 4".to_string(),
                format!("{}\n\nIt's **{}'s** turn!", board, next),
                true,
            ),
            Status::Won { by } => (format!("{} wins!", by), board, false),
            Status::Draw => ("It's a draw!".to_string(), board, false),
        };

        let buttons = if open {
            (0..COLS)
                .map(|col| Button::primary(ids::column_id(col), (col + 1).to_string()))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            title,
            description,
            buttons,
        }
    }
}

/// Something the adapter wants delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Message in the channel the command came from.
    Channel(String),
    /// Private hand for one player.
    Direct { to: PlayerId, view: HandView },
    /// Connect Four board for the channel.
    Board(BoardView),
}

impl Reply {
    pub fn channel(text: impl Into<String>) -> Self {
        Reply::Channel(text.into())
    }

    /// Text of a channel reply, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Channel(text) => Some(text),
            _ => None,
        }
    }
}
