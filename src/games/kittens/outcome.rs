//! Outcomes returned by the elimination engine.
//!
//! Each outcome carries the data an adapter needs to render it, and its
//! `Display` impl is the message shown in the channel.

use crate::cards::Card;
use crate::core::PlayerId;

/// Result of a successful draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A regular card went into the player's hand.
    Drew { player: PlayerId, card: Card },
    /// The player drew the exploding kitten and spent a defuse.
    Defused {
        player: PlayerId,
        /// Deck index the kitten went back to (0 = bottom).
        reinserted_at: usize,
    },
    /// The player had no defuse and left the game.
    ///
    /// The turn pointer already names the next player.
    Exploded { player: PlayerId, remaining: usize },
}

impl DrawOutcome {
    /// Does the drawing player's turn still need advancing?
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        !matches!(self, DrawOutcome::Exploded { .. })
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            DrawOutcome::Drew { player, .. }
            | DrawOutcome::Defused { player, .. }
            | DrawOutcome::Exploded { player, .. } => *player,
        }
    }
}

impl std::fmt::Display for DrawOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawOutcome::Drew { player, card } => {
                write!(f, "{} drew a {} card.", player.mention(), card)
            }
            DrawOutcome::Defused { player, .. } => {
                write!(f, "{} used a Defuse card to avoid the explosion!", player.mention())
            }
            DrawOutcome::Exploded { player, .. } => {
                write!(f, "{} has exploded and is out of the game!", player.mention())
            }
        }
    }
}

/// Result of a steal attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StealOutcome {
    /// A random card moved from the target's hand to the player's.
    Stole {
        player: PlayerId,
        target: PlayerId,
        card: Card,
        /// Cat kind named in the message. Cosmetic only.
        pair: String,
    },
    /// The player holds no two cat cards of the same kind. Nothing moved.
    NoPair { player: PlayerId },
}

impl StealOutcome {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self, StealOutcome::Stole { .. })
    }
}

impl std::fmt::Display for StealOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StealOutcome::Stole {
                player,
                target,
                card,
                pair,
            } => write!(
                f,
                "{} stole a {} card from {} using {}!",
                player.mention(),
                card,
                target.mention(),
                pair
            ),
            StealOutcome::NoPair { player } => write!(
                f,
                "{} does not have two of the same Cat card to steal.",
                player.mention()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_messages() {
        let p = PlayerId::new(1);
        let drew = DrawOutcome::Drew {
            player: p,
            card: Card::defuse(),
        };
        assert_eq!(drew.to_string(), "<@1> drew a Defuse card.");
        assert!(drew.ends_turn());

        let exploded = DrawOutcome::Exploded {
            player: p,
            remaining: 1,
        };
        assert_eq!(exploded.to_string(), "<@1> has exploded and is out of the game!");
        assert!(!exploded.ends_turn());
        assert_eq!(exploded.player(), p);
    }

    #[test]
    fn test_steal_messages() {
        let stole = StealOutcome::Stole {
            player: PlayerId::new(1),
            target: PlayerId::new(2),
            card: Card::defuse(),
            pair: "Beard Cat".to_string(),
        };
        assert_eq!(stole.to_string(), "<@1> stole a Defuse card from <@2> using Beard Cat!");
        assert!(stole.succeeded());
        assert!(!StealOutcome::NoPair { player: PlayerId::new(1) }.succeeded());
    }
}
