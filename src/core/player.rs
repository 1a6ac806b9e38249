//! Player and channel identification.
//!
//! ## PlayerId
//!
//! Chat-platform user identifier. The engines never interpret the value,
//! they only compare it and render it in outcome messages.
//!
//! ## ChannelId
//!
//! Key used by the adapter layer to find the game running in a channel.

use serde::{Deserialize, Serialize};

/// Player identifier (a chat user snowflake).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Chat mention for this player.
    ///
    /// ```
    /// use rust_minigames::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(42).mention(), "<@42>");
    /// ```
    #[must_use]
    pub fn mention(self) -> String {
        format!("<@{}>", self.0)
    }

    /// Parse a mention (`<@42>`, `<@!42>`) or a bare numeric ID.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text
            .strip_prefix("<@")
            .and_then(|rest| rest.strip_suffix('>'))
            .map(|inner| inner.trim_start_matches('!'))
            .unwrap_or(text);
        trimmed.parse::<u64>().ok().map(Self)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Channel identifier: one game of each kind may run per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub u64);

impl ChannelId {
    /// Create a new channel ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Channel({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p = PlayerId::new(7);
        assert_eq!(p.raw(), 7);
        assert_eq!(format!("{}", p), "Player 7");
        assert_eq!(p.mention(), "<@7>");
    }

    #[test]
    fn test_player_id_parse() {
        assert_eq!(PlayerId::parse("<@123>"), Some(PlayerId::new(123)));
        assert_eq!(PlayerId::parse("<@!123>"), Some(PlayerId::new(123)));
        assert_eq!(PlayerId::parse("456"), Some(PlayerId::new(456)));
        assert_eq!(PlayerId::parse("<@abc>"), None);
        assert_eq!(PlayerId::parse("AI"), None);
    }

    #[test]
    fn test_channel_id_display() {
        assert_eq!(format!("{}", ChannelId::new(9)), "Channel(9)");
    }

    #[test]
    fn test_player_id_serialization() {
        let p = PlayerId::new(99);
        let json = serde_json::to_string(&p).unwrap();
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
