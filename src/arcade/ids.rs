//! Button custom_id constants and parsing.
//!
//! Keeping every id format here means the view builders and the
//! interaction parser cannot drift apart.

/// Connect Four column buttons: `column_<index>` (0-based).
pub const COLUMN_PREFIX: &str = "column_";
/// Hand buttons: `card_<card name>`.
pub const CARD_PREFIX: &str = "card_";
/// The Nope button gets its own id so anyone can press it.
pub const CARD_NOPE: &str = "card_nope";

pub fn column_id(column: usize) -> String {
    format!("{COLUMN_PREFIX}{column}")
}

/// Parse `column_<n>` into a column index.
pub fn parse_column_id(id: &str) -> Option<usize> {
    id.strip_prefix(COLUMN_PREFIX)?.parse().ok()
}

pub fn card_id(name: &str) -> String {
    format!("{CARD_PREFIX}{name}")
}

/// Parse `card_<name>` into the card name. `card_nope` yields `"Nope"`.
pub fn parse_card_id(id: &str) -> Option<&str> {
    if id == CARD_NOPE {
        return Some("Nope");
    }
    id.strip_prefix(CARD_PREFIX).filter(|name| !name.is_empty())
}
