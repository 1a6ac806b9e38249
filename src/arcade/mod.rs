//! Chat adapter layer.
//!
//! Turns prefix commands and button presses into engine calls and engine
//! outcomes into platform-neutral [`Reply`] values. A bot binary only has
//! to deliver the replies.
//!
//! ## Key Types
//!
//! - `Arcade`: dispatcher owning one session store per game
//! - `Command`: parsed user action
//! - `SessionStore`: channel-keyed games behind per-game locks
//! - `Reply`, `HandView`, `BoardView`: what gets sent back

pub mod command;
pub mod ids;
pub mod service;
pub mod session;
pub mod view;

pub use command::{apply_overrides, Command, CommandError, START_GAME_OVERRIDES};
pub use service::{error_message, Arcade};
pub use session::{SessionHandle, SessionStore};
pub use view::{BoardView, Button, ButtonStyle, HandView, Reply};
