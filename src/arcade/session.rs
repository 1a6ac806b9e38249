//! Per-channel game sessions.
//!
//! The store is owned by the adapter and handed the games it runs; engines
//! never reach into it. Each game sits behind its own `Mutex`, so events for
//! one channel apply one at a time while other channels proceed.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::core::ChannelId;
use crate::rules::{GameResult, TurnBasedGame};

/// Shared handle to one running game.
pub type SessionHandle<G> = Arc<Mutex<G>>;

/// Games keyed by channel.
#[derive(Debug)]
pub struct SessionStore<G> {
    sessions: RwLock<FxHashMap<ChannelId, SessionHandle<G>>>,
}

impl<G> Default for SessionStore<G> {
    fn default() -> Self {
        Self {
            sessions: RwLock::new(FxHashMap::default()),
        }
    }
}

impl<G> SessionStore<G> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a game unless the channel already has one.
    ///
    /// Returns the game back if the channel is taken.
    pub fn try_insert(&self, channel: ChannelId, game: G) -> Result<SessionHandle<G>, G> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        if sessions.contains_key(&channel) {
            return Err(game);
        }
        let handle = Arc::new(Mutex::new(game));
        sessions.insert(channel, Arc::clone(&handle));
        Ok(handle)
    }

    /// Register a game, replacing whatever the channel held.
    pub fn replace(&self, channel: ChannelId, game: G) -> SessionHandle<G> {
        let handle = Arc::new(Mutex::new(game));
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(channel, Arc::clone(&handle));
        handle
    }

    #[must_use]
    pub fn get(&self, channel: ChannelId) -> Option<SessionHandle<G>> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&channel)
            .cloned()
    }

    #[must_use]
    pub fn contains(&self, channel: ChannelId) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&channel)
    }

    /// Discard a channel's game.
    pub fn remove(&self, channel: ChannelId) -> Option<SessionHandle<G>> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&channel)
    }

    /// Run `f` with exclusive access to the channel's game.
    pub fn with_game<R>(&self, channel: ChannelId, f: impl FnOnce(&mut G) -> R) -> Option<R> {
        let handle = self.get(channel)?;
        let mut game = handle.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut game))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<G: TurnBasedGame> SessionStore<G> {
    /// Is the channel's game finished? `None` if there is no game.
    #[must_use]
    pub fn is_finished(&self, channel: ChannelId) -> Option<bool> {
        self.with_game(channel, |game| game.is_over())
    }

    /// Remove the channel's game if it has finished, returning its result.
    pub fn remove_if_over(&self, channel: ChannelId) -> Option<GameResult> {
        let result = self.with_game(channel, |game| game.result()).flatten()?;
        self.remove(channel);
        Some(result)
    }
}
