//! Server state management
//!
//! One game per process. Requests take the lock in turn; the game itself is
//! single-threaded.

use std::sync::{Mutex, MutexGuard};

use hexciv_core::GameState;

/// Server-wide shared state
pub struct ServerState {
    game: Mutex<GameState>,
}

impl ServerState {
    pub fn new(game: GameState) -> Self {
        Self {
            game: Mutex::new(game),
        }
    }

    /// Lock the game. A handler that panicked mid-request leaves the game as
    /// it was, so a poisoned lock is still usable.
    pub fn game(&self) -> MutexGuard<'_, GameState> {
        self.game.lock().unwrap_or_else(|e| e.into_inner())
    }
}
