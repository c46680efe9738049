//! Turn counter and re-entrancy guard

use std::cell::Cell;

use serde::{Deserialize, Serialize};

/// How the turn counter moves per advance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnCounting {
    /// +1 per advance
    #[default]
    PerTurn,
    /// +1 per unit processed (legacy counter behaviour)
    PerUnit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    #[default]
    Idle,
    Advancing,
}

/// Turn counter plus the Idle/Advancing flag.
///
/// `advance` takes `&self`: a body that reaches back into the engine sees
/// `Advancing` and its nested advance is a no-op.
#[derive(Debug, Default)]
pub struct TurnEngine {
    turn: Cell<u32>,
    phase: Cell<TurnPhase>,
    counting: TurnCounting,
}

/// Puts the engine back to Idle even if the body panics
struct PhaseGuard<'a>(&'a Cell<TurnPhase>);

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.0.set(TurnPhase::Idle);
    }
}

impl TurnEngine {
    pub fn new(counting: TurnCounting) -> Self {
        Self::starting_at(0, counting)
    }

    /// Resume a saved game at `turn`
    pub fn starting_at(turn: u32, counting: TurnCounting) -> Self {
        Self {
            turn: Cell::new(turn),
            phase: Cell::new(TurnPhase::Idle),
            counting,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn.get()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase.get()
    }

    pub fn counting(&self) -> TurnCounting {
        self.counting
    }

    /// Run one turn. `body` returns how many units it processed. Returns the
    /// new turn number, or None if a turn was already being advanced.
    pub fn advance<F>(&self, body: F) -> Option<u32>
    where
        F: FnOnce() -> usize,
    {
        if self.phase.get() == TurnPhase::Advancing {
            tracing::debug!("turn advance already in progress, ignoring");
            return None;
        }
        self.phase.set(TurnPhase::Advancing);
        let _guard = PhaseGuard(&self.phase);

        let processed = body();
        let step = match self.counting {
            TurnCounting::PerTurn => 1,
            TurnCounting::PerUnit => processed as u32,
        };
        self.turn.set(self.turn.get() + step);
        Some(self.turn.get())
    }
}
