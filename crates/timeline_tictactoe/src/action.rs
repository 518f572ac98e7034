//! Moves recovered from the snapshot history.

use serde::Serialize;

use crate::position::Position;
use crate::types::{Player, Snapshot, Square};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Recovers the move that turned `before` into `after`.
    ///
    /// Returns `None` unless exactly one square went from empty to a mark
    /// and nothing else changed.
    pub fn between(before: &Snapshot, after: &Snapshot) -> Option<Self> {
        let mut found = None;
        for pos in Position::ALL {
            match (before.get(pos), after.get(pos)) {
                (old, new) if old == new => {}
                (Square::Empty, Square::Occupied(player)) if found.is_none() => {
                    found = Some(Move::new(player, pos));
                }
                _ => return None,
            }
        }
        found
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}
