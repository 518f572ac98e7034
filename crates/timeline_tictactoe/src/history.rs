//! Rewindable game history.
//!
//! A [`GameHistory`] is an ordered list of board snapshots plus a cursor.
//! Snapshot `k` is the board after `k` moves. Moving the cursor never touches
//! the snapshots; playing a move after rewinding discards everything past the
//! cursor before appending.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::action::Move;
use crate::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Snapshot};

/// State change reported by [`GameHistory`] mutators.
///
/// The UI collaborator redraws whenever it receives one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HistoryEvent {
    /// A move was appended and the game continues.
    MovePlayed {
        /// Step the cursor now points at.
        step: usize,
        /// The move that produced the new snapshot.
        action: Move,
    },
    /// A move was appended and it completed a line.
    GameWon {
        /// Step the cursor now points at.
        step: usize,
        /// The winning move.
        action: Move,
        /// The completed line.
        line: [Position; 3],
    },
    /// The cursor moved to an earlier or later recorded step.
    Jumped {
        /// Step the cursor now points at.
        step: usize,
    },
}

impl HistoryEvent {
    /// Step the cursor points at after this event.
    pub fn step(&self) -> usize {
        match self {
            HistoryEvent::MovePlayed { step, .. }
            | HistoryEvent::GameWon { step, .. }
            | HistoryEvent::Jumped { step } => *step,
        }
    }
}

/// Ordered board snapshots plus the currently displayed step.
///
/// Deserialization rejects any history that breaks the history invariants,
/// so a loaded history is as safe to query as a played one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) step: usize,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Snapshot>,
    step: usize,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = InvariantViolation;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: raw.snapshots,
            step: raw.step,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let descriptions: Vec<_> = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect();
            warn!(?descriptions, "Rejecting invalid history");
            InvariantViolation::new(descriptions.join("; "))
        })?;
        Ok(history)
    }
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            step: 0,
        }
    }

    /// Builds a history by playing `cells` in order from the empty board.
    ///
    /// Moves that would be ignored by [`GameHistory::apply_move`] are skipped.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        let mut history = Self::new();
        for &cell in cells {
            history.apply_move(cell);
        }
        history
    }

    /// Plays the next mark at `cell`.
    ///
    /// Ignored (returns `None`, nothing changes) when the current snapshot
    /// already has a winner, when the cell is occupied, or when `cell` is not
    /// a board index.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply_move(&mut self, cell: usize) -> Option<HistoryEvent> {
        let Some(position) = Position::from_index(cell) else {
            warn!(cell, "Ignoring move outside the board");
            return None;
        };
        self.apply_position(position)
    }

    /// Plays the next mark at `position`. See [`GameHistory::apply_move`].
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply_position(&mut self, position: Position) -> Option<HistoryEvent> {
        let current = *self.current_snapshot();

        if let Some(winner) = rules::winner(&current) {
            debug!(%winner, "Ignoring move after win");
            return None;
        }
        if !current.is_empty(position) {
            debug!(%position, "Ignoring move on occupied square");
            return None;
        }

        let player = self.next_player();
        let next = current.with_mark(position, player);

        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(next);
        self.step = self.snapshots.len() - 1;

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        let action = Move::new(player, position);
        let event = match rules::winning_line(&next) {
            Some((_, line)) => {
                info!(%action, step = self.step, "Game won");
                HistoryEvent::GameWon {
                    step: self.step,
                    action,
                    line,
                }
            }
            None => {
                info!(%action, step = self.step, "Move played");
                HistoryEvent::MovePlayed {
                    step: self.step,
                    action,
                }
            }
        };
        Some(event)
    }

    /// Moves the cursor to a recorded step.
    ///
    /// Steps past the end of the history are ignored.
    #[instrument(skip(self), fields(from = self.step, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> Option<HistoryEvent> {
        if step >= self.snapshots.len() {
            warn!(step, "Ignoring jump outside the history");
            return None;
        }
        self.step = step;
        info!(step, "Jumped");
        Some(HistoryEvent::Jumped { step })
    }

    /// The snapshot at the cursor.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.step]
    }

    /// Whether X places the next mark.
    pub fn is_x_next(&self) -> bool {
        self.step % 2 == 0
    }

    /// The player who places the next mark.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// The cursor.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of recorded snapshots, including the empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the empty board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All recorded snapshots.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Winner on the snapshot at the cursor.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self.current_snapshot())
    }

    /// The move that produced snapshot `step`; `None` for step 0.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let before = self.snapshots.get(step.checked_sub(1)?)?;
        let after = self.snapshots.get(step)?;
        Move::between(before, after)
    }

    /// Status line for the snapshot at the cursor.
    pub fn status_text(&self) -> String {
        match self.winner() {
            Some(winner) => format!("Winner is {}", winner),
            None => format!("Next player: {}", self.next_player()),
        }
    }

    /// Label for the jump button of `step`.
    pub fn step_label(step: usize) -> String {
        if step == 0 {
            "Go to move start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
