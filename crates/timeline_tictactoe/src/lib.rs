//! Tic-tac-toe with a rewindable move history.
//!
//! The crate holds the pure game model: immutable board snapshots, the
//! [`GameHistory`] cursor over them, and the win rule. Rendering lives in a
//! separate collaborator that feeds clicks into [`GameHistory::apply_move`]
//! and [`GameHistory::jump_to`] and redraws from [`GameView`].
//!
//! ```
//! use timeline_tictactoe::{GameHistory, Player};
//!
//! let mut history = GameHistory::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     history.apply_move(cell);
//! }
//! assert_eq!(history.winner(), Some(Player::X));
//! assert_eq!(history.status_text(), "Winner is X");
//!
//! // Moves after a win are ignored.
//! assert!(history.apply_move(5).is_none());
//!
//! // Rewinding keeps the recorded snapshots.
//! history.jump_to(0);
//! assert!(history.is_x_next());
//! assert_eq!(history.len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::Move;
pub use history::{GameHistory, HistoryEvent};
pub use position::Position;
pub use rules::{is_full, winner, winning_line};
pub use types::{Board, BoardError, Player, Snapshot, Square};
pub use view::{GameView, StepEntry};
