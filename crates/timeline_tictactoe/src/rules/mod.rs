//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single snapshot. Rules know nothing about history
//! or whose turn it is.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winner, winning_line};
