//! # Board State
//!
//! Immutable snapshot of a player's game at the moment augments are offered.
//! This crate only describes the board; it performs no scoring and does not
//! track the game as it unfolds.

pub mod game_state;
pub mod stage;

pub use game_state::*;
pub use stage::*;
