//! Movement and turn rules.
//!
//! Every function here is pure: it takes a `GameState` by reference and
//! returns a new one. Nothing in this module waits, schedules or notifies;
//! that is the turn controller's job.
//!
//! - `movable`: which pieces may move for a die face
//! - `executor`: applying a move, captures and win detection
//! - `turn`: roll resolution, extra rolls and turn advancement

pub mod error;
pub mod movable;
pub mod executor;
pub mod turn;
pub mod standings;

pub use error::IntentError;
pub use movable::{can_move, landing_position, movable_pieces};
pub use executor::{apply_move, record_win, try_apply_move, validate_move, MoveOutcome};
pub use turn::{begin_roll, is_game_over, next_turn, resolve_roll, settle_move};
pub use standings::Standings;
