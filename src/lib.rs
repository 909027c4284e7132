//! # ludo-engine
//!
//! A rules engine for four-player Ludo, with a timer-driven turn controller
//! that a presentation layer can drive with two intents: roll, and select a
//! piece.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Movement, capture, win detection and turn advancement
//!    are pure functions from one `GameState` to the next.
//!
//! 2. **Derived, Never Cached**: The movable set is recomputed from the
//!    current state whenever it is asked for.
//!
//! 3. **Invalid Intents Are No-ops**: Rejected intents leave the state
//!    untouched; the reason is returned but never fatal.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Pieces and winners live in `im-rs`
//!   collections, so every transition produces a whole new state cheaply.
//!
//! - **Injectable Time and Dice**: The controller takes a `Clock` and a
//!   `DieRoller`, so the full turn cycle runs in tests without sleeping or
//!   randomness.
//!
//! ## Modules
//!
//! - `core`: Colors, pieces, positions, state, intents, dice, configuration
//! - `board`: Ring geometry and safe spots
//! - `rules`: Movable-set resolution, move execution, turn transitions
//! - `turn`: The turn controller, its scheduler and clocks
//! - `events`: Notifications for the presentation layer

pub mod core;
pub mod board;
pub mod rules;
pub mod turn;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, Piece, PieceId, Position,
    GameRng, DieRoller, LoadedDice,
    GameConfig, EndPolicy,
    Intent, MoveRecord,
    GameState, TurnPhase,
};

pub use crate::board::{global_ring_index, is_safe_spot, position_class, PositionClass, SAFE_SPOTS};

pub use crate::rules::{apply_move, movable_pieces, IntentError, MoveOutcome, Standings};

pub use crate::turn::{Clock, ManualClock, SystemClock, TurnController};

pub use crate::events::{EventListener, EventLog, GameEvent};
