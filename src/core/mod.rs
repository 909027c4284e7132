//! Core engine types: colors, pieces, state, intents, dice, configuration.
//!
//! This module contains the value types every other module builds on.
//! Nothing in here knows the movement rules.

pub mod color;
pub mod piece;
pub mod rng;
pub mod dice;
pub mod config;
pub mod action;
pub mod state;

pub use color::{Color, ColorMap, COLOR_COUNT};
pub use piece::{ParsePieceIdError, Piece, PieceId, Position, PIECES_PER_COLOR, PIECE_COUNT};
pub use rng::{GameRng, DIE_FACES};
pub use dice::{is_die_face, DieRoller, LoadedDice};
pub use config::{EndPolicy, GameConfig};
pub use action::{Intent, MoveRecord};
pub use state::{GameState, TurnPhase};
