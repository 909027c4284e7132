//! Intent rejection reasons.
//!
//! Invalid intents never change state. The reason is returned so callers
//! can log or assert on it; the presentation layer normally ignores it.

use thiserror::Error;

use crate::core::{Color, PieceId};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("rolling is not permitted right now")]
    RollNotPermitted,
    #[error("a roll is already resolving")]
    RollInProgress,
    #[error("{0} is not a face of the die")]
    InvalidDie(u8),
    #[error("no move is owed")]
    NoMoveOwed,
    #[error("unknown piece {0:?}")]
    UnknownPiece(PieceId),
    #[error("piece {piece} does not belong to the active color {active}")]
    NotActiveColor { piece: PieceId, active: Color },
    #[error("piece {piece} cannot move {die}")]
    NotMovable { piece: PieceId, die: u8 },
    #[error("die value {given} does not match the current roll {current:?}")]
    StaleDie { given: u8, current: Option<u8> },
    #[error("the game is over")]
    GameOver,
}
