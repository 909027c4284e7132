//! Intents and move records.
//!
//! The presentation layer raises exactly two intents: roll the die, or pick
//! one of the movable pieces. Every applied move is recorded so that the
//! renderer can animate the transition.

use serde::{Deserialize, Serialize};

use super::piece::{PieceId, Position};

/// A user intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Roll the die.
    Roll,
    /// Move the given piece by the current die value.
    SelectPiece(PieceId),
}

/// A move that was applied to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The piece that moved.
    pub piece: PieceId,
    /// Position before the move.
    pub from: Position,
    /// Position after the move.
    pub to: Position,
}

impl MoveRecord {
    #[must_use]
    pub fn new(piece: PieceId, from: Position, to: Position) -> Self {
        Self { piece, from, to }
    }

    /// Whether the move brought the piece out of base.
    #[must_use]
    pub fn is_entry(&self) -> bool {
        self.from.is_base()
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.piece, self.from, self.to)
    }
}
