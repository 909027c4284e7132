//! Piece identification and track positions.
//!
//! Every piece has a stable `PieceId` built from its color and slot, so that
//! `red-0` through `blue-3` map onto the contiguous range `0..16`.
//!
//! ## Position Scale
//!
//! Positions are measured in the piece's own color-relative frame:
//! - `-1`: at base
//! - `0..=51`: on the shared ring (0 = the color's entry cell)
//! - `52..=57`: on the color's private home stretch
//! - `58`: finished
//!
//! ```
//! use ludo_engine::core::{Color, PieceId, Position};
//!
//! let id = PieceId::new(Color::Green, 2);
//! assert_eq!(id.to_string(), "green-2");
//! assert_eq!("green-2".parse::<PieceId>(), Ok(id));
//!
//! assert!(Position::BASE.is_base());
//! assert!(Position::new(57).is_stretch());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::color::{Color, COLOR_COUNT};

/// Pieces owned by each color.
pub const PIECES_PER_COLOR: usize = 4;

/// Total pieces on the board.
pub const PIECE_COUNT: usize = PIECES_PER_COLOR * COLOR_COUNT;

/// Stable identifier of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create the id for a color's slot (0-3).
    #[must_use]
    pub const fn new(color: Color, slot: u8) -> Self {
        Self(color.index() as u8 * PIECES_PER_COLOR as u8 + slot)
    }

    /// Owning color.
    #[must_use]
    pub const fn color(self) -> Color {
        Color::from_index(self.0 as usize / PIECES_PER_COLOR)
    }

    /// Slot within the owning color (0-3).
    #[must_use]
    pub const fn slot(self) -> u8 {
        self.0 % PIECES_PER_COLOR as u8
    }

    /// Index into the piece collection.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this id names one of the 16 pieces.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < PIECE_COUNT
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.color(), self.slot())
    }
}

/// Error parsing a `<color>-<slot>` piece id.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid piece id `{0}`")]
pub struct ParsePieceIdError(pub String);

impl FromStr for PieceId {
    type Err = ParsePieceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePieceIdError(s.to_string());
        let (name, slot) = s.split_once('-').ok_or_else(err)?;
        let color = Color::from_name(name).ok_or_else(err)?;
        let slot: u8 = slot.parse().map_err(|_| err())?;
        if usize::from(slot) >= PIECES_PER_COLOR {
            return Err(err());
        }
        Ok(Self::new(color, slot))
    }
}

/// A position on the color-relative track scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub i8);

impl Position {
    /// Waiting at base.
    pub const BASE: Position = Position(-1);
    /// Entry cell of the owner's ring frame.
    pub const ENTRY: Position = Position(0);
    /// First cell of the home stretch.
    pub const STRETCH_START: Position = Position(52);
    /// Reached the center.
    pub const FINISHED: Position = Position(58);

    #[must_use]
    pub const fn new(value: i8) -> Self {
        Self(value)
    }

    /// Raw value on the `-1..=58` scale.
    #[must_use]
    pub const fn value(self) -> i8 {
        self.0
    }

    #[must_use]
    pub const fn is_base(self) -> bool {
        self.0 == Self::BASE.0
    }

    /// On the shared ring (`0..=51`).
    #[must_use]
    pub const fn is_ring(self) -> bool {
        self.0 >= Self::ENTRY.0 && self.0 < Self::STRETCH_START.0
    }

    /// On the private home stretch (`52..=57`).
    #[must_use]
    pub const fn is_stretch(self) -> bool {
        self.0 >= Self::STRETCH_START.0 && self.0 < Self::FINISHED.0
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        self.0 == Self::FINISHED.0
    }

    /// Position after stepping forward `steps` cells.
    ///
    /// Saturates instead of wrapping; callers check the landing cell with
    /// the movement rules first.
    #[must_use]
    pub const fn advanced(self, steps: u8) -> Self {
        let steps = if steps > i8::MAX as u8 { i8::MAX } else { steps as i8 };
        Self(self.0.saturating_add(steps))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub position: Position,
}

impl Piece {
    /// A piece waiting at base.
    #[must_use]
    pub const fn at_base(id: PieceId) -> Self {
        Self {
            id,
            position: Position::BASE,
        }
    }

    /// Owning color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.id.color()
    }

    /// Slot within the owning color.
    #[must_use]
    pub const fn slot(&self) -> u8 {
        self.id.slot()
    }

    /// Copy of this piece at a new position.
    #[must_use]
    pub const fn moved_to(self, position: Position) -> Self {
        Self {
            id: self.id,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_id_layout() {
        assert_eq!(PieceId::new(Color::Red, 0).0, 0);
        assert_eq!(PieceId::new(Color::Green, 1).0, 5);
        assert_eq!(PieceId::new(Color::Blue, 3).0, 15);

        for color in Color::all() {
            for slot in 0..4 {
                let id = PieceId::new(color, slot);
                assert_eq!(id.color(), color);
                assert_eq!(id.slot(), slot);
                assert!(id.is_valid());
            }
        }
        assert!(!PieceId(16).is_valid());
    }

    #[test]
    fn test_piece_id_parse() {
        assert_eq!("red-0".parse(), Ok(PieceId::new(Color::Red, 0)));
        assert_eq!("blue-3".parse(), Ok(PieceId::new(Color::Blue, 3)));
        assert!("blue-4".parse::<PieceId>().is_err());
        assert!("teal-0".parse::<PieceId>().is_err());
        assert!("red".parse::<PieceId>().is_err());
        assert!("red-x".parse::<PieceId>().is_err());
    }

    #[test]
    fn test_position_predicates() {
        assert!(Position::BASE.is_base());
        assert!(Position::new(0).is_ring());
        assert!(Position::new(51).is_ring());
        assert!(!Position::new(52).is_ring());
        assert!(Position::new(52).is_stretch());
        assert!(Position::new(57).is_stretch());
        assert!(!Position::new(58).is_stretch());
        assert!(Position::FINISHED.is_finished());
        assert_eq!(Position::new(50).advanced(6), Position::new(56));
        assert_eq!(Position::new(40).advanced(200), Position::new(i8::MAX));
    }

    #[test]
    fn test_piece_moved_to() {
        let piece = Piece::at_base(PieceId::new(Color::Yellow, 2));
        let moved = piece.moved_to(Position::ENTRY);
        assert_eq!(moved.id, piece.id);
        assert_eq!(moved.position, Position::ENTRY);
        assert_eq!(moved.color(), Color::Yellow);
        assert_eq!(moved.slot(), 2);
    }

    #[test]
    fn test_position_serializes_as_integer() {
        let json = serde_json::to_string(&Position::BASE).unwrap();
        assert_eq!(json, "-1");
    }
}
