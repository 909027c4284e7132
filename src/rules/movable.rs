//! Movable-set resolution.
//!
//! This is the single authority on which pieces may move for a die face.
//! Move validation and piece highlighting both call it, and callers are
//! expected to recompute it from the current state rather than cache it.

use smallvec::SmallVec;

use crate::board::ENTRY_FACE;
use crate::core::{is_die_face, Color, Piece, PieceId, Position};

/// Whether a piece may move `die` cells.
///
/// - a value that is not a die face: never
/// - finished: never
/// - at base: only on the entry face
/// - on the stretch: only without overshooting the finish cell
/// - on the ring: always
#[must_use]
pub fn can_move(piece: &Piece, die: u8) -> bool {
    let position = piece.position;
    if !is_die_face(die) || position.is_finished() {
        false
    } else if position.is_base() {
        die == ENTRY_FACE
    } else if position.is_stretch() {
        i16::from(position.value()) + i16::from(die) <= i16::from(Position::FINISHED.value())
    } else {
        true
    }
}

/// Position a piece lands on when moving `die` cells.
///
/// Leaving base always lands on the entry cell. The result is only
/// meaningful when `can_move` holds.
#[must_use]
pub fn landing_position(position: Position, die: u8) -> Position {
    if position.is_base() {
        Position::ENTRY
    } else {
        position.advanced(die)
    }
}

/// Pieces of `color` that may move `die` cells, in slot order.
pub fn movable_pieces<'a>(
    pieces: impl IntoIterator<Item = &'a Piece>,
    color: Color,
    die: u8,
) -> SmallVec<[PieceId; 4]> {
    pieces
        .into_iter()
        .filter(|p| p.color() == color && can_move(p, die))
        .map(|p| p.id)
        .collect()
}
