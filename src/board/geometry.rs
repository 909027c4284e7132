//! Board geometry: position classes and the shared ring numbering.
//!
//! Each color measures the ring from its own entry cell. Capture and
//! safe-spot checks compare pieces of different colors, so ring positions
//! are first translated into a single global numbering by adding the
//! color's entry offset modulo the ring length.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Position};

/// Cells on the shared ring.
pub const RING_LENGTH: u8 = 52;

/// Cells on each color's home stretch.
pub const STRETCH_LENGTH: u8 = 6;

/// The only die face that brings a piece out of base.
pub const ENTRY_FACE: u8 = 6;

/// Global ring indices where no capture can happen: every entry cell and
/// the cell eight steps past it.
pub const SAFE_SPOTS: [u8; 8] = [1, 9, 14, 22, 27, 35, 40, 48];

/// Coarse classification of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionClass {
    Base,
    Ring,
    Stretch,
    Finished,
}

/// Classify a position on the `-1..=58` scale.
///
/// Values outside the scale never occur in a consistent game; anything
/// below the ring is treated as base and anything past the stretch as
/// finished so that the function stays total.
#[must_use]
pub fn position_class(position: Position) -> PositionClass {
    if position.is_ring() {
        PositionClass::Ring
    } else if position.is_stretch() {
        PositionClass::Stretch
    } else if position < Position::ENTRY {
        PositionClass::Base
    } else {
        PositionClass::Finished
    }
}

/// Translate a color-relative ring position into the global ring index.
///
/// ```
/// use ludo_engine::board::global_ring_index;
/// use ludo_engine::core::Color;
///
/// assert_eq!(global_ring_index(Color::Red, 10), 11);
/// assert_eq!(global_ring_index(Color::Blue, 12), 0);
/// ```
#[must_use]
pub fn global_ring_index(color: Color, ring_position: u8) -> u8 {
    ((u16::from(ring_position) + u16::from(color.entry_offset())) % u16::from(RING_LENGTH)) as u8
}

/// Global ring index of a position, if it lies on the ring.
#[must_use]
pub fn ring_index_of(color: Color, position: Position) -> Option<u8> {
    position
        .is_ring()
        .then(|| global_ring_index(color, position.value() as u8))
}

/// Whether captures are forbidden on a global ring index.
#[must_use]
pub fn is_safe_spot(global_index: u8) -> bool {
    SAFE_SPOTS.contains(&global_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_class_boundaries() {
        assert_eq!(position_class(Position::BASE), PositionClass::Base);
        assert_eq!(position_class(Position::new(0)), PositionClass::Ring);
        assert_eq!(position_class(Position::new(51)), PositionClass::Ring);
        assert_eq!(position_class(Position::new(52)), PositionClass::Stretch);
        assert_eq!(position_class(Position::new(57)), PositionClass::Stretch);
        assert_eq!(position_class(Position::FINISHED), PositionClass::Finished);
    }

    #[test]
    fn test_position_class_partition_sizes() {
        let classes: Vec<_> = (-1..=58).map(|v| position_class(Position::new(v))).collect();
        let count = |c| classes.iter().filter(|&&x| x == c).count();

        assert_eq!(count(PositionClass::Base), 1);
        assert_eq!(count(PositionClass::Ring), usize::from(RING_LENGTH));
        assert_eq!(count(PositionClass::Stretch), usize::from(STRETCH_LENGTH));
        assert_eq!(count(PositionClass::Finished), 1);
    }

    #[test]
    fn test_entry_cells_map_to_offsets() {
        for color in Color::all() {
            assert_eq!(global_ring_index(color, 0), color.entry_offset());
        }
    }

    #[test]
    fn test_global_index_wraps() {
        assert_eq!(global_ring_index(Color::Red, 51), 0);
        assert_eq!(global_ring_index(Color::Green, 38), 0);
        assert_eq!(global_ring_index(Color::Yellow, 51), 26);
    }

    #[test]
    fn test_ring_index_of() {
        assert_eq!(ring_index_of(Color::Red, Position::new(10)), Some(11));
        assert_eq!(ring_index_of(Color::Red, Position::BASE), None);
        assert_eq!(ring_index_of(Color::Red, Position::new(53)), None);
    }

    #[test]
    fn test_safe_spots_cover_entries() {
        for color in Color::all() {
            let entry = color.entry_offset();
            assert!(is_safe_spot(entry));
            assert!(is_safe_spot(entry + 8));
        }
        assert!(!is_safe_spot(0));
        assert!(!is_safe_spot(13));
    }
}
