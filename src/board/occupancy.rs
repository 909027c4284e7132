//! Ring occupancy: which pieces stand on each global ring cell.
//!
//! Used by capture resolution and by renderers that need to fan out
//! pieces sharing a cell.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::geometry::ring_index_of;
use crate::core::{Piece, PieceId};

/// Pieces standing on each occupied global ring index.
#[derive(Clone, Debug, Default)]
pub struct RingOccupancy {
    cells: FxHashMap<u8, SmallVec<[PieceId; 4]>>,
}

impl RingOccupancy {
    /// Build the occupancy of a piece collection. Pieces at base, on a
    /// stretch or finished are ignored.
    pub fn from_pieces<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> Self {
        let mut cells: FxHashMap<u8, SmallVec<[PieceId; 4]>> = FxHashMap::default();
        for piece in pieces {
            if let Some(index) = ring_index_of(piece.color(), piece.position) {
                cells.entry(index).or_default().push(piece.id);
            }
        }
        Self { cells }
    }

    /// Pieces on a global ring index.
    #[must_use]
    pub fn at(&self, global_index: u8) -> &[PieceId] {
        self.cells
            .get(&global_index)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}
