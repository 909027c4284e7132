//! Board geometry.
//!
//! Pure functions mapping color-relative positions onto the shared ring,
//! plus the fixed safe-spot table.

pub mod geometry;
pub mod occupancy;

pub use geometry::{
    global_ring_index, is_safe_spot, position_class, ring_index_of, PositionClass, ENTRY_FACE,
    RING_LENGTH, SAFE_SPOTS, STRETCH_LENGTH,
};
pub use occupancy::RingOccupancy;
