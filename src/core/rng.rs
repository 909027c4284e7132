//! Deterministic random number generation for die rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequence
//! - **Portable**: ChaCha8 output does not depend on the platform
//!
//! ```
//! use ludo_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut same = GameRng::new(42);
//!
//! let face = rng.roll_die();
//! assert!((1..=6).contains(&face));
//! assert_eq!(face, same.roll_die());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Deterministic RNG backing the die.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Roll a fair die, uniform over `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}
