//! Die sources.
//!
//! The turn controller draws faces through the `DieRoller` trait so that
//! games can run on a seeded RNG while tests and replays feed a fixed
//! sequence of faces.

use std::collections::VecDeque;

use super::rng::{GameRng, DIE_FACES};

/// Whether `face` is a face of the die (`1..=6`).
#[must_use]
pub const fn is_die_face(face: u8) -> bool {
    face >= 1 && face <= DIE_FACES
}

/// A source of die faces in `1..=6`.
///
/// The turn controller rejects faces outside that range, so an
/// implementation that produces one stalls the roll rather than
/// corrupting the board.
pub trait DieRoller {
    /// Produce the next face.
    fn roll(&mut self) -> u8;
}

impl DieRoller for GameRng {
    fn roll(&mut self) -> u8 {
        self.roll_die()
    }
}

/// Scripted dice: yields queued faces in order, then falls back to a seeded
/// RNG once the script runs out.
///
/// ```
/// use ludo_engine::core::{DieRoller, LoadedDice};
///
/// let mut dice = LoadedDice::new([6, 3]);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 3);
/// assert!((1..=6).contains(&dice.roll()));
/// ```
#[derive(Clone, Debug)]
pub struct LoadedDice {
    script: VecDeque<u8>,
    fallback: GameRng,
}

impl LoadedDice {
    /// Create dice that yield `faces` first. Faces are clamped to `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: faces.into_iter().map(|f| f.clamp(1, DIE_FACES)).collect(),
            fallback: GameRng::new(0),
        }
    }

    /// Replace the RNG used after the script is exhausted.
    #[must_use]
    pub fn with_fallback(mut self, rng: GameRng) -> Self {
        self.fallback = rng;
        self
    }

    /// Append more faces to the script.
    pub fn push(&mut self, face: u8) {
        self.script.push_back(face.clamp(1, DIE_FACES));
    }

    /// Faces still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DieRoller for LoadedDice {
    fn roll(&mut self) -> u8 {
        match self.script.pop_front() {
            Some(face) => face,
            None => self.fallback.roll_die(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_dice_order() {
        let mut dice = LoadedDice::new([1, 2, 6]);
        assert_eq!(dice.remaining(), 3);
        assert_eq!(dice.roll(), 1);
        assert_eq!(dice.roll(), 2);
        assert_eq!(dice.roll(), 6);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_loaded_dice_clamps_faces() {
        let mut dice = LoadedDice::new([0, 9]);
        assert_eq!(dice.roll(), 1);
        assert_eq!(dice.roll(), 6);
    }

    #[test]
    fn test_loaded_dice_fallback_is_deterministic() {
        let mut a = LoadedDice::new([]).with_fallback(GameRng::new(9));
        let mut b = LoadedDice::new([]).with_fallback(GameRng::new(9));

        for _ in 0..20 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_push_extends_script() {
        let mut dice = LoadedDice::new([]);
        dice.push(4);
        assert_eq!(dice.roll(), 4);
    }
}
