//! Final and in-progress standings.

use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorMap, GameState};

/// Finishing order, followed by the colors still on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    /// Colors that completed their set, in finishing order.
    pub finished: Vec<Color>,
    /// Colors still playing, in turn order.
    pub remaining: Vec<Color>,
    /// Finished pieces per color.
    pub pieces_home: ColorMap<u8>,
}

impl Standings {
    /// Standings of a state.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        let finished: Vec<Color> = state.winners.iter().copied().collect();
        let remaining = state
            .players
            .iter()
            .copied()
            .filter(|c| !finished.contains(c))
            .collect();
        Self {
            finished,
            remaining,
            pieces_home: state.finished_counts(),
        }
    }

    /// The first color to finish.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.finished.first().copied()
    }

    /// 1-based place of a color that has finished.
    #[must_use]
    pub fn place_of(&self, color: Color) -> Option<usize> {
        self.finished.iter().position(|&c| c == color).map(|i| i + 1)
    }

    /// Full ranking: finishers in order, then the remaining colors.
    ///
    /// Once the game is over with a single color left, this is the final
    /// result with that color in last place.
    #[must_use]
    pub fn ranking(&self) -> Vec<Color> {
        self.finished.iter().chain(self.remaining.iter()).copied().collect()
    }
}
