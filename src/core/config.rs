//! Game configuration.
//!
//! The board itself is fixed (four colors, 52-cell ring, 6-cell stretch);
//! what games configure is the die seed, the presentation-facing delays and
//! how the game ends.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// When a game is considered over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndPolicy {
    /// Stop once a single color is left without a finished set.
    #[default]
    StopAtLastPlayer,
    /// Keep playing until every color has finished.
    PlayToCompletion,
}

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the die RNG.
    pub seed: u64,

    /// Delay between a roll intent and the revealed face.
    /// Zero resolves the roll inside the intent call.
    pub roll_delay: Duration,

    /// Delay between the end of a turn and the next color becoming active.
    /// Zero advances inside the triggering call.
    pub settle_delay: Duration,

    /// Game termination rule.
    pub end_policy: EndPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            roll_delay: Duration::from_millis(800),
            settle_delay: Duration::from_millis(1000),
            end_policy: EndPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Configuration with no delays, for headless play and tests.
    #[must_use]
    pub fn headless() -> Self {
        Self {
            roll_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_roll_delay(mut self, delay: Duration) -> Self {
        self.roll_delay = delay;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_end_policy(mut self, policy: EndPolicy) -> Self {
        self.end_policy = policy;
        self
    }
}
