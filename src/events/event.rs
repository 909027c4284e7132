//! Game events.
//!
//! Events describe what happened during a transition. They are produced by
//! the turn controller after the new state is in place and are meant for
//! the presentation layer (animations, sounds, celebration effects). No
//! rule ever reads them back.

use serde::{Deserialize, Serialize};

use crate::core::{Color, MoveRecord, PieceId};

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A roll resolved.
    DiceRolled { color: Color, value: u8 },

    /// The roll left no legal move; the turn will pass.
    TurnSkipped { color: Color, value: u8 },

    /// A piece moved.
    PieceMoved(MoveRecord),

    /// A piece was sent back to base.
    PieceCaptured { piece: PieceId, by: Color, cell: u8 },

    /// The active color rolls again after a six.
    ExtraRoll { color: Color },

    /// The turn passed to another color.
    TurnPassed { from: Color, to: Color },

    /// A color completed its set. Fired once per color.
    Celebration { color: Color, place: usize },

    /// The game ended; `ranking` lists every color, winners first.
    GameOver { ranking: Vec<Color> },
}

impl GameEvent {
    /// The color this event is about, if any.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            GameEvent::DiceRolled { color, .. }
            | GameEvent::TurnSkipped { color, .. }
            | GameEvent::ExtraRoll { color }
            | GameEvent::Celebration { color, .. } => Some(*color),
            GameEvent::PieceMoved(record) => Some(record.piece.color()),
            GameEvent::PieceCaptured { by, .. } => Some(*by),
            GameEvent::TurnPassed { to, .. } => Some(*to),
            GameEvent::GameOver { .. } => None,
        }
    }
}

/// Receives events from the turn controller.
pub trait EventListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> EventListener for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}
