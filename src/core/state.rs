//! Game state.
//!
//! ## GameState
//!
//! The complete, observable state of one game session:
//! - Turn order and the active color
//! - All 16 pieces
//! - Die value and the roll / move flags
//! - Finishing order and the last applied move
//!
//! Uses `im` persistent data structures so that every transition can return
//! a fresh `GameState` by value while sharing unchanged structure with the
//! previous one. Nothing outside a transition ever sees a partial update.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::color::{Color, ColorMap, COLOR_COUNT};
use super::piece::{Piece, PieceId, Position, PIECE_COUNT};

/// Where the active color's turn currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for a roll intent.
    AwaitingRoll,
    /// A roll is resolving.
    Rolling,
    /// A move is owed for the rolled die.
    AwaitingPieceSelection,
    /// The roll produced no legal move; the turn is about to pass.
    NoMoveAvailable,
    /// A move was applied; the turn is about to pass.
    MoveApplied,
    /// No further intents are accepted.
    GameOver,
}

/// Complete state of one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Fixed turn order.
    pub players: [Color; COLOR_COUNT],

    /// Index into `players` of the active color.
    pub current_player_index: usize,

    /// All pieces, indexed by `PieceId`.
    pub pieces: Vector<Piece>,

    /// Face of the last resolved roll, cleared when a new roll starts.
    pub dice_value: Option<u8>,

    /// A roll is resolving.
    pub is_rolling: bool,

    /// A move is owed for `dice_value`.
    pub must_move: bool,

    /// The active color may roll.
    pub can_roll: bool,

    /// Colors that finished their set, in finishing order.
    pub winners: Vector<Color>,

    /// Most recently applied move.
    pub last_move: Option<MoveRecord>,

    /// Every applied move, oldest first.
    pub history: Vector<MoveRecord>,

    /// Turn number (starts at 1, increments when the active color changes).
    pub turn_number: u32,

    /// A move has been applied for the current roll.
    pub moved_this_roll: bool,

    /// The game has ended; intents are rejected.
    pub game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: red to roll, every piece at base.
    #[must_use]
    pub fn new() -> Self {
        let pieces = (0..PIECE_COUNT as u8)
            .map(|i| Piece::at_base(PieceId(i)))
            .collect();

        Self {
            players: Color::ALL,
            current_player_index: 0,
            pieces,
            dice_value: None,
            is_rolling: false,
            must_move: false,
            can_roll: true,
            winners: Vector::new(),
            last_move: None,
            history: Vector::new(),
            turn_number: 1,
            moved_this_roll: false,
            game_over: false,
        }
    }

    /// Copy of this state with the given pieces relocated.
    ///
    /// Intended for setting up positions in tests and puzzles; it bypasses
    /// every rule.
    #[must_use]
    pub fn with_positions(mut self, positions: impl IntoIterator<Item = (PieceId, Position)>) -> Self {
        for (id, position) in positions {
            if id.is_valid() {
                self.pieces.set(id.index(), Piece { id, position });
            }
        }
        self
    }

    /// Copy of this state with `color` active.
    #[must_use]
    pub fn with_active_color(mut self, color: Color) -> Self {
        if let Some(index) = self.players.iter().position(|&c| c == color) {
            self.current_player_index = index;
        }
        self
    }

    /// Color whose turn it is.
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.players[self.current_player_index % COLOR_COUNT]
    }

    /// Look up a piece.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Current position of a piece.
    #[must_use]
    pub fn position_of(&self, id: PieceId) -> Option<Position> {
        self.piece(id).map(|p| p.position)
    }

    /// Pieces of one color, in slot order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.color() == color)
    }

    /// Whether all of a color's pieces are finished.
    #[must_use]
    pub fn set_complete(&self, color: Color) -> bool {
        self.pieces_of(color).all(|p| p.position.is_finished())
    }

    /// Whether a color is in the winners list.
    #[must_use]
    pub fn has_won(&self, color: Color) -> bool {
        self.winners.contains(&color)
    }

    /// Finished piece count per color.
    #[must_use]
    pub fn finished_counts(&self) -> ColorMap<u8> {
        let mut counts = ColorMap::default();
        for piece in self.pieces.iter().filter(|p| p.position.is_finished()) {
            counts[piece.color()] += 1;
        }
        counts
    }

    /// Derived turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.game_over {
            TurnPhase::GameOver
        } else if self.is_rolling {
            TurnPhase::Rolling
        } else if self.can_roll {
            TurnPhase::AwaitingRoll
        } else if self.must_move {
            TurnPhase::AwaitingPieceSelection
        } else if self.moved_this_roll {
            TurnPhase::MoveApplied
        } else {
            TurnPhase::NoMoveAvailable
        }
    }

    /// Whether the turn has ended and is waiting to pass to the next color.
    #[must_use]
    pub fn awaiting_turn_advance(&self) -> bool {
        matches!(self.phase(), TurnPhase::NoMoveAvailable | TurnPhase::MoveApplied)
            && self.dice_value.is_some()
    }
}
