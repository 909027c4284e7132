//! Move execution: relocation, capture resolution and win detection.
//!
//! Moves are applied to a copy of the state; the input state is never
//! modified. A move is only applied when it is owed, the die matches the
//! current roll, the piece belongs to the active color and the piece is in
//! the movable set recomputed from the state at hand.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::error::IntentError;
use super::movable::{can_move, landing_position};
use crate::board::{is_safe_spot, ring_index_of, RingOccupancy};
use crate::core::{is_die_face, Color, GameState, MoveRecord, Piece, PieceId, Position};

/// What a successful move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The relocation of the moving piece.
    pub record: MoveRecord,
    /// Opposing pieces sent back to base.
    pub captured: SmallVec<[PieceId; 4]>,
    /// The mover completed its set with this move.
    pub won: bool,
}

/// Check every precondition of a move without applying it.
pub fn validate_move(state: &GameState, piece_id: PieceId, die: u8) -> Result<Piece, IntentError> {
    if state.game_over {
        return Err(IntentError::GameOver);
    }
    if !is_die_face(die) {
        return Err(IntentError::InvalidDie(die));
    }
    if !state.must_move {
        return Err(IntentError::NoMoveOwed);
    }
    if state.dice_value != Some(die) {
        return Err(IntentError::StaleDie {
            given: die,
            current: state.dice_value,
        });
    }

    let piece = *state
        .piece(piece_id)
        .ok_or(IntentError::UnknownPiece(piece_id))?;
    let active = state.active_color();
    if piece.color() != active {
        return Err(IntentError::NotActiveColor {
            piece: piece_id,
            active,
        });
    }
    if !can_move(&piece, die) {
        return Err(IntentError::NotMovable { piece: piece_id, die });
    }

    Ok(piece)
}

/// Apply a move, returning the new state and what happened.
pub fn try_apply_move(
    state: &GameState,
    piece_id: PieceId,
    die: u8,
) -> Result<(GameState, MoveOutcome), IntentError> {
    let piece = validate_move(state, piece_id, die)?;
    let mover = piece.color();
    let from = piece.position;
    let to = landing_position(from, die);

    let mut next = state.clone();
    next.pieces.set(piece_id.index(), piece.moved_to(to));

    let captured = resolve_captures(&mut next, mover, to);

    let record = MoveRecord::new(piece_id, from, to);
    next.must_move = false;
    next.moved_this_roll = true;
    next.last_move = Some(record);
    next.history.push_back(record);

    let (next, won) = record_win(&next, mover);

    debug!(%record, captured = captured.len(), won, "move applied");

    Ok((
        next,
        MoveOutcome {
            record,
            captured,
            won,
        },
    ))
}

/// Apply a move, or return an unchanged copy of `state` when the move is
/// not legal.
#[must_use]
pub fn apply_move(state: &GameState, piece_id: PieceId, die: u8) -> GameState {
    match try_apply_move(state, piece_id, die) {
        Ok((next, _)) => next,
        Err(err) => {
            debug!(%piece_id, die, %err, "move ignored");
            state.clone()
        }
    }
}

/// Send opposing pieces on the mover's landing cell back to base.
///
/// Only ring cells that are not safe spots capture. Every opponent on the
/// cell is captured; the mover's own color is never affected.
fn resolve_captures(state: &mut GameState, mover: Color, landed: Position) -> SmallVec<[PieceId; 4]> {
    let Some(global) = ring_index_of(mover, landed) else {
        return SmallVec::new();
    };
    if is_safe_spot(global) {
        return SmallVec::new();
    }

    let captured: SmallVec<[PieceId; 4]> = RingOccupancy::from_pieces(state.pieces.iter())
        .at(global)
        .iter()
        .copied()
        .filter(|id| id.color() != mover)
        .collect();

    for &id in &captured {
        state.pieces.set(id.index(), Piece::at_base(id));
        debug!(piece = %id, by = %mover, cell = global, "piece captured");
    }

    captured
}

/// Append `color` to the winners if its set is complete and it is not
/// already recorded.
///
/// Returns the new state and whether the color was newly recorded, so
/// repeated calls never duplicate a winner.
#[must_use]
pub fn record_win(state: &GameState, color: Color) -> (GameState, bool) {
    if state.has_won(color) || !state.set_complete(color) {
        return (state.clone(), false);
    }

    let mut next = state.clone();
    next.winners.push_back(color);
    info!(%color, place = next.winners.len(), "color finished");
    (next, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::turn::resolve_roll;

    fn id(color: Color, slot: u8) -> PieceId {
        PieceId::new(color, slot)
    }

    /// State where `color` is active and owes a move for `die`.
    fn owing(state: GameState, color: Color, die: u8) -> GameState {
        let mut state = state.with_active_color(color);
        state.can_roll = false;
        resolve_roll(&state, die).unwrap()
    }

    #[test]
    fn test_enter_from_base() {
        let state = owing(GameState::new(), Color::Red, 6);
        let (next, outcome) = try_apply_move(&state, id(Color::Red, 0), 6).unwrap();

        assert_eq!(next.position_of(id(Color::Red, 0)), Some(Position::ENTRY));
        assert_eq!(outcome.record, MoveRecord::new(id(Color::Red, 0), Position::BASE, Position::ENTRY));
        assert!(outcome.captured.is_empty());
        assert!(!outcome.won);
        assert!(!next.must_move);
        assert_eq!(next.last_move, Some(outcome.record));
        assert_eq!(next.history.len(), 1);
    }

    #[test]
    fn test_values_off_the_die_rejected() {
        let state = owing(
            GameState::new().with_positions([(id(Color::Red, 0), Position::new(40))]),
            Color::Red,
            3,
        );

        for die in [0, 60, 100] {
            let mut forced = state.clone();
            forced.dice_value = Some(die);
            assert_eq!(
                try_apply_move(&forced, id(Color::Red, 0), die).unwrap_err(),
                IntentError::InvalidDie(die)
            );
            assert_eq!(forced.position_of(id(Color::Red, 0)), Some(Position::new(40)));
        }
    }

    #[test]
    fn test_input_state_untouched() {
        let state = owing(GameState::new(), Color::Red, 6);
        let _ = try_apply_move(&state, id(Color::Red, 0), 6).unwrap();
        assert_eq!(state.position_of(id(Color::Red, 0)), Some(Position::BASE));
        assert!(state.must_move);
    }

    #[test]
    fn test_capture_on_plain_cell() {
        // red 10 (global 11) + 2 -> red 12 (global 13); blue 25 is global 13
        let state = GameState::new().with_positions([
            (id(Color::Red, 0), Position::new(10)),
            (id(Color::Blue, 1), Position::new(25)),
        ]);
        let state = owing(state, Color::Red, 2);

        let (next, outcome) = try_apply_move(&state, id(Color::Red, 0), 2).unwrap();
        assert_eq!(next.position_of(id(Color::Red, 0)), Some(Position::new(12)));
        assert_eq!(next.position_of(id(Color::Blue, 1)), Some(Position::BASE));
        assert_eq!(outcome.captured.as_slice(), &[id(Color::Blue, 1)]);
    }

    #[test]
    fn test_capture_takes_every_opponent_on_cell() {
        // global 13: blue 25, yellow 38
        let state = GameState::new().with_positions([
            (id(Color::Red, 0), Position::new(10)),
            (id(Color::Blue, 0), Position::new(25)),
            (id(Color::Blue, 3), Position::new(25)),
            (id(Color::Yellow, 2), Position::new(38)),
        ]);
        let state = owing(state, Color::Red, 2);

        let (next, outcome) = try_apply_move(&state, id(Color::Red, 0), 2).unwrap();
        assert_eq!(outcome.captured.len(), 3);
        for victim in [id(Color::Blue, 0), id(Color::Blue, 3), id(Color::Yellow, 2)] {
            assert_eq!(next.position_of(victim), Some(Position::BASE));
        }
    }

    #[test]
    fn test_no_capture_of_own_color() {
        let state = GameState::new().with_positions([
            (id(Color::Red, 0), Position::new(10)),
            (id(Color::Red, 1), Position::new(12)),
        ]);
        let state = owing(state, Color::Red, 2);

        let (next, outcome) = try_apply_move(&state, id(Color::Red, 0), 2).unwrap();
        assert!(outcome.captured.is_empty());
        assert_eq!(next.position_of(id(Color::Red, 1)), Some(Position::new(12)));
    }

    #[test]
    fn test_no_capture_on_safe_spot() {
        // red 10 + 3 -> red 13 = global 14, green's entry cell
        let state = GameState::new().with_positions([
            (id(Color::Red, 0), Position::new(10)),
            (id(Color::Green, 0), Position::ENTRY),
        ]);
        let state = owing(state, Color::Red, 3);

        let (next, outcome) = try_apply_move(&state, id(Color::Red, 0), 3).unwrap();
        assert!(outcome.captured.is_empty());
        assert_eq!(next.position_of(id(Color::Green, 0)), Some(Position::ENTRY));
    }

    #[test]
    fn test_no_capture_inside_stretch() {
        let state = GameState::new().with_positions([
            (id(Color::Red, 0), Position::new(50)),
            (id(Color::Green, 0), Position::new(54)),
        ]);
        let state = owing(state, Color::Red, 4);

        let (next, outcome) = try_apply_move(&state, id(Color::Red, 0), 4).unwrap();
        assert_eq!(next.position_of(id(Color::Red, 0)), Some(Position::new(54)));
        assert!(outcome.captured.is_empty());
        assert_eq!(next.position_of(id(Color::Green, 0)), Some(Position::new(54)));
    }

    #[test]
    fn test_win_detection() {
        let state = GameState::new().with_positions([
            (id(Color::Green, 0), Position::FINISHED),
            (id(Color::Green, 1), Position::FINISHED),
            (id(Color::Green, 2), Position::FINISHED),
            (id(Color::Green, 3), Position::new(57)),
        ]);
        let state = owing(state, Color::Green, 1);

        let (next, outcome) = try_apply_move(&state, id(Color::Green, 3), 1).unwrap();
        assert!(outcome.won);
        assert_eq!(next.winners.iter().copied().collect::<Vec<_>>(), vec![Color::Green]);
    }

    #[test]
    fn test_record_win_is_idempotent() {
        let finished = (0..4).map(|s| (id(Color::Blue, s), Position::FINISHED));
        let state = GameState::new().with_positions(finished);

        let (once, first) = record_win(&state, Color::Blue);
        let (twice, second) = record_win(&once, Color::Blue);

        assert!(first);
        assert!(!second);
        assert_eq!(twice.winners.len(), 1);
    }

    #[test]
    fn test_record_win_requires_full_set() {
        let state = GameState::new().with_positions([(id(Color::Blue, 0), Position::FINISHED)]);
        let (next, won) = record_win(&state, Color::Blue);
        assert!(!won);
        assert!(next.winners.is_empty());
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let fresh = GameState::new();
        assert_eq!(
            try_apply_move(&fresh, id(Color::Red, 0), 6).unwrap_err(),
            IntentError::NoMoveOwed
        );
        assert_eq!(apply_move(&fresh, id(Color::Red, 0), 6), fresh);

        let state = owing(GameState::new(), Color::Red, 6);
        assert_eq!(
            try_apply_move(&state, id(Color::Green, 0), 6).unwrap_err(),
            IntentError::NotActiveColor {
                piece: id(Color::Green, 0),
                active: Color::Red
            }
        );
        assert_eq!(
            try_apply_move(&state, id(Color::Red, 0), 5).unwrap_err(),
            IntentError::StaleDie {
                given: 5,
                current: Some(6)
            }
        );
        assert_eq!(
            try_apply_move(&state, PieceId(40), 6).unwrap_err(),
            IntentError::UnknownPiece(PieceId(40))
        );
        assert_eq!(apply_move(&state, id(Color::Green, 0), 6), state);
    }

    #[test]
    fn test_unmovable_piece_rejected() {
        let state = GameState::new().with_positions([(id(Color::Red, 1), Position::new(20))]);
        let state = owing(state, Color::Red, 3);

        assert_eq!(
            try_apply_move(&state, id(Color::Red, 0), 3).unwrap_err(),
            IntentError::NotMovable {
                piece: id(Color::Red, 0),
                die: 3
            }
        );
    }
}
