//! Turn transitions.
//!
//! Pure functions over `GameState` for each edge of the turn cycle:
//!
//! ```text
//! AwaitingRoll -> Rolling -> AwaitingPieceSelection -> MoveApplied -> AwaitingRoll (six)
//!                         \-> NoMoveAvailable ------\-> next color
//! ```
//!
//! The turn controller decides *when* each runs; these functions decide
//! *what* the next state is.

use tracing::{debug, trace};

use super::error::IntentError;
use super::executor::MoveOutcome;
use super::movable::movable_pieces;
use crate::board::ENTRY_FACE;
use crate::core::{is_die_face, EndPolicy, GameState};

/// Start resolving a roll.
pub fn begin_roll(state: &GameState) -> Result<GameState, IntentError> {
    if state.game_over {
        return Err(IntentError::GameOver);
    }
    if state.is_rolling {
        return Err(IntentError::RollInProgress);
    }
    if !state.can_roll {
        return Err(IntentError::RollNotPermitted);
    }

    let mut next = state.clone();
    next.is_rolling = true;
    next.dice_value = None;
    next.moved_this_roll = false;
    Ok(next)
}

/// Reveal a die face and decide whether a move is owed.
///
/// With no movable piece the roll becomes a forced skip: the face is
/// recorded, and neither a roll nor a move is permitted until the turn
/// advances. A value outside `1..=6` is rejected and the roll stays
/// unresolved.
pub fn resolve_roll(state: &GameState, face: u8) -> Result<GameState, IntentError> {
    if !is_die_face(face) {
        return Err(IntentError::InvalidDie(face));
    }
    let color = state.active_color();
    let movable = movable_pieces(state.pieces.iter(), color, face);

    let mut next = state.clone();
    next.dice_value = Some(face);
    next.is_rolling = false;
    next.can_roll = false;
    next.moved_this_roll = false;
    next.must_move = !movable.is_empty();

    trace!(%color, face, movable = movable.len(), "roll resolved");
    Ok(next)
}

/// Settle the turn after a move.
///
/// A six grants another roll to the same color unless that move completed
/// its set. Otherwise the state is left waiting for the turn to advance,
/// or marked over when the end policy says so.
#[must_use]
pub fn settle_move(state: &GameState, outcome: &MoveOutcome, policy: EndPolicy) -> GameState {
    let mut next = state.clone();

    if is_game_over(&next, policy) {
        next.game_over = true;
        next.can_roll = false;
        next.must_move = false;
        debug!(winners = next.winners.len(), "game over");
        return next;
    }

    if next.dice_value == Some(ENTRY_FACE) && !outcome.won {
        next.can_roll = true;
        next.dice_value = None;
        next.must_move = false;
        next.moved_this_roll = false;
        debug!(color = %next.active_color(), "extra roll");
    }

    next
}

/// Pass the turn to the next color in turn order that has not finished.
///
/// When every other color has finished the turn comes back around to the
/// active color.
#[must_use]
pub fn next_turn(state: &GameState) -> GameState {
    let count = state.players.len();
    let mut index = (state.current_player_index + 1) % count;
    let mut attempts = 0;
    while state.has_won(state.players[index]) && attempts < count {
        index = (index + 1) % count;
        attempts += 1;
    }

    let mut next = state.clone();
    next.current_player_index = index;
    next.can_roll = true;
    next.dice_value = None;
    next.must_move = false;
    next.is_rolling = false;
    next.moved_this_roll = false;
    next.turn_number += 1;
    next
}

/// Whether the game has ended under `policy`.
#[must_use]
pub fn is_game_over(state: &GameState, policy: EndPolicy) -> bool {
    let finished = state.winners.len();
    let total = state.players.len();
    match policy {
        EndPolicy::StopAtLastPlayer => finished + 1 >= total,
        EndPolicy::PlayToCompletion => finished >= total,
    }
}
