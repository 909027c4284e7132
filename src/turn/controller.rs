//! The turn controller: owner of the single game session.
//!
//! The controller reacts to two intents (roll, select a piece) and to its
//! own deferred tasks (roll reveal, turn advance). Each reaction replaces
//! the state wholesale with the result of a pure rules function, then
//! notifies listeners.
//!
//! ## Timing
//!
//! Deferred tasks are due `roll_delay` / `settle_delay` after the action
//! that scheduled them. They run from `update()`, which every intent also
//! calls first. With zero delays everything resolves inside the triggering
//! call, so a headless caller never has to poll.
//!
//! ```
//! use ludo_engine::core::{GameConfig, LoadedDice, TurnPhase};
//! use ludo_engine::turn::{ManualClock, TurnController};
//!
//! let mut game = TurnController::with_parts(
//!     GameConfig::headless(),
//!     LoadedDice::new([6]),
//!     ManualClock::new(),
//! );
//!
//! game.roll().unwrap();
//! assert_eq!(game.phase(), TurnPhase::AwaitingPieceSelection);
//!
//! let piece = game.movable_pieces()[0];
//! game.select_piece(piece).unwrap();
//! assert_eq!(game.phase(), TurnPhase::AwaitingRoll); // rolled a six
//! ```

use smallvec::SmallVec;
use tracing::{debug, info, instrument, warn};

use super::clock::{Clock, SystemClock};
use super::scheduler::{Scheduler, Task};
use crate::core::{DieRoller, GameConfig, GameRng, GameState, Intent, PieceId, TurnPhase};
use crate::events::{EventListener, GameEvent};
use crate::rules::{self, IntentError, Standings};

/// Owns the game state, the die, the clock and pending tasks.
pub struct TurnController<D: DieRoller = GameRng, C: Clock = SystemClock> {
    config: GameConfig,
    state: GameState,
    dice: D,
    clock: C,
    scheduler: Scheduler,
    listeners: Vec<Box<dyn EventListener>>,
}

impl TurnController<GameRng, SystemClock> {
    /// Controller with a seeded RNG die and wall-clock timing.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let dice = GameRng::new(config.seed);
        Self::with_parts(config, dice, SystemClock::new())
    }
}

impl<D: DieRoller, C: Clock> TurnController<D, C> {
    /// Controller with an explicit die source and clock.
    pub fn with_parts(config: GameConfig, dice: D, clock: C) -> Self {
        Self {
            config,
            state: GameState::new(),
            dice,
            clock,
            scheduler: Scheduler::new(),
            listeners: Vec::new(),
        }
    }

    /// Replace the state, dropping any pending task.
    ///
    /// Used to start from an arranged position.
    #[must_use]
    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self.scheduler.clear();
        self
    }

    /// Register a listener for game events.
    pub fn subscribe(&mut self, listener: impl EventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.state.phase()
    }

    /// Pieces the active color may move right now.
    ///
    /// Recomputed from the current state on every call; empty unless a
    /// move is owed.
    #[must_use]
    pub fn movable_pieces(&self) -> SmallVec<[PieceId; 4]> {
        match self.state.dice_value {
            Some(die) if self.state.must_move => {
                rules::movable_pieces(self.state.pieces.iter(), self.state.active_color(), die)
            }
            _ => SmallVec::new(),
        }
    }

    #[must_use]
    pub fn standings(&self) -> Standings {
        Standings::of(&self.state)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// Due time of the next pending task, on this controller's clock.
    #[must_use]
    pub fn next_deadline(&self) -> Option<std::time::Duration> {
        self.scheduler.next_due()
    }

    // === Intents ===

    /// Dispatch an intent.
    pub fn apply(&mut self, intent: Intent) -> Result<(), IntentError> {
        match intent {
            Intent::Roll => self.roll(),
            Intent::SelectPiece(piece) => self.select_piece(piece),
        }
    }

    /// Roll the die.
    ///
    /// Rejected unless rolling is permitted and no roll is resolving.
    #[instrument(skip(self), fields(color = %self.state.active_color()))]
    pub fn roll(&mut self) -> Result<(), IntentError> {
        self.update();

        let next = rules::begin_roll(&self.state).map_err(|err| {
            debug!(%err, "roll rejected");
            err
        })?;
        self.state = next;
        self.schedule_after(self.config.roll_delay, Task::ResolveRoll);

        self.update();
        Ok(())
    }

    /// Move a piece by the current die value.
    ///
    /// Rejected unless a move is owed and the piece is one of the active
    /// color's movable pieces.
    #[instrument(skip(self), fields(color = %self.state.active_color()))]
    pub fn select_piece(&mut self, piece: PieceId) -> Result<(), IntentError> {
        self.update();

        let result = self.move_piece(piece);
        if let Err(err) = &result {
            debug!(%err, "move rejected");
        }

        self.update();
        result
    }

    /// Run every task that has come due.
    ///
    /// Returns the number of tasks run.
    pub fn update(&mut self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.scheduler.pop_due(self.clock.now()) {
            self.run(task);
            ran += 1;
        }
        ran
    }

    /// Start a fresh game, dropping pending tasks.
    pub fn restart(&mut self) {
        self.state = GameState::new();
        self.scheduler.clear();
        info!("game restarted");
    }

    // === Internals ===

    fn move_piece(&mut self, piece: PieceId) -> Result<(), IntentError> {
        if self.state.game_over {
            return Err(IntentError::GameOver);
        }
        // The die always comes from the state being moved on.
        let die = self.state.dice_value.ok_or(IntentError::NoMoveOwed)?;
        let (moved, outcome) = rules::try_apply_move(&self.state, piece, die)?;
        let mover = piece.color();

        self.state = rules::settle_move(&moved, &outcome, self.config.end_policy);

        self.emit(GameEvent::PieceMoved(outcome.record));
        if let Some(cell) = crate::board::ring_index_of(mover, outcome.record.to) {
            for &victim in &outcome.captured {
                self.emit(GameEvent::PieceCaptured {
                    piece: victim,
                    by: mover,
                    cell,
                });
            }
        }
        if outcome.won {
            let place = self.state.winners.len();
            self.emit(GameEvent::Celebration {
                color: mover,
                place,
            });
        }

        if self.state.game_over {
            let ranking = self.standings().ranking();
            info!(?ranking, "game over");
            self.emit(GameEvent::GameOver { ranking });
        } else if self.state.can_roll {
            self.emit(GameEvent::ExtraRoll { color: mover });
        } else {
            self.schedule_after(self.config.settle_delay, Task::AdvanceTurn);
        }

        Ok(())
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::ResolveRoll => {
                if let Err(err) = self.resolve_roll() {
                    warn!(%err, "roll left unresolved");
                }
            }
            Task::AdvanceTurn => self.advance_turn(),
        }
    }

    fn resolve_roll(&mut self) -> Result<(), IntentError> {
        if !self.state.is_rolling {
            return Ok(());
        }

        let face = self.dice.roll();
        let color = self.state.active_color();
        self.state = rules::resolve_roll(&self.state, face)?;
        self.emit(GameEvent::DiceRolled { color, value: face });

        if !self.state.must_move {
            debug!(%color, face, "no legal move");
            self.emit(GameEvent::TurnSkipped { color, value: face });
            self.schedule_after(self.config.settle_delay, Task::AdvanceTurn);
        }
        Ok(())
    }

    fn advance_turn(&mut self) {
        if !self.state.awaiting_turn_advance() {
            return;
        }

        let from = self.state.active_color();
        self.state = rules::next_turn(&self.state);
        let to = self.state.active_color();
        debug!(%from, %to, turn = self.state.turn_number, "turn passed");
        self.emit(GameEvent::TurnPassed { from, to });
    }

    fn schedule_after(&mut self, delay: std::time::Duration, task: Task) {
        let due = self.clock.now() + delay;
        self.scheduler.schedule(due, task);
    }

    fn emit(&mut self, event: GameEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}
