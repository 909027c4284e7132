//! Turn controller and its timing.
//!
//! - `controller`: the state machine owning the game session
//! - `scheduler`: deferred roll-reveal and turn-advance tasks
//! - `clock`: injectable time sources

pub mod clock;
pub mod scheduler;
pub mod controller;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{Scheduler, Task};
pub use controller::TurnController;
