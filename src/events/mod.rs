//! Outward notifications for the presentation layer.
//!
//! The turn controller fans every `GameEvent` out to registered
//! `EventListener`s. `GameEvent::Celebration` is the win hook: it fires
//! exactly once per color, when that color's last piece finishes.

pub mod event;
pub mod log;

pub use event::{EventListener, GameEvent};
pub use log::EventLog;
