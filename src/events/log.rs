//! Shared recording listener.

use std::cell::RefCell;
use std::rc::Rc;

use im::Vector;

use super::event::{EventListener, GameEvent};
use crate::core::Color;

/// Records every event it receives.
///
/// Clones share the same buffer, so one handle can be registered with the
/// controller while another is kept for reading.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vector<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vector<GameEvent> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Colors celebrated so far, in order.
    #[must_use]
    pub fn celebrations(&self) -> Vec<Color> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                GameEvent::Celebration { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// Drop every recorded event.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventListener for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push_back(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let log = EventLog::new();
        let mut handle = log.clone();

        handle.on_event(&GameEvent::ExtraRoll { color: Color::Red });
        handle.on_event(&GameEvent::Celebration {
            color: Color::Blue,
            place: 1,
        });

        assert_eq!(log.len(), 2);
        assert_eq!(log.celebrations(), vec![Color::Blue]);

        log.clear();
        assert!(handle.is_empty());
    }
}
