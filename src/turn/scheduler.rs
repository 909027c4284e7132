//! Deferred turn tasks.
//!
//! The controller schedules two kinds of work: revealing a roll after the
//! roll delay, and passing the turn after the settle delay. Tasks run in
//! due-time order; ties run in scheduling order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Work the controller defers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Task {
    /// Reveal the face of the pending roll.
    ResolveRoll,
    /// Pass the turn to the next color.
    AdvanceTurn,
}

/// Time-ordered queue of pending tasks.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<(Duration, u64, Task)>>,
    next_seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run at `due`.
    pub fn schedule(&mut self, due: Duration, task: Task) {
        self.queue.push(Reverse((due, self.next_seq, task)));
        self.next_seq += 1;
    }

    /// Remove and return the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Task> {
        if self.next_due()? > now {
            return None;
        }
        self.queue.pop().map(|Reverse((_, _, task))| task)
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse((due, _, _))| *due)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
