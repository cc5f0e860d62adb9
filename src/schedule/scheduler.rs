//! Deadline-ordered queue of deferred tasks.

use std::collections::VecDeque;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Identifies a scheduled task in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// A payload waiting for its deadline.
#[derive(Clone, Debug)]
pub struct ScheduledTask<T> {
    pub id: TaskId,
    pub due: Instant,
    pub payload: T,
}

/// Tasks ordered by due time.
///
/// Tasks with equal deadlines come out in the order they were scheduled.
/// Nothing runs on its own: the owner pops due tasks and acts on them.
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    queue: VecDeque<ScheduledTask<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `payload` to become due at `due`.
    pub fn schedule(&mut self, due: Instant, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        let pos = self.queue.partition_point(|t| t.due <= due);
        self.queue.insert(pos, ScheduledTask { id, due, payload });
        id
    }

    /// Cancel every queued task and return how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }

    /// Take the earliest task if it is due at `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<ScheduledTask<T>> {
        if self.queue.front()?.due <= now {
            self.queue.pop_front()
        } else {
            None
        }
    }

    /// Deadline of the earliest queued task.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.front().map(|t| t.due)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
