//! Cooperative single-shot timers
//!
//! Timers are plain data: scheduling records a task against a due time and
//! nothing runs until the owner asks for due work with [`TimerQueue::pop_due`].
//! The owning event loop decides when to poll, so no thread ever sleeps on
//! the control path and cancellation cannot race with firing.

use std::collections::{BTreeMap, HashMap};

/// Handle returned by [`TimerQueue::schedule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Ordered set of pending tasks keyed by due time
#[derive(Debug)]
pub struct TimerQueue<T> {
    next_id: u64,
    // (due, id) keeps same-second tasks in scheduling order
    pending: BTreeMap<(u64, TimerId), T>,
    due_by_id: HashMap<TimerId, u64>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: BTreeMap::new(),
            due_by_id: HashMap::new(),
        }
    }

    /// Register `task` to become due at epoch second `due`
    pub fn schedule(&mut self, due: u64, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((due, id), task);
        self.due_by_id.insert(id, due);
        log::trace!("timer {:?} scheduled for {}", id, due);
        id
    }

    /// Drop a pending timer; returns false if it already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_by_id.remove(&id) {
            Some(due) => {
                self.pending.remove(&(due, id));
                log::trace!("timer {:?} cancelled", id);
                true
            }
            None => false,
        }
    }

    /// Take the earliest task whose due time is at or before `now`
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, T)> {
        let (&(due, id), _) = self.pending.first_key_value()?;
        if due > now {
            return None;
        }
        self.due_by_id.remove(&id);
        self.pending.remove(&(due, id)).map(|task| (id, task))
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_by_id.contains_key(&id)
    }

    /// Earliest due time among pending tasks
    pub fn next_due(&self) -> Option<u64> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending tasks in firing order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &T)> {
        self.pending.iter().map(|((due, _), task)| (*due, task))
    }
}
