//! Fair ordering of waiting entries
//!
//! People with fewer completed requests in the lane go first; among equals,
//! whoever joined earlier goes first.

use crate::queue::types::QueueEntry;

pub struct PriorityOrderer;

impl PriorityOrderer {
    /// Rank entries by `(prior_count, enqueue_time)` ascending
    ///
    /// Ties on both keys fall back to entry id, which is allocated in
    /// arrival order, so the output is deterministic regardless of the
    /// order entries are supplied in.
    pub fn rank<'a, I>(entries: I) -> Vec<&'a QueueEntry>
    where
        I: IntoIterator<Item = &'a QueueEntry>,
    {
        let mut ranked: Vec<&QueueEntry> = entries.into_iter().collect();
        ranked.sort_by_key(|entry| (entry.prior_count, entry.enqueue_time, entry.id));
        ranked
    }
}
