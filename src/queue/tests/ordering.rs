//! Priority ordering

use super::helpers::{desk, entry};
use crate::queue::api::*;

fn names(ranked: &[&QueueEntry]) -> Vec<String> {
    ranked.iter().map(|e| e.name.clone()).collect()
}

#[test]
fn test_prior_count_dominates_arrival() {
    let bob = entry(1, "Bob", 2, 0);
    let alice = entry(2, "Alice", 0, 1);

    let ranked = PriorityOrderer::rank([&bob, &alice]);

    assert_eq!(names(&ranked), vec!["Alice", "Bob"]);
}

#[test]
fn test_fifo_within_equal_prior_count() {
    let late = entry(1, "Late", 1, 5);
    let early = entry(2, "Early", 1, 2);

    let ranked = PriorityOrderer::rank([&late, &early]);

    assert_eq!(names(&ranked), vec!["Early", "Late"]);
}

#[test]
fn test_matches_two_pass_stable_sort() {
    let entries = vec![
        entry(1, "A", 1, 30),
        entry(2, "B", 0, 40),
        entry(3, "C", 2, 10),
        entry(4, "D", 0, 20),
        entry(5, "E", 1, 20),
        entry(6, "F", 0, 40),
    ];

    // Sort by arrival first, then stably by prior count
    let mut expected: Vec<&QueueEntry> = entries.iter().collect();
    expected.sort_by_key(|e| e.enqueue_time);
    expected.sort_by_key(|e| e.prior_count);

    let ranked = PriorityOrderer::rank(entries.iter().rev());

    assert_eq!(names(&ranked), names(&expected));
    assert_eq!(names(&ranked), vec!["D", "B", "F", "E", "A", "C"]);
}

#[test]
fn test_empty_input() {
    let ranked = PriorityOrderer::rank(std::iter::empty());
    assert!(ranked.is_empty());
}

#[test]
fn test_ranked_view_through_engine() {
    let (mut desk, clock) = desk();

    // Give Bob two completed requests first
    for _ in 0..2 {
        let bob = desk.enqueue(LaneId::Quick, "Bob").unwrap();
        desk.confirm(LaneId::Quick, bob);
    }

    desk.enqueue(LaneId::Quick, "Bob").unwrap();
    clock.advance(1);
    desk.enqueue(LaneId::Quick, "Alice").unwrap();

    let view = desk.ranked_view(LaneId::Quick);
    assert_eq!(view.len(), 2);
    assert_eq!((view[0].display_index, view[0].name.as_str()), (1, "Alice"));
    assert_eq!(view[0].prior_count, 0);
    assert_eq!((view[1].display_index, view[1].name.as_str()), (2, "Bob"));
    assert_eq!(view[1].prior_count, 2);

    assert_eq!(desk.entry_at(LaneId::Quick, 1), Some(view[0].entry_id));
    assert_eq!(desk.entry_at(LaneId::Quick, 2), Some(view[1].entry_id));
    assert_eq!(desk.entry_at(LaneId::Quick, 0), None);
    assert_eq!(desk.entry_at(LaneId::Quick, 3), None);
}
