//! Wait-time averages and wording

use super::helpers::{desk, entry};
use crate::queue::api::*;

#[test]
fn test_average_is_floor_of_mean() {
    let entries = [entry(1, "A", 0, 90), entry(2, "B", 0, 80), entry(3, "C", 0, 70)];
    // elapsed {10, 20, 30}
    assert_eq!(WaitTimeAggregator::average(&entries, 100), Some(20));

    let entries = [entry(1, "A", 0, 99), entry(2, "B", 0, 98)];
    // elapsed {1, 2} -> 1.5 floors to 1
    assert_eq!(WaitTimeAggregator::average(&entries, 100), Some(1));
}

#[test]
fn test_average_of_empty_lane_is_none() {
    let entries: [QueueEntry; 0] = [];
    assert_eq!(WaitTimeAggregator::average(&entries, 100), None);
    assert_eq!(
        WaitTimeAggregator::average_text(&entries, 100, DisplayMode::Precise),
        "No students in queue."
    );
    assert_eq!(
        WaitTimeAggregator::average_text(&entries, 100, DisplayMode::Approximate),
        EMPTY_LANE_TEXT
    );
}

#[test]
fn test_future_enqueue_time_counts_as_zero() {
    let entries = [entry(1, "A", 0, 150)];
    assert_eq!(WaitTimeAggregator::average(&entries, 100), Some(0));
}

#[test]
fn test_approximate_buckets() {
    let cases = [
        (0, "a few seconds"),
        (59, "a few seconds"),
        (60, "a minute"),
        (119, "a minute"),
        (120, "2 minutes"),
        (179, "2 minutes"),
        (3599, "59 minutes"),
        (3600, "1 hour"),
        (7199, "1 hour"),
        (7200, "2 hours"),
        (10_799, "2 hours"),
        (36_000, "10 hours"),
    ];
    for (secs, expected) in cases {
        assert_eq!(approximate(secs), expected, "for {} seconds", secs);
    }
}

#[test]
fn test_precise_units() {
    assert_eq!(format_duration(0, DisplayMode::Precise), "0 second");
    assert_eq!(format_duration(1, DisplayMode::Precise), "1 second");
    assert_eq!(format_duration(2, DisplayMode::Precise), "2 seconds");
    assert_eq!(format_duration(125, DisplayMode::Precise), "125 seconds");
}

#[test]
fn test_summary_sentences() {
    let one = [entry(1, "A", 0, 88)];
    assert_eq!(
        WaitTimeAggregator::average_text(&one, 100, DisplayMode::Precise),
        "An average wait time of 12 seconds for 1 student."
    );
    assert_eq!(
        WaitTimeAggregator::average_text(&one, 100, DisplayMode::Approximate),
        "An average wait time of a few seconds for 1 student."
    );
    assert_eq!(
        WaitTimeAggregator::average_text(&one, 88, DisplayMode::Precise),
        "An average wait time of 0 second for 1 student."
    );

    let three = [
        entry(1, "A", 0, 0),
        entry(2, "B", 0, 100),
        entry(3, "C", 0, 200),
    ];
    // elapsed {400, 300, 200}
    assert_eq!(
        WaitTimeAggregator::average_text(&three, 400, DisplayMode::Precise),
        "An average wait time of about 300 seconds for 3 students"
    );
    assert_eq!(
        WaitTimeAggregator::average_text(&three, 400, DisplayMode::Approximate),
        "An average wait time of about 5 minutes for 3 students"
    );
}

#[test]
fn test_several_students_always_plural_seconds() {
    let two = [entry(1, "A", 0, 100), entry(2, "B", 0, 100)];
    assert_eq!(
        WaitTimeAggregator::average_text(&two, 100, DisplayMode::Precise),
        "An average wait time of about 0 seconds for 2 students"
    );
    // elapsed {2, 1} floors to 1
    let staggered = [entry(1, "A", 0, 98), entry(2, "B", 0, 99)];
    assert_eq!(
        WaitTimeAggregator::average_text(&staggered, 100, DisplayMode::Precise),
        "An average wait time of about 1 seconds for 2 students"
    );
    assert_eq!(
        WaitTimeAggregator::average_text(&staggered, 100, DisplayMode::Approximate),
        "An average wait time of about a few seconds for 2 students"
    );
}

#[test]
fn test_row_text() {
    let e = entry(1, "A", 0, 100);
    assert_eq!(
        WaitTimeAggregator::row_text(&e, 100, DisplayMode::Precise),
        "0 second ago"
    );
    assert_eq!(
        WaitTimeAggregator::row_text(&e, 145, DisplayMode::Precise),
        "45 seconds ago"
    );
    assert_eq!(
        WaitTimeAggregator::row_text(&e, 145, DisplayMode::Approximate),
        "a few seconds ago"
    );
    assert_eq!(
        WaitTimeAggregator::row_text(&e, 100 + 3 * 3600, DisplayMode::Approximate),
        "3 hours ago"
    );
}

#[test]
fn test_engine_average_text_tracks_clock_and_mode() {
    let (mut desk, clock) = desk();
    assert_eq!(desk.average_wait_text(LaneId::Long), "No students in queue.");

    desk.enqueue(LaneId::Long, "Ann").unwrap();
    clock.advance(10);
    desk.enqueue(LaneId::Long, "Ben").unwrap();
    clock.advance(10);
    desk.enqueue(LaneId::Long, "Cat").unwrap();
    clock.advance(10);
    // elapsed {30, 20, 10}
    assert_eq!(
        desk.average_wait_text(LaneId::Long),
        "An average wait time of about a few seconds for 3 students"
    );

    desk.toggle_display_mode(LaneId::Long);
    assert_eq!(desk.current_mode(LaneId::Long), DisplayMode::Precise);
    assert_eq!(
        desk.average_wait_text(LaneId::Long),
        "An average wait time of about 20 seconds for 3 students"
    );

    let rows = desk.ranked_view(LaneId::Long);
    let waits: Vec<&str> = rows.iter().map(|r| r.formatted_wait_time.as_str()).collect();
    assert_eq!(waits, vec!["30 seconds ago", "20 seconds ago", "10 seconds ago"]);
}
