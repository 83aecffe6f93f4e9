//! Wait-time aggregation and wording
//!
//! Precise mode reports raw seconds. Approximate mode buckets seconds into
//! phrases:
//!
//! | elapsed            | phrase            |
//! |--------------------|-------------------|
//! | < 60 s             | "a few seconds"   |
//! | 60 s .. 120 s      | "a minute"        |
//! | 120 s .. 1 h       | "N minutes"       |
//! | 1 h .. 2 h         | "1 hour"          |
//! | >= 2 h             | "N hours"         |

use crate::queue::types::{DisplayMode, QueueEntry};

/// Text shown when a lane has nobody waiting
pub const EMPTY_LANE_TEXT: &str = "No students in queue.";

pub struct WaitTimeAggregator;

impl WaitTimeAggregator {
    /// Floor of the mean elapsed seconds, or `None` for an empty lane
    pub fn average<'a, I>(entries: I, now: u64) -> Option<u64>
    where
        I: IntoIterator<Item = &'a QueueEntry>,
    {
        let (sum, count) = entries
            .into_iter()
            .fold((0u64, 0u64), |(sum, count), entry| {
                (sum + entry.elapsed(now), count + 1)
            });
        sum.checked_div(count)
    }

    /// The lane summary sentence for the given mode
    pub fn average_text<'a, I>(entries: I, now: u64, mode: DisplayMode) -> String
    where
        I: IntoIterator<Item = &'a QueueEntry>,
    {
        let entries: Vec<&QueueEntry> = entries.into_iter().collect();
        match Self::average(entries.iter().copied(), now) {
            Some(average) => summary_sentence(average, mode, entries.len()),
            None => EMPTY_LANE_TEXT.to_string(),
        }
    }

    /// Wait text for a single row, e.g. "12 seconds ago" or "a minute ago"
    pub fn row_text(entry: &QueueEntry, now: u64, mode: DisplayMode) -> String {
        format!("{} ago", format_duration(entry.elapsed(now), mode))
    }
}

/// Render a number of seconds in the given mode
pub fn format_duration(secs: u64, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Precise => precise_seconds(secs),
        DisplayMode::Approximate => approximate(secs),
    }
}

fn precise_seconds(secs: u64) -> String {
    if secs <= 1 {
        format!("{} second", secs)
    } else {
        format!("{} seconds", secs)
    }
}

/// Bucket seconds into a human phrase
pub fn approximate(secs: u64) -> String {
    match secs {
        0..=59 => "a few seconds".to_string(),
        60..=119 => "a minute".to_string(),
        120..=3599 => format!("{} minutes", secs / 60),
        3600..=7199 => "1 hour".to_string(),
        _ => format!("{} hours", secs / 3600),
    }
}

fn summary_sentence(average: u64, mode: DisplayMode, count: usize) -> String {
    if count == 1 {
        return format!(
            "An average wait time of {} for 1 student.",
            format_duration(average, mode)
        );
    }
    // the multi-student sentence always uses the plural unit
    let duration = match mode {
        DisplayMode::Precise => format!("{} seconds", average),
        DisplayMode::Approximate => approximate(average),
    };
    format!(
        "An average wait time of about {} for {} students",
        duration, count
    )
}
