//! Type definitions for the help queue
//!
//! Lane identifiers, entries, display modes and the ranked snapshot handed
//! to the presentation layer.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// One of the two independent help lanes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumIter,
    EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LaneId {
    Quick,
    Long,
}

impl LaneId {
    /// The opposite lane; membership is exclusive across the pair
    pub fn other(self) -> LaneId {
        match self {
            LaneId::Quick => LaneId::Long,
            LaneId::Long => LaneId::Quick,
        }
    }

    /// Heading shown above the lane
    pub fn title(self) -> &'static str {
        match self {
            LaneId::Quick => "Quick Questions",
            LaneId::Long => "Long Questions",
        }
    }

    /// Expected tutor time for requests in this lane
    pub fn subtitle(self) -> &'static str {
        match self {
            LaneId::Quick => "< 2 mins with a tutor",
            LaneId::Long => "> 2 mins with a tutor",
        }
    }

    /// Typical requests that belong in this lane
    pub fn examples(self) -> &'static [&'static str] {
        match self {
            LaneId::Quick => &[
                "Syntax errors",
                "Interpreting error output",
                "Assignment interpretation",
                "Assignment submission issues",
            ],
            LaneId::Long => &[
                "Open ended questions",
                "How to start a problem",
                "How to improve code",
                "Debugging",
                "Assignment help",
            ],
        }
    }

    /// Phrase used in alerts that refer to this lane
    pub fn queue_label(self) -> &'static str {
        match self {
            LaneId::Quick => "quick question queue",
            LaneId::Long => "long question queue",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            LaneId::Quick => 0,
            LaneId::Long => 1,
        }
    }
}

/// Handle for a live entry, unique across both lanes for the engine's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A person waiting in a lane
///
/// `prior_count` is fixed when the entry is created and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueEntry {
    pub id: EntryId,
    pub name: String,
    pub prior_count: usize,
    /// Epoch seconds at enqueue
    pub enqueue_time: u64,
}

impl QueueEntry {
    /// Seconds waited so far; clamped at zero if the clock reads earlier
    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.enqueue_time)
    }
}

/// How wait times are rendered for a lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum DisplayMode {
    /// Bucketed, human readable ("a few seconds", "3 minutes")
    #[default]
    Approximate,
    /// Exact seconds
    Precise,
}

impl DisplayMode {
    pub fn toggled(self) -> DisplayMode {
        match self {
            DisplayMode::Approximate => DisplayMode::Precise,
            DisplayMode::Precise => DisplayMode::Approximate,
        }
    }

    /// Label of the mode switch in the front end
    pub fn switch_label(self) -> &'static str {
        match self {
            DisplayMode::Approximate => "Precise Timing Off",
            DisplayMode::Precise => "Precise Timing On",
        }
    }
}

/// One row of a lane's ranked view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRow {
    /// 1-based rank position
    pub display_index: usize,
    pub entry_id: EntryId,
    pub name: String,
    pub prior_count: usize,
    pub formatted_wait_time: String,
}

/// Everything the presentation layer needs to draw one lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneSnapshot {
    pub lane: LaneId,
    pub mode: DisplayMode,
    pub rows: Vec<RankedRow>,
    pub average_text: String,
    /// Epoch seconds at which the snapshot was computed
    pub taken_at: u64,
}

/// Why a lane was re-rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RenderCause {
    /// Periodic refresh from the live chain
    Tick,
    /// Last render of a chain whose mode was toggled away
    StaleTick,
    /// Forced refresh once the settle delay after a toggle has passed
    Settle,
    /// A new entry joined the lane
    NewEntry,
    /// An entry was cancelled or confirmed
    Removal,
}

/// Engine timing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Seconds between periodic refreshes
    pub refresh_period: u64,
    /// Seconds between a mode toggle and the first refresh in the new mode
    pub settle_delay: u64,
}

/// Fixed refresh period used by the help desk
pub const REFRESH_PERIOD_SECS: u64 = 3;

/// Longest accepted refresh period or settle delay (one day)
pub const MAX_PERIOD_SECS: u64 = 86_400;

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            refresh_period: REFRESH_PERIOD_SECS,
            settle_delay: REFRESH_PERIOD_SECS,
        }
    }
}
