//! Public API for the help queue engine
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Engine facade
pub use crate::queue::engine::HelpDesk;

// Building blocks, usable on their own
pub use crate::queue::display_mode::{DisplayModeController, LaneTask, RenderRequest};
pub use crate::queue::identity::{IdentityRegistry, Name, MAX_NAME_LENGTH};
pub use crate::queue::lane::Lane;
pub use crate::queue::ledger::{HistoryLedger, HistoryRecord};
pub use crate::queue::ordering::PriorityOrderer;
pub use crate::queue::timer::{TimerId, TimerQueue};
pub use crate::queue::wait_time::{approximate, format_duration, WaitTimeAggregator, EMPTY_LANE_TEXT};

// Error handling
pub use crate::queue::error::{EnqueueError, EnqueueResult, MembershipError, ValidationError};

// Type definitions
pub use crate::queue::types::{
    DisplayMode, EngineSettings, EntryId, LaneId, LaneSnapshot, QueueEntry, RankedRow,
    RenderCause, MAX_PERIOD_SECS, REFRESH_PERIOD_SECS,
};
