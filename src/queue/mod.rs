//! Dual-lane help queue engine
//!
//! Two independent lanes ("quick" and "long") hold people waiting for help.
//! Staff confirm (help completed) or cancel (withdrawn) entries; every lane
//! is continuously re-ranked so that people who have been helped less often
//! go first, and reports its average wait.
//!
//! # Architecture
//!
//! ```text
//!  enqueue(lane, raw name)
//!        │
//!        ▼
//! ┌──────────────────┐  validate + locate   ┌──────────────┐ ┌──────────────┐
//! │ IdentityRegistry │ ───────────────────▶ │  Quick Lane  │ │  Long Lane   │
//! └──────────────────┘                      │  + Ledger    │ │  + Ledger    │
//!                                           └──────┬───────┘ └──────┬───────┘
//!                                                  │ rank           │ rank
//!                                                  ▼                ▼
//!                                      PriorityOrderer ─▶ WaitTimeAggregator
//!                                                  │
//!  TimerQueue ◀── DisplayModeController (per lane) │ snapshot
//!      │  tick / settle                            ▼
//!      └──────────────────────────────▶ NotificationManager ─▶ presentation
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use helpqueue::core::time::ManualClock;
//! use helpqueue::queue::{EngineSettings, EnqueueError, HelpDesk, LaneId, MembershipError};
//! use std::sync::Arc;
//!
//! let clock = ManualClock::starting_at(0);
//! let mut desk = HelpDesk::new(Arc::new(clock.clone()), EngineSettings::default());
//!
//! desk.enqueue(LaneId::Quick, "Alice").unwrap();
//! let err = desk.enqueue(LaneId::Long, "Alice").unwrap_err();
//! assert!(matches!(
//!     err,
//!     EnqueueError::Membership(MembershipError::AlreadyInOtherLane { .. })
//! ));
//! ```

pub(crate) mod display_mode;
pub(crate) mod engine;
pub(crate) mod error;
pub(crate) mod identity;
pub(crate) mod lane;
pub(crate) mod ledger;
pub(crate) mod ordering;
pub(crate) mod timer;
pub(crate) mod types;
pub(crate) mod wait_time;

pub mod api;

pub use api::*;

#[cfg(test)]
mod tests;
