//! Two-lane help desk queue
//!
//! Requesters join a quick or a long lane by name; staff confirm or cancel
//! entries. Each lane ranks waiting people by how often they have already
//! been helped, then by arrival, and refreshes its wait-time view on a
//! periodic timer that can switch between precise and approximate timing.

pub mod app;
pub mod core;
pub mod notifications;
pub mod queue;
