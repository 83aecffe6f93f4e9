//! Public API for the notification system
//!
//! External modules should import from here rather than directly from
//! internal modules.

pub use crate::notifications::error::NotificationError;
pub use crate::notifications::event::{
    Alert, Event, EventFilter, LaneEvent, LaneEventType, RenderEvent,
};
pub use crate::notifications::manager::{EventReceiver, NotificationManager};
pub use crate::notifications::traits::{Presentation, SubscriberStatistics};
