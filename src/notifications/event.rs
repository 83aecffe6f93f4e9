//! Event types for the notification system

use crate::core::error_handling::ContextualError;
use crate::queue::error::EnqueueError;
use crate::queue::types::{DisplayMode, EntryId, LaneId, LaneSnapshot, RenderCause};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaneEventType {
    EntryAdded,
    EntryCancelled,
    EntryConfirmed,
    ModeToggled,
}

/// A change in lane membership or display mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaneEvent {
    pub event_type: LaneEventType,
    pub lane: LaneId,
    /// Engine clock reading, epoch seconds
    pub at: u64,
    pub entry_id: Option<EntryId>,
    pub name: Option<String>,
    pub mode: Option<DisplayMode>,
}

impl LaneEvent {
    pub fn new(event_type: LaneEventType, lane: LaneId, at: u64) -> Self {
        Self {
            event_type,
            lane,
            at,
            entry_id: None,
            name: None,
            mode: None,
        }
    }

    pub fn with_entry(
        event_type: LaneEventType,
        lane: LaneId,
        at: u64,
        entry_id: EntryId,
        name: String,
    ) -> Self {
        Self {
            entry_id: Some(entry_id),
            name: Some(name),
            ..Self::new(event_type, lane, at)
        }
    }

    pub fn with_mode(event_type: LaneEventType, lane: LaneId, at: u64, mode: DisplayMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::new(event_type, lane, at)
        }
    }
}

/// A freshly computed lane view, ready to draw
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderEvent {
    pub cause: RenderCause,
    pub snapshot: LaneSnapshot,
}

/// A refused request, worded for the person at the desk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub lane: LaneId,
    /// Error name, e.g. "TooLong" or "AlreadyInOtherLane"
    pub kind: &'static str,
    pub title: &'static str,
    pub message: String,
    /// Whether the requester is sent back to the name prompt
    pub reprompt: bool,
}

impl Alert {
    pub fn from_enqueue_error(lane: LaneId, error: &EnqueueError) -> Self {
        let message = error
            .user_message()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        Self {
            lane,
            kind: error.kind(),
            title: error.title(),
            message,
            reprompt: error.should_reprompt(),
        }
    }
}

/// Unified event enum that encompasses all event types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Lane(LaneEvent),
    Render(RenderEvent),
    Alert(Alert),
}

impl Event {
    pub fn type_name(&self) -> &'static str {
        match self {
            Event::Lane(_) => "lane",
            Event::Render(_) => "render",
            Event::Alert(_) => "alert",
        }
    }

    pub fn lane(&self) -> LaneId {
        match self {
            Event::Lane(e) => e.lane,
            Event::Render(e) => e.snapshot.lane,
            Event::Alert(e) => e.lane,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventFilter {
    LaneOnly,
    RenderOnly,
    AlertOnly,
    RenderAndAlert,
    All,
}

impl EventFilter {
    /// Check if this filter accepts the given event
    pub fn accepts(&self, event: &Event) -> bool {
        matches!(
            (self, event),
            (EventFilter::LaneOnly, Event::Lane(_))
                | (EventFilter::RenderOnly, Event::Render(_))
                | (EventFilter::AlertOnly, Event::Alert(_))
                | (EventFilter::RenderAndAlert, Event::Render(_))
                | (EventFilter::RenderAndAlert, Event::Alert(_))
                | (EventFilter::All, _)
        )
    }
}
