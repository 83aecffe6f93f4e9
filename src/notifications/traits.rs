//! Traits and bookkeeping for notification subscribers

use crate::notifications::event::{Alert, Event, LaneEvent, RenderEvent};

/// Delivery statistics for a subscriber
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubscriberStatistics {
    messages_delivered: usize,
    messages_filtered: usize,
    last_delivery_at: Option<u64>,
}

impl SubscriberStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages_delivered(&self) -> usize {
        self.messages_delivered
    }

    pub fn messages_filtered(&self) -> usize {
        self.messages_filtered
    }

    /// Engine time of the last delivered event, if any
    pub fn last_delivery_at(&self) -> Option<u64> {
        self.last_delivery_at
    }

    pub(crate) fn record_delivered(&mut self, at: u64) {
        self.messages_delivered += 1;
        self.last_delivery_at = Some(at);
    }

    pub(crate) fn record_filtered(&mut self) {
        self.messages_filtered += 1;
    }
}

/// The presentation collaborator
///
/// Implementors draw lanes and show alerts; the dispatch helper routes each
/// event to the matching hook. Lane lifecycle events are optional.
pub trait Presentation {
    fn render(&mut self, event: &RenderEvent);

    fn alert(&mut self, alert: &Alert);

    fn lane_changed(&mut self, _event: &LaneEvent) {}

    fn dispatch(&mut self, event: &Event) {
        match event {
            Event::Render(e) => self.render(e),
            Event::Alert(a) => self.alert(a),
            Event::Lane(e) => self.lane_changed(e),
        }
    }
}
