//! NotificationManager implementation
//!
//! Fans engine events out to subscribers over unbounded channels. Publishing
//! never blocks, so it is safe to call from inside the engine's single
//! control thread. Subscribers whose receiver has been dropped are pruned on
//! the next publish.

use crate::notifications::error::NotificationError;
use crate::notifications::event::{Event, EventFilter};
use crate::notifications::traits::SubscriberStatistics;
use std::collections::HashMap;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Receiving half handed to subscribers
pub type EventReceiver = UnboundedReceiver<Event>;

struct SubscriberInfo {
    filter: EventFilter,
    source: String,
    sender: UnboundedSender<Event>,
    statistics: SubscriberStatistics,
}

#[derive(Default)]
pub struct NotificationManager {
    subscribers: HashMap<String, SubscriberInfo>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber and return its receiving channel
    ///
    /// Re-using an id replaces the previous subscription.
    pub fn subscribe(
        &mut self,
        subscriber_id: String,
        filter: EventFilter,
        source: String,
    ) -> EventReceiver {
        let (sender, receiver) = unbounded_channel();

        let subscriber_info = SubscriberInfo {
            filter,
            source: source.clone(),
            sender,
            statistics: SubscriberStatistics::new(),
        };

        if let Some(existing) = self.subscribers.insert(subscriber_id.clone(), subscriber_info) {
            log::warn!(
                "Subscriber '{}' replaced existing subscription (source: {} -> {})",
                subscriber_id,
                existing.source,
                source
            );
        }

        receiver
    }

    pub fn unsubscribe(&mut self, subscriber_id: &str) -> Result<(), NotificationError> {
        self.subscribers
            .remove(subscriber_id)
            .map(|_| ())
            .ok_or_else(|| NotificationError::UnknownSubscriber(subscriber_id.to_string()))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn has_subscriber(&self, subscriber_id: &str) -> bool {
        self.subscribers.contains_key(subscriber_id)
    }

    pub fn get_subscriber_statistics(&self, subscriber_id: &str) -> Option<&SubscriberStatistics> {
        self.subscribers.get(subscriber_id).map(|info| &info.statistics)
    }

    /// Deliver `event` to every subscriber whose filter accepts it
    ///
    /// `at` is the engine time recorded in the delivery statistics. Returns
    /// the number of subscribers reached.
    pub fn publish(&mut self, event: Event, at: u64) -> Result<usize, NotificationError> {
        let mut delivered = 0;
        let mut failed_subscribers = Vec::new();

        for (subscriber_id, info) in self.subscribers.iter_mut() {
            if !info.filter.accepts(&event) {
                info.statistics.record_filtered();
                continue;
            }
            match info.sender.send(event.clone()) {
                Ok(()) => {
                    info.statistics.record_delivered(at);
                    delivered += 1;
                }
                Err(_) => failed_subscribers.push(subscriber_id.clone()),
            }
        }

        if failed_subscribers.is_empty() {
            return Ok(delivered);
        }

        for subscriber_id in &failed_subscribers {
            if let Some(info) = self.subscribers.remove(subscriber_id) {
                log::warn!(
                    "Dropping subscriber '{}' (source: {}): receiver closed",
                    subscriber_id,
                    info.source
                );
            }
        }

        Err(NotificationError::PublishFailed {
            event_type: event.type_name().to_string(),
            failed_subscribers,
        })
    }
}
