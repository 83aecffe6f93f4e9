//! HelpDesk - the dual-lane engine
//!
//! Owns both lanes, their display-mode controllers, the shared timer queue
//! and the clock. Every mutation goes through `&mut self`, so the engine
//! is meant to live on one control thread and be driven by calling
//! [`HelpDesk::run_due`] from an event loop.

use crate::core::error_handling::log_error_with_context;
use crate::core::time::Clock;
use crate::notifications::api::{
    Alert, Event, EventFilter, EventReceiver, LaneEvent, LaneEventType, NotificationManager,
    RenderEvent,
};
use crate::queue::display_mode::{DisplayModeController, LaneTask};
use crate::queue::error::EnqueueResult;
use crate::queue::identity::IdentityRegistry;
use crate::queue::lane::Lane;
use crate::queue::ordering::PriorityOrderer;
use crate::queue::timer::TimerQueue;
use crate::queue::types::{
    DisplayMode, EngineSettings, EntryId, LaneId, LaneSnapshot, QueueEntry, RankedRow,
    RenderCause,
};
use crate::queue::wait_time::WaitTimeAggregator;
use std::sync::Arc;

/// The help desk engine
///
/// # Example
///
/// ```rust
/// use helpqueue::core::time::ManualClock;
/// use helpqueue::queue::{EngineSettings, HelpDesk, LaneId};
/// use std::sync::Arc;
///
/// let clock = ManualClock::starting_at(1_000);
/// let mut desk = HelpDesk::new(Arc::new(clock.clone()), EngineSettings::default());
///
/// let alice = desk.enqueue(LaneId::Quick, "Alice").unwrap();
/// clock.advance(30);
/// assert_eq!(desk.ranked_view(LaneId::Quick)[0].name, "Alice");
///
/// desk.confirm(LaneId::Quick, alice);
/// assert_eq!(desk.average_wait_text(LaneId::Quick), "No students in queue.");
/// ```
pub struct HelpDesk {
    lanes: [Lane; 2],
    controllers: [DisplayModeController; 2],
    timers: TimerQueue<LaneTask>,
    clock: Arc<dyn Clock>,
    notifications: NotificationManager,
    next_entry_id: u64,
    settings: EngineSettings,
}

impl HelpDesk {
    /// Create the engine and start both lanes' periodic refresh chains
    pub fn new(clock: Arc<dyn Clock>, settings: EngineSettings) -> Self {
        let mut desk = Self {
            lanes: [Lane::new(LaneId::Quick), Lane::new(LaneId::Long)],
            controllers: [
                DisplayModeController::new(LaneId::Quick, settings),
                DisplayModeController::new(LaneId::Long, settings),
            ],
            timers: TimerQueue::new(),
            clock,
            notifications: NotificationManager::new(),
            next_entry_id: 1,
            settings,
        };

        let now = desk.clock.now();
        for controller in desk.controllers.iter_mut() {
            controller.start(&mut desk.timers, now);
        }
        log::debug!(
            "help desk started (refresh every {}s, settle {}s)",
            settings.refresh_period,
            settings.settle_delay
        );
        desk
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    pub fn now(&self) -> u64 {
        self.clock.now()
    }

    /// Register a presentation subscriber
    pub fn subscribe(&mut self, subscriber_id: &str, filter: EventFilter) -> EventReceiver {
        self.notifications
            .subscribe(subscriber_id.to_string(), filter, "help-desk".to_string())
    }

    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    /// Add a requester to `lane`
    ///
    /// Refusals are returned to the caller and also published as an alert.
    pub fn enqueue(&mut self, lane: LaneId, raw_name: &str) -> EnqueueResult<EntryId> {
        let name = match IdentityRegistry::check_enqueue(self.lanes.iter(), lane, raw_name) {
            Ok(name) => name,
            Err(error) => {
                log::debug!("{} lane refused {:?}: {}", lane, raw_name, error);
                self.publish(Event::Alert(Alert::from_enqueue_error(lane, &error)));
                return Err(error);
            }
        };

        let now = self.clock.now();
        let entry_id = EntryId(self.next_entry_id);
        self.next_entry_id += 1;

        let display_name = name.to_string();
        let entry_id = self.lane_mut(lane).enqueue(entry_id, name, now);
        log::debug!(
            "{} joined the {} lane as {} (prior count {})",
            display_name,
            lane,
            entry_id,
            self.lane(lane).ledger().count_for(&display_name)
        );

        self.publish(Event::Lane(LaneEvent::with_entry(
            LaneEventType::EntryAdded,
            lane,
            now,
            entry_id,
            display_name,
        )));
        self.render(lane, self.current_mode(lane), RenderCause::NewEntry);
        Ok(entry_id)
    }

    /// Withdraw an entry; a no-op if it is already gone
    pub fn cancel(&mut self, lane: LaneId, entry_id: EntryId) {
        match self.lane_mut(lane).cancel(entry_id) {
            Some(entry) => {
                log::debug!("{} cancelled from the {} lane", entry.name, lane);
                self.after_removal(lane, entry, LaneEventType::EntryCancelled);
            }
            None => log::debug!("cancel of {} in the {} lane ignored", entry_id, lane),
        }
    }

    /// Complete an entry and record it in the lane's history; a no-op if it is already gone
    pub fn confirm(&mut self, lane: LaneId, entry_id: EntryId) {
        match self.lane_mut(lane).confirm(entry_id) {
            Some(entry) => {
                log::debug!("{} confirmed in the {} lane", entry.name, lane);
                self.after_removal(lane, entry, LaneEventType::EntryConfirmed);
            }
            None => log::debug!("confirm of {} in the {} lane ignored", entry_id, lane),
        }
    }

    fn after_removal(&mut self, lane: LaneId, entry: QueueEntry, event_type: LaneEventType) {
        let now = self.clock.now();
        self.publish(Event::Lane(LaneEvent::with_entry(
            event_type, lane, now, entry.id, entry.name,
        )));
        self.render(lane, self.current_mode(lane), RenderCause::Removal);
    }

    /// Ranked rows for `lane` in its current mode
    pub fn ranked_view(&self, lane: LaneId) -> Vec<RankedRow> {
        self.snapshot(lane).rows
    }

    /// Lane summary sentence in its current mode
    pub fn average_wait_text(&self, lane: LaneId) -> String {
        WaitTimeAggregator::average_text(
            self.lane(lane).entries(),
            self.clock.now(),
            self.current_mode(lane),
        )
    }

    pub fn snapshot(&self, lane: LaneId) -> LaneSnapshot {
        self.snapshot_in(lane, self.current_mode(lane), self.clock.now())
    }

    fn snapshot_in(&self, lane: LaneId, mode: DisplayMode, now: u64) -> LaneSnapshot {
        let entries = self.lane(lane).entries();
        let ranked = PriorityOrderer::rank(entries);

        let rows = ranked
            .iter()
            .enumerate()
            .map(|(position, entry)| RankedRow {
                display_index: position + 1,
                entry_id: entry.id,
                name: entry.name.clone(),
                prior_count: entry.prior_count,
                formatted_wait_time: WaitTimeAggregator::row_text(entry, now, mode),
            })
            .collect();

        LaneSnapshot {
            lane,
            mode,
            rows,
            average_text: WaitTimeAggregator::average_text(ranked.iter().copied(), now, mode),
            taken_at: now,
        }
    }

    /// Flip the lane's display mode; the new mode takes effect after the settle delay
    pub fn toggle_display_mode(&mut self, lane: LaneId) {
        let now = self.clock.now();
        let mode = self.controllers[lane.index()].toggle(&mut self.timers, now);
        self.publish(Event::Lane(LaneEvent::with_mode(
            LaneEventType::ModeToggled,
            lane,
            now,
            mode,
        )));
    }

    pub fn current_mode(&self, lane: LaneId) -> DisplayMode {
        self.controllers[lane.index()].mode()
    }

    /// Fire every timer that is due; returns how many fired
    pub fn run_due(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;

        while let Some((_, task)) = self.timers.pop_due(now) {
            fired += 1;
            let lane = task.lane();
            let request = self.controllers[lane.index()].on_fired(task, &mut self.timers, now);
            if let Some(request) = request {
                self.render(lane, request.mode, request.cause);
            }
        }

        fired
    }

    /// Epoch second at which the next timer becomes due
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_due()
    }

    /// Number of pending periodic ticks for `lane`, stale or live
    pub fn pending_ticks(&self, lane: LaneId) -> usize {
        self.timers
            .iter()
            .filter(|(_, task)| matches!(task, LaneTask::Tick { lane: l, .. } if *l == lane))
            .count()
    }

    /// Number of pending ticks that will keep rescheduling themselves
    pub fn live_chains(&self, lane: LaneId) -> usize {
        let generation = self.controllers[lane.index()].generation();
        self.timers
            .iter()
            .filter(|(_, task)| {
                matches!(task, LaneTask::Tick { lane: l, generation: g, .. }
                    if *l == lane && *g == generation)
            })
            .count()
    }

    /// Whether a toggle on `lane` is still waiting for its settle delay
    pub fn is_settling(&self, lane: LaneId) -> bool {
        self.controllers[lane.index()].is_settling()
    }

    pub fn entry_id_for(&self, lane: LaneId, name: &str) -> Option<EntryId> {
        self.lane(lane).entry_id_for(name)
    }

    /// Entry at 1-based rank position in the current ranking
    pub fn entry_at(&self, lane: LaneId, display_index: usize) -> Option<EntryId> {
        let index = display_index.checked_sub(1)?;
        PriorityOrderer::rank(self.lane(lane).entries())
            .get(index)
            .map(|entry| entry.id)
    }

    pub fn entry(&self, lane: LaneId, entry_id: EntryId) -> Option<&QueueEntry> {
        self.lane(lane).get(entry_id)
    }

    /// Which lane, if any, `name` is waiting in
    pub fn locate(&self, name: &str) -> Option<LaneId> {
        IdentityRegistry::locate(self.lanes.iter(), name)
    }

    /// Completed requests recorded for `name` in `lane`
    pub fn prior_count(&self, lane: LaneId, name: &str) -> usize {
        self.lane(lane).ledger().count_for(name)
    }

    pub fn history_len(&self, lane: LaneId) -> usize {
        self.lane(lane).ledger().len()
    }

    pub fn waiting(&self, lane: LaneId) -> usize {
        self.lane(lane).len()
    }

    fn lane(&self, lane: LaneId) -> &Lane {
        &self.lanes[lane.index()]
    }

    fn lane_mut(&mut self, lane: LaneId) -> &mut Lane {
        &mut self.lanes[lane.index()]
    }

    fn render(&mut self, lane: LaneId, mode: DisplayMode, cause: RenderCause) {
        let now = self.clock.now();
        let snapshot = self.snapshot_in(lane, mode, now);
        log::trace!(
            "render {} lane ({}, {}): {}",
            lane,
            mode,
            cause,
            snapshot.average_text
        );
        self.publish(Event::Render(RenderEvent { cause, snapshot }));
    }

    fn publish(&mut self, event: Event) {
        let now = self.clock.now();
        if let Err(e) = self.notifications.publish(event, now) {
            log_error_with_context(&e, "Event delivery");
        }
    }
}
