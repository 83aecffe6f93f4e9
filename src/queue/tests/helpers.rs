//! Shared fixtures for queue tests

use crate::core::time::ManualClock;
use crate::notifications::api::{Event, EventFilter, EventReceiver, RenderEvent};
use crate::queue::api::{EngineSettings, EntryId, HelpDesk, LaneId, QueueEntry, RenderCause};
use std::sync::Arc;

pub const START: u64 = 1_700_000_000;

pub fn desk() -> (HelpDesk, ManualClock) {
    let clock = ManualClock::starting_at(START);
    let desk = HelpDesk::new(Arc::new(clock.clone()), EngineSettings::default());
    (desk, clock)
}

pub fn desk_with_renders() -> (HelpDesk, ManualClock, EventReceiver) {
    let (mut desk, clock) = desk();
    let renders = desk.subscribe("test-renders", EventFilter::RenderOnly);
    (desk, clock, renders)
}

pub fn entry(id: u64, name: &str, prior_count: usize, enqueue_time: u64) -> QueueEntry {
    QueueEntry {
        id: EntryId(id),
        name: name.to_string(),
        prior_count,
        enqueue_time,
    }
}

/// Drain all pending render events for one lane
pub fn drain_renders(receiver: &mut EventReceiver, lane: LaneId) -> Vec<RenderEvent> {
    let mut renders = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        if let Event::Render(render) = event {
            if render.snapshot.lane == lane {
                renders.push(render);
            }
        }
    }
    renders
}

pub fn causes(renders: &[RenderEvent]) -> Vec<RenderCause> {
    renders.iter().map(|r| r.cause).collect()
}

/// Advance one second at a time, firing timers as they come due
pub fn step(desk: &mut HelpDesk, clock: &ManualClock, secs: u64) {
    for _ in 0..secs {
        clock.advance(1);
        desk.run_due();
    }
}
