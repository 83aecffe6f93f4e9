//! Shared helpers for integration tests

use helpqueue::core::time::ManualClock;
use helpqueue::notifications::api::{Event, EventReceiver, RenderEvent};
use helpqueue::queue::{EngineSettings, HelpDesk};
use std::sync::Arc;

pub const SESSION_START: u64 = 1_726_000_000;

pub fn desk_at(start: u64) -> (HelpDesk, ManualClock) {
    let clock = ManualClock::starting_at(start);
    let desk = HelpDesk::new(Arc::new(clock.clone()), EngineSettings::default());
    (desk, clock)
}

/// Advance the clock second by second, firing due timers
pub fn run_for(desk: &mut HelpDesk, clock: &ManualClock, secs: u64) {
    for _ in 0..secs {
        clock.advance(1);
        desk.run_due();
    }
}

pub fn renders(receiver: &mut EventReceiver) -> Vec<RenderEvent> {
    let mut renders = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        if let Event::Render(render) = event {
            renders.push(render);
        }
    }
    renders
}
