//! Per-lane display mode state machine
//!
//! Each lane refreshes on a periodic chain of single-shot ticks. A chain is
//! identified by a generation number:
//!
//! ```text
//!   tick(g) ──render──▶ g == current? ──yes──▶ schedule tick(g) +period
//!                                     └─no───▶ chain ends
//!
//!   toggle ──▶ flip mode, current += 1, replace settle timer
//!   settle ──render in new mode──▶ schedule tick(current) +period
//! ```
//!
//! A tick already in flight when the mode is toggled still fires once, in the
//! mode that scheduled it, and then dies. Only the settle action starts a new
//! chain, so once the settle delay has passed there is exactly one live chain.

use crate::queue::timer::{TimerId, TimerQueue};
use crate::queue::types::{DisplayMode, EngineSettings, LaneId, RenderCause};

/// Deferred work owned by a lane controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneTask {
    Tick {
        lane: LaneId,
        generation: u64,
        mode: DisplayMode,
    },
    Settle {
        lane: LaneId,
        generation: u64,
    },
}

impl LaneTask {
    pub fn lane(&self) -> LaneId {
        match self {
            LaneTask::Tick { lane, .. } | LaneTask::Settle { lane, .. } => *lane,
        }
    }
}

/// What a fired task asks the engine to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    pub mode: DisplayMode,
    pub cause: RenderCause,
}

#[derive(Debug)]
pub struct DisplayModeController {
    lane: LaneId,
    mode: DisplayMode,
    generation: u64,
    tick: Option<TimerId>,
    settle: Option<TimerId>,
    settings: EngineSettings,
}

impl DisplayModeController {
    pub fn new(lane: LaneId, settings: EngineSettings) -> Self {
        Self {
            lane,
            mode: DisplayMode::default(),
            generation: 0,
            tick: None,
            settle: None,
            settings,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start the periodic chain; the first tick lands one period from `now`
    pub fn start(&mut self, timers: &mut TimerQueue<LaneTask>, now: u64) {
        if let Some(previous) = self.tick.take() {
            timers.cancel(previous);
        }
        self.schedule_tick(timers, now);
    }

    /// Flip the mode and defer the first refresh in the new mode
    pub fn toggle(&mut self, timers: &mut TimerQueue<LaneTask>, now: u64) -> DisplayMode {
        self.mode = self.mode.toggled();
        self.generation += 1;

        // The in-flight tick keeps its old generation and will end its chain.
        self.tick = None;
        if let Some(previous) = self.settle.take() {
            timers.cancel(previous);
        }

        let due = now.saturating_add(self.settings.settle_delay);
        self.settle = Some(timers.schedule(
            due,
            LaneTask::Settle {
                lane: self.lane,
                generation: self.generation,
            },
        ));

        log::debug!(
            "{} lane switched to {} (generation {}), settle at {}",
            self.lane,
            self.mode,
            self.generation,
            due
        );
        self.mode
    }

    /// Handle a fired task that belongs to this lane
    ///
    /// Returns the render to perform, or `None` for a superseded settle.
    pub fn on_fired(
        &mut self,
        task: LaneTask,
        timers: &mut TimerQueue<LaneTask>,
        now: u64,
    ) -> Option<RenderRequest> {
        match task {
            LaneTask::Tick {
                generation, mode, ..
            } => {
                if generation == self.generation {
                    self.schedule_tick(timers, now);
                    Some(RenderRequest {
                        mode,
                        cause: RenderCause::Tick,
                    })
                } else {
                    log::trace!(
                        "{} lane: stale tick from generation {} renders once",
                        self.lane,
                        generation
                    );
                    Some(RenderRequest {
                        mode,
                        cause: RenderCause::StaleTick,
                    })
                }
            }
            LaneTask::Settle { generation, .. } => {
                if generation != self.generation {
                    return None;
                }
                self.settle = None;
                self.schedule_tick(timers, now);
                Some(RenderRequest {
                    mode: self.mode,
                    cause: RenderCause::Settle,
                })
            }
        }
    }

    /// Whether a settle action is still waiting to fire
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    fn schedule_tick(&mut self, timers: &mut TimerQueue<LaneTask>, now: u64) {
        self.tick = Some(timers.schedule(
            now.saturating_add(self.settings.refresh_period),
            LaneTask::Tick {
                lane: self.lane,
                generation: self.generation,
                mode: self.mode,
            },
        ));
    }
}
