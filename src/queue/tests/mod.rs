//! Test modules for the help queue engine
//!
//! Organised by component, with engine-level scenarios in `engine` and the
//! refresh state machine in `display_mode`.

mod helpers;
mod ordering;
mod wait_time;
