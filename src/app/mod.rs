//! Application module: the interactive terminal front end

pub mod cli;
pub mod commands;
pub mod render;
pub mod runtime;
pub mod session;
pub mod startup;
