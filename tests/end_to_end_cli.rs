//! CLI integration tests
//!
//! - `cli::argument_parsing` - flag parsing and validation
//! - `cli::toml_config` - configuration files and CLI precedence

mod cli;
