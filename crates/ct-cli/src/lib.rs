//! Coding time CLI library.
//!
//! Argument parsing, configuration and the command implementations behind
//! the `ct` binary.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, WindowArgs};
pub use config::Config;
