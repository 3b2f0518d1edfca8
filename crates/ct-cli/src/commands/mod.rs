//! CLI command implementations.

pub mod breakdown;
pub mod dashboard;
pub mod events;
pub mod ingest;
pub mod minutes;
mod render;
pub mod util;
