//! Core data model for the simulator.
//!
//! A run is a fixed narrative of phases. Each phase prints one banner line
//! and posts one status update.

mod phase;
mod status;

pub use phase::PHASES;
pub use status::StatusUpdate;
