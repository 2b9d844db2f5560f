//! Host layer for running battles.
//!
//! The engine in `battle-core` is a pure state machine; this crate supplies
//! the discipline a host adds around it:
//! - [`session`] serializes submissions, drives the AI side and hands new
//!   log entries to presentation
//! - [`simulate`] plays both sides with the AI scorer, once or as a seeded
//!   sweep
//!
//! The `battle-sim` binary wires both to the content loaders.
pub mod errors;
pub mod session;
pub mod simulate;

pub use errors::{Result, SessionError};
pub use session::BattleSession;
pub use simulate::{SimulationConfig, SimulationReport, SweepSummary, simulate, sweep};
