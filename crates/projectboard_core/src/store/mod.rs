//! Reactive ownership of board state.
//!
//! # Responsibility
//! - Hold the authoritative project list behind a single writer.
//! - Fan out full snapshots to subscribers after every mutation.

pub mod project_store;
