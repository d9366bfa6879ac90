//! Domain model for board projects.
//!
//! # Responsibility
//! - Define the canonical project record owned by the store.
//! - Keep identity and status semantics in one place.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Status is the only field that changes after creation.

pub mod project;
