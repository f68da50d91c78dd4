//! Read models for the research store.
//!
//! # Responsibility
//! - Define the item shapes consumed by the index renderer and the
//!   statistics reporter.
//!
//! # Invariants
//! - Models are read-only projections; nothing here writes to the store.

pub mod item;
