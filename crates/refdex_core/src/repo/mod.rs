//! Repository layer over the research store.
//!
//! # Responsibility
//! - Define the read-only data access contract used by the index renderer
//!   and the statistics reporter.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Repositories never mutate the store.
//! - Constructors validate required tables and columns before any query
//!   runs.

pub mod item_repo;
