//! Command runners for the refdex CLI.

pub mod rebuild;
pub mod stats;
