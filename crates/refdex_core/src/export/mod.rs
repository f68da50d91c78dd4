//! Markdown index export.
//!
//! # Responsibility
//! - Turn store contents into the index document body.
//! - Keep all line formatting rules in one place.

pub mod index;
