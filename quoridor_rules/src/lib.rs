//! # Quoridor Rules
//!
//! The rule book crate - holds every static fact the tutor knows about Quoridor:
//! categorized rule/strategy sentences, the direct question table, and the
//! keyword lexicon used to route free-text questions to a category.
//! This crate is immutable reference data and contains no learning logic.

pub mod knowledge;
pub mod lexicon;

pub use knowledge::*;
pub use lexicon::*;
