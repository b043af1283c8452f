//! Built-in static configuration: the question bank and archetype catalog.

pub mod archetypes;
pub mod questions;

pub use archetypes::builtin_archetypes;
pub use questions::builtin_question_bank;
