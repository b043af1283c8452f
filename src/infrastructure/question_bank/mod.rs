//! Question bank loading
//!
//! A YAML file can replace the built-in question bank. Loaded banks pass the
//! same validation as the built-in one before anything is scored.

pub mod loader;

pub use loader::QuestionBankLoader;
