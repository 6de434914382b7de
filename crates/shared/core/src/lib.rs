//! Tradecalc Core Domain
//!
//! Pure domain types shared by the tradecalc crates.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;

// Re-export commonly used types at crate root
pub use entities::{ParseSideError, Side};
