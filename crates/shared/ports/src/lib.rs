//! Tradecalc Ports
//!
//! Boundary types for the tradecalc position calculator: the validation
//! error taxonomy and the configuration injected at construction.

mod config;
mod error;

pub use config::{CalculatorConfig, DEFAULT_MAX_LEVERAGE};
pub use error::{CalcError, CalcResult};
