use serde::{Deserialize, Serialize};

/// Leverage bound applied when no explicit bound is given
pub const DEFAULT_MAX_LEVERAGE: i32 = 125;

/// Calculator configuration
///
/// The bound is not validated on construction. A non-positive bound makes
/// leverage clamping degenerate; use [`CalculatorConfig::is_valid`] to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Hard ceiling for any computed leverage (e.g. 125 = 125x)
    pub max_leverage: i32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_leverage: DEFAULT_MAX_LEVERAGE,
        }
    }
}

impl CalculatorConfig {
    /// Create config with a specific leverage bound
    pub fn with_leverage(max_leverage: i32) -> Self {
        Self { max_leverage }
    }

    /// True when the bound is usable (strictly positive)
    pub fn is_valid(&self) -> bool {
        self.max_leverage > 0
    }
}
