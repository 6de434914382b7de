//! Tradecalc Risk Engine
//!
//! Deterministic trading math for long and short positions:
//!
//! - **Sizing**: position size from account balance, risk percent and stop distance
//! - **Leverage**: required leverage, rounded and clamped to a max bound
//! - **Targets**: risk-reward take-profit placement
//! - **PnL**: percent and nominal profit/loss, distance to a price
//! - **Validation**: entry, stop-loss and risk parameter checks
//!
//! Calculations trust their inputs. Validate first, then calculate:
//!
//! ```
//! use tradecalc_risk::{Calculator, Side};
//!
//! let calc = Calculator::new(125);
//! calc.validate_inputs(Side::Long, 45000.0, 44500.0, 2.0, 1000.0).unwrap();
//!
//! let size = calc.calculate_size(1000.0, 2.0, 45000.0, 44500.0, Side::Long);
//! assert!((size - 0.04).abs() < 1e-9);
//! ```

pub mod calculator;
pub mod plan;

// Re-export main types
pub use calculator::Calculator;
pub use plan::{TradePlan, TradeRequest};
pub use tradecalc_core::Side;
pub use tradecalc_ports::{CalcError, CalcResult, CalculatorConfig};
