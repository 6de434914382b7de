use thiserror::Error;
use tradecalc_core::Side;

/// Validation failures raised before any sizing calculation runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid price logic for {side}: entry {entry} vs current {current}")]
    InvalidPriceLogic { side: Side, entry: f64, current: f64 },

    #[error("Invalid stop loss for {side}: stop loss {stop_loss} vs entry {entry}")]
    InvalidStopLoss {
        side: Side,
        entry: f64,
        stop_loss: f64,
    },

    #[error("Entry price must be positive: {0}")]
    InvalidEntryPrice(f64),

    #[error("Risk percent must be within (0, 100]: {0}")]
    InvalidRiskPercent(f64),

    #[error("Account equity must be positive: {0}")]
    InvalidEquity(f64),

    #[error("Invalid stop loss placement for {side}: stop loss {stop_loss} vs entry {entry}")]
    InvalidStopLossPlacement {
        side: Side,
        entry: f64,
        stop_loss: f64,
    },
}

pub type CalcResult<T> = std::result::Result<T, CalcError>;
