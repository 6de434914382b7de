//! Trade Planning
//!
//! Runs the validate-then-calculate flow in one call: checks the request,
//! sizes the position from the risk budget, and derives leverage, take-profit
//! and the expected result at the take-profit.

use log::debug;
use serde::{Deserialize, Serialize};
use tradecalc_core::Side;
use tradecalc_ports::CalcResult;

use crate::calculator::Calculator;

/// Inputs for sizing a single trade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub side: Side,
    /// Account equity in quote currency
    pub balance: f64,
    /// Percent of balance lost at the stop-loss (0, 100]
    pub risk_percent: f64,
    pub entry_price: f64,
    pub stop_loss: f64,
    /// Reward multiple of the risk distance used for the take-profit
    pub rr_ratio: f64,
}

/// Sized trade derived from a [`TradeRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradePlan {
    pub side: Side,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    /// Position size in contracts
    pub size: f64,
    /// Leverage bounded by the calculator's configured max
    pub leverage: i32,
    pub notional_value: f64,
    /// Amount lost if the stop-loss is hit
    pub risk_amount: f64,
    /// Nominal PnL if the take-profit is hit
    pub expected_profit: f64,
    /// PnL percent of entry if the take-profit is hit
    pub expected_profit_percent: f64,
}

impl TradePlan {
    /// Realized reward/risk multiple at the take-profit
    pub fn reward_to_risk(&self) -> f64 {
        if self.risk_amount == 0.0 {
            return 0.0;
        }
        self.expected_profit / self.risk_amount
    }
}

impl Calculator {
    /// Validate a request and derive the full trade plan
    pub fn plan_trade(&self, request: &TradeRequest) -> CalcResult<TradePlan> {
        self.validate_inputs(
            request.side,
            request.entry_price,
            request.stop_loss,
            request.risk_percent,
            request.balance,
        )?;

        let size = self.calculate_size(
            request.balance,
            request.risk_percent,
            request.entry_price,
            request.stop_loss,
            request.side,
        );
        let leverage = self.calculate_leverage_capped(size, request.entry_price, request.balance);
        let take_profit = self.calculate_rr_take_profit(
            request.entry_price,
            request.stop_loss,
            request.rr_ratio,
            request.side,
        );
        let (expected_profit, expected_profit_percent) =
            self.calculate_expected_pnl(request.side, request.entry_price, take_profit, size);

        let plan = TradePlan {
            side: request.side,
            entry_price: request.entry_price,
            stop_loss: request.stop_loss,
            take_profit,
            size,
            leverage,
            notional_value: self.notional_value(size, request.entry_price),
            risk_amount: self.risk_amount(request.balance, request.risk_percent),
            expected_profit,
            expected_profit_percent,
        };

        debug!(
            "Trade planned: side={}, size={:.6}, leverage={}x, entry={}, sl={}, tp={}",
            plan.side, plan.size, plan.leverage, plan.entry_price, plan.stop_loss, plan.take_profit
        );

        Ok(plan)
    }
}
