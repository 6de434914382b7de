use log::{debug, warn};
use tradecalc_core::Side;
use tradecalc_ports::{CalcError, CalcResult, CalculatorConfig};

/// Position sizing and validation engine
///
/// Calculation methods never fail and do no guarding of their own: a zero
/// price distance in [`Calculator::calculate_size`] yields an infinite size.
/// Run the `validate_*` methods first when inputs are untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Create a calculator with the given leverage bound (not validated)
    pub fn new(max_leverage: i32) -> Self {
        Self {
            config: CalculatorConfig::with_leverage(max_leverage),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Get the calculator configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Leverage bound stored at construction
    pub fn max_leverage(&self) -> i32 {
        self.config.max_leverage
    }

    /// Amount of the balance lost if the stop-loss is hit
    pub fn risk_amount(&self, balance: f64, risk_percent: f64) -> f64 {
        balance * risk_percent / 100.0
    }

    /// Total exposure of a position
    pub fn notional_value(&self, size: f64, price: f64) -> f64 {
        size * price
    }

    /// Position size that loses exactly `risk_percent` of `balance` at the stop-loss
    ///
    /// size = (balance * risk% / 100) / distance, where distance is
    /// `entry - stop_loss` for longs and `stop_loss - entry` for shorts.
    pub fn calculate_size(
        &self,
        balance: f64,
        risk_percent: f64,
        entry: f64,
        stop_loss: f64,
        side: Side,
    ) -> f64 {
        let risk_amount = self.risk_amount(balance, risk_percent);
        let price_distance = match side {
            Side::Long => entry - stop_loss,
            Side::Short => stop_loss - entry,
        };

        risk_amount / price_distance
    }

    /// Leverage needed to carry `size` at `price` on `balance`
    ///
    /// The raw ratio is rounded half away from zero, raised to 1 if below and
    /// capped at `max_leverage`. The explicit bound is used, not the one
    /// stored at construction (see [`Calculator::calculate_leverage_capped`]).
    pub fn calculate_leverage(&self, size: f64, price: f64, balance: f64, max_leverage: i32) -> i32 {
        let notional = self.notional_value(size, price);
        let raw = notional / balance;

        let mut leverage = raw.round() as i32;
        if leverage < 1 {
            leverage = 1;
        }
        if leverage > max_leverage {
            warn!(
                "Leverage capped: raw={:.2}, max_leverage={}",
                raw, max_leverage
            );
            leverage = max_leverage;
        }

        leverage
    }

    /// [`Calculator::calculate_leverage`] bounded by the configured max leverage
    pub fn calculate_leverage_capped(&self, size: f64, price: f64, balance: f64) -> i32 {
        self.calculate_leverage(size, price, balance, self.config.max_leverage)
    }

    /// Take-profit price placed `rr_ratio` risk distances from entry
    pub fn calculate_rr_take_profit(
        &self,
        entry: f64,
        stop_loss: f64,
        rr_ratio: f64,
        side: Side,
    ) -> f64 {
        let risk = (entry - stop_loss).abs();

        match side {
            Side::Long => entry + risk * rr_ratio,
            Side::Short => entry - risk * rr_ratio,
        }
    }

    /// Check that a limit entry rests on the passive side of the market
    ///
    /// Long entries must be strictly below `current`, short entries strictly above.
    pub fn validate_price_logic(&self, side: Side, entry: f64, current: f64) -> CalcResult<()> {
        let valid = match side {
            Side::Long => entry < current,
            Side::Short => entry > current,
        };

        if !valid {
            debug!(
                "Price logic rejected: side={}, entry={}, current={}",
                side, entry, current
            );
            return Err(CalcError::InvalidPriceLogic {
                side,
                entry,
                current,
            });
        }

        Ok(())
    }

    /// Check that the stop-loss sits on the losing side of entry (equality fails)
    pub fn validate_stop_loss(&self, side: Side, entry: f64, stop_loss: f64) -> CalcResult<()> {
        let valid = match side {
            Side::Long => stop_loss < entry,
            Side::Short => stop_loss > entry,
        };

        if !valid {
            debug!(
                "Stop loss rejected: side={}, entry={}, stop_loss={}",
                side, entry, stop_loss
            );
            return Err(CalcError::InvalidStopLoss {
                side,
                entry,
                stop_loss,
            });
        }

        Ok(())
    }

    /// Unrealized PnL as a percentage of entry price; 0 when entry is 0
    pub fn calculate_pnl_percent(&self, side: Side, entry_price: f64, mark_price: f64) -> f64 {
        if entry_price == 0.0 {
            return 0.0;
        }

        match side {
            Side::Long => (mark_price - entry_price) / entry_price * 100.0,
            Side::Short => (entry_price - mark_price) / entry_price * 100.0,
        }
    }

    /// Signed percentage move from `current_price` to `target_price`
    ///
    /// Positive when the target lies in the profitable direction for `side`.
    pub fn calculate_distance_to_price(
        &self,
        side: Side,
        current_price: f64,
        target_price: f64,
    ) -> f64 {
        match side {
            Side::Long => (target_price - current_price) / current_price * 100.0,
            Side::Short => (current_price - target_price) / current_price * 100.0,
        }
    }

    /// Expected PnL of closing at `exit_price`: (nominal, percentage)
    pub fn calculate_expected_pnl(
        &self,
        side: Side,
        entry_price: f64,
        exit_price: f64,
        size: f64,
    ) -> (f64, f64) {
        let nominal = match side {
            Side::Long => (exit_price - entry_price) * size,
            Side::Short => (entry_price - exit_price) * size,
        };
        let percentage = self.calculate_pnl_percent(side, entry_price, exit_price);

        (nominal, percentage)
    }

    /// Precondition check for a sizing request; stops at the first failure
    pub fn validate_inputs(
        &self,
        side: Side,
        entry_price: f64,
        stop_loss: f64,
        risk_percent: f64,
        account_equity: f64,
    ) -> CalcResult<()> {
        if entry_price.is_nan() || entry_price <= 0.0 {
            return Err(CalcError::InvalidEntryPrice(entry_price));
        }

        if stop_loss.is_nan() || stop_loss <= 0.0 {
            return Err(CalcError::InvalidStopLoss {
                side,
                entry: entry_price,
                stop_loss,
            });
        }

        if risk_percent.is_nan() || risk_percent <= 0.0 || risk_percent > 100.0 {
            return Err(CalcError::InvalidRiskPercent(risk_percent));
        }

        if account_equity.is_nan() || account_equity <= 0.0 {
            return Err(CalcError::InvalidEquity(account_equity));
        }

        self.validate_stop_loss(side, entry_price, stop_loss)
            .map_err(|_| CalcError::InvalidStopLossPlacement {
                side,
                entry: entry_price,
                stop_loss,
            })
    }
}
