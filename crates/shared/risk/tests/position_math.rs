//! Position Math Integration Test
//!
//! Exercises the calculator the way an order-entry flow would:
//! 1. Validate the request
//! 2. Size the position and derive leverage
//! 3. Place take-profit targets and measure expected PnL

use approx::assert_abs_diff_eq;
use tradecalc_risk::{CalcError, Calculator, Side, TradeRequest};

#[test]
fn test_reference_scenarios() {
    let _ = env_logger::try_init();
    let calc = Calculator::new(125);

    assert_abs_diff_eq!(
        calc.calculate_size(1000.0, 2.0, 45000.0, 44500.0, Side::Long),
        0.04,
        epsilon = 0.01
    );
    assert_eq!(calc.calculate_leverage(1.0, 45000.0, 10000.0, 125), 5);
    assert_eq!(calc.calculate_leverage(10.0, 45000.0, 1000.0, 125), 125);
    assert_abs_diff_eq!(
        calc.calculate_rr_take_profit(45000.0, 44500.0, 2.0, Side::Long),
        46000.0,
        epsilon = 0.01
    );
    assert_abs_diff_eq!(
        calc.calculate_pnl_percent(Side::Long, 45000.0, 46000.0),
        2.222,
        epsilon = 0.01
    );

    let (nominal, pct) = calc.calculate_expected_pnl(Side::Short, 45000.0, 46000.0, 0.5);
    assert_abs_diff_eq!(nominal, -500.0, epsilon = 0.01);
    assert_abs_diff_eq!(pct, -2.222, epsilon = 0.01);

    assert!(
        calc.validate_inputs(Side::Long, 45000.0, 45500.0, 2.0, 1000.0)
            .is_err()
    );
}

#[test]
fn test_size_matches_risk_formula() {
    let calc = Calculator::default();

    for (balance, risk_pct, entry, distance) in [
        (1000.0, 2.0, 45000.0, 500.0),
        (25000.0, 0.5, 3200.0, 12.5),
        (150.0, 10.0, 0.35, 0.01),
    ] {
        let long = calc.calculate_size(balance, risk_pct, entry, entry - distance, Side::Long);
        let short = calc.calculate_size(balance, risk_pct, entry, entry + distance, Side::Short);
        let want = balance * (risk_pct / 100.0) / distance;

        assert_abs_diff_eq!(long, want, epsilon = 1e-9);
        assert_abs_diff_eq!(short, want, epsilon = 1e-9);

        // Losing the full stop distance costs exactly the risk amount
        assert_abs_diff_eq!(long * distance, calc.risk_amount(balance, risk_pct), epsilon = 1e-9);
    }
}

#[test]
fn test_leverage_bounded_and_monotonic() {
    let _ = env_logger::try_init();
    let calc = Calculator::default();
    let balance = 1000.0;
    let price = 100.0;

    for max_leverage in [1, 10, 125] {
        let mut previous = 0;
        for step in 0..=2000 {
            let size = step as f64 * 0.75;
            let leverage = calc.calculate_leverage(size, price, balance, max_leverage);

            assert!((1..=max_leverage).contains(&leverage));
            assert!(leverage >= previous, "leverage decreased at size {size}");
            previous = leverage;
        }
        assert_eq!(previous, max_leverage);
    }
}

#[test]
fn test_take_profit_moves_away_with_ratio() {
    let calc = Calculator::default();

    for (side, entry, stop_loss) in [(Side::Long, 45000.0, 44500.0), (Side::Short, 45000.0, 45500.0)] {
        let mut previous_distance = 0.0;
        for ratio in [0.5, 1.0, 1.5, 2.0, 3.0, 5.0] {
            let tp = calc.calculate_rr_take_profit(entry, stop_loss, ratio, side);
            let distance = calc.calculate_distance_to_price(side, entry, tp);

            // Target always lies in the profitable direction
            assert!(distance > previous_distance);
            assert_abs_diff_eq!(
                calc.calculate_pnl_percent(side, entry, tp),
                distance,
                epsilon = 1e-9
            );
            previous_distance = distance;
        }
    }
}

#[test]
fn test_expected_pnl_signs_agree() {
    let calc = Calculator::default();

    for side in [Side::Long, Side::Short] {
        for exit in [40000.0, 44999.0, 45001.0, 52000.0] {
            let (nominal, pct) = calc.calculate_expected_pnl(side, 45000.0, exit, 0.25);
            assert_eq!(nominal > 0.0, pct > 0.0);
            assert_eq!(nominal < 0.0, pct < 0.0);
        }
    }
}

#[test]
fn test_zero_entry_pnl_guard() {
    let calc = Calculator::default();

    for side in [Side::Long, Side::Short] {
        for mark in [0.0, 1.0, 45000.0] {
            assert_eq!(calc.calculate_pnl_percent(side, 0.0, mark), 0.0);
        }
    }
}

#[test]
fn test_long_validation_iff_ordering() {
    let calc = Calculator::default();
    let entry = 45000.0;

    for other in [44000.0, 44999.99, 45000.0, 45000.01, 46000.0] {
        assert_eq!(
            calc.validate_stop_loss(Side::Long, entry, other).is_ok(),
            other < entry
        );
        assert_eq!(
            calc.validate_price_logic(Side::Long, entry, other).is_ok(),
            entry < other
        );
    }
}

#[test]
fn test_validate_then_plan_flow() {
    let _ = env_logger::try_init();
    let calc = Calculator::new(50);
    let current_price = 45000.0;

    // Resting short above the market, stop above entry
    let request = TradeRequest {
        side: Side::Short,
        balance: 5000.0,
        risk_percent: 1.0,
        entry_price: 45500.0,
        stop_loss: 46000.0,
        rr_ratio: 2.5,
    };

    calc.validate_price_logic(request.side, request.entry_price, current_price)
        .unwrap();
    let plan = calc.plan_trade(&request).unwrap();

    // 50 risk / 500 distance
    assert_abs_diff_eq!(plan.size, 0.1, epsilon = 1e-9);
    assert_eq!(plan.leverage, 1);
    assert_abs_diff_eq!(plan.take_profit, 44250.0, epsilon = 0.01);
    assert_abs_diff_eq!(plan.expected_profit, 125.0, epsilon = 0.01);

    // Same request priced into the market is rejected
    let err = calc
        .validate_price_logic(Side::Short, 44500.0, current_price)
        .unwrap_err();
    assert!(matches!(err, CalcError::InvalidPriceLogic { .. }));
}
