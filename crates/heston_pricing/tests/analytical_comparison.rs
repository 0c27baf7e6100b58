//! Analytical comparison tests for Monte Carlo pricing.
//!
//! In the degenerate Heston regime (tiny vol-of-vol, fast reversion,
//! v0 = theta) the model collapses to constant-volatility dynamics, so the
//! Monte Carlo price must land close to the Garman-Kohlhagen closed form.

use approx::assert_relative_eq;
use heston_models::analytical::{gk_price, OptionType};
use heston_models::models::HestonParams;
use heston_pricing::mc::{HestonEngine, SimulationConfig};

const SPOT: f64 = 1.08;
const RD: f64 = 0.035;
const RF: f64 = 0.0215;

/// Heston parameters that behave like constant 10% volatility.
fn near_bs_params() -> HestonParams {
    HestonParams::new(
        SPOT,
        0.01, // v0 = 0.1^2
        0.01, // theta = v0: no vol drift
        4.0,  // fast reversion pins v at theta
        0.01, // vol-of-vol small enough to be negligible over 1Y
        -0.1,
        RD - RF,
        RD,
        RF,
    )
    .unwrap()
}

fn engine(n_paths: usize) -> HestonEngine {
    let config = SimulationConfig::builder().n_paths(n_paths).build().unwrap();
    HestonEngine::new(near_bs_params(), config)
}

#[test]
fn mc_atm_call_matches_garman_kohlhagen() {
    let engine = engine(20_000);
    let mc = engine.price_option(SPOT, 1.0, OptionType::Call).unwrap();
    let closed_form = gk_price(SPOT, SPOT, RD, RF, 0.1, 1.0, OptionType::Call).unwrap();
    // 20k paths put the standard error well under 1e-3
    assert_relative_eq!(mc, closed_form, epsilon = 3e-3);
}

#[test]
fn mc_otm_put_matches_garman_kohlhagen() {
    let engine = engine(20_000);
    let strike = 1.00;
    let mc = engine.price_option(strike, 1.0, OptionType::Put).unwrap();
    let closed_form = gk_price(SPOT, strike, RD, RF, 0.1, 1.0, OptionType::Put).unwrap();
    assert_relative_eq!(mc, closed_form, epsilon = 3e-3);
}

#[test]
fn mc_put_call_parity_holds_pathwise() {
    // Parity holds exactly per path because call and put share the same
    // simulated terminal slice.
    let engine = engine(5_000);
    let strike = 1.05;
    let call = engine.price_option(strike, 1.0, OptionType::Call).unwrap();
    let put = engine.price_option(strike, 1.0, OptionType::Put).unwrap();

    // E[max(S-K,0)] - E[max(K-S,0)] = E[S] - K, discounted
    let paths = engine.simulate(1.0).unwrap();
    let terminal = paths.spot.terminal();
    let mean_terminal: f64 = terminal.iter().sum::<f64>() / terminal.len() as f64;
    let expected = (-RD * 1.0_f64).exp() * (mean_terminal - strike);

    assert_relative_eq!(call - put, expected, epsilon = 1e-12);
}

#[test]
fn mc_price_stays_in_coarse_tolerance_band() {
    let closed_form = gk_price(SPOT, SPOT, RD, RF, 0.1, 1.0, OptionType::Call).unwrap();
    let coarse = engine(500)
        .price_option(SPOT, 1.0, OptionType::Call)
        .unwrap();
    let fine = engine(50_000)
        .price_option(SPOT, 1.0, OptionType::Call)
        .unwrap();
    // Coarse runs carry visible Monte Carlo noise, fine runs very little.
    assert_relative_eq!(coarse, closed_form, epsilon = 3e-2);
    assert_relative_eq!(fine, closed_form, epsilon = 3e-3);
}
