//! EURUSD Heston calibration demo.
//!
//! Builds the six-instrument target set from a quote snapshot, calibrates
//! the Monte Carlo engine (or loads the persisted parameters), and prices a
//! few vanillas with the committed model.
//!
//! Pass `--force` to ignore the persisted cache and refit.

use anyhow::Result;
use heston_models::analytical::OptionType;
use heston_models::market::{MarketParams, MarketQuoteSet, TargetSet, Tenor};
use heston_models::models::HestonParams;
use heston_optimiser::calibration::{CalibrationCache, HestonCalibrator};
use heston_pricing::mc::{HestonEngine, SimulationConfig};
use tracing::info;

/// EURUSD snapshot: spot and the continuously compounded USD/EUR rates.
const SPOT: f64 = 1.08;
const USD_RATE: f64 = 0.035;
const EUR_RATE: f64 = 0.0215;

fn quote_snapshot() -> Vec<(Tenor, MarketQuoteSet)> {
    vec![
        (Tenor::OneYear, MarketQuoteSet::new(0.08, 0.01, 0.002)),
        (Tenor::FiveYear, MarketQuoteSet::new(0.09, 0.015, 0.003)),
    ]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let force = std::env::args().any(|arg| arg == "--force");

    let market = MarketParams::new(SPOT, USD_RATE, EUR_RATE);
    let targets = TargetSet::build(&quote_snapshot(), &market)?;
    for target in targets.targets() {
        info!(
            tenor = %target.tenor,
            forward = target.forward,
            strike_call = target.strike_call,
            strike_put = target.strike_put,
            "built calibration target"
        );
    }

    // Seed the free parameters from the ATM vols; the drift is the rate
    // differential under the domestic risk-neutral measure.
    let initial = HestonParams::new(
        market.spot,
        0.08 * 0.08,
        0.09 * 0.09,
        1.5,
        0.3,
        -0.4,
        market.domestic_rate - market.foreign_rate,
        market.domestic_rate,
        market.foreign_rate,
    )?;
    let mut engine = HestonEngine::new(initial, SimulationConfig::default());

    let cache = CalibrationCache::new("var/calibration");
    let calibrator = HestonCalibrator::with_defaults(targets).with_cache(cache);
    let report = calibrator.calibrate_or_load(&mut engine, force)?;
    info!(
        source = ?report.source,
        iterations = report.iterations,
        "calibration finished"
    );

    let params = engine.params();
    println!("committed parameters:");
    println!("  v0    = {:.6}", params.v0);
    println!("  theta = {:.6}", params.theta);
    println!("  kappa = {:.6}", params.kappa);
    println!("  sigma = {:.6}", params.sigma);
    println!("  rho   = {:.6}", params.rho);
    println!("  feller ratio = {:.4}", params.feller_ratio());

    for (label, strike, expiry, option_type) in [
        ("1Y ATMS call", SPOT, 1.0, OptionType::Call),
        ("1Y 1.10 call", 1.10, 1.0, OptionType::Call),
        ("5Y 1.05 put ", 1.05, 5.0, OptionType::Put),
    ] {
        let price = engine.price_option(strike, expiry, option_type)?;
        println!("{label}: {price:.6}");
    }

    Ok(())
}
