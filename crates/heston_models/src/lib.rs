//! # Heston Models (L2: Business Logic)
//!
//! Market data, vol-surface analytics and the Heston stochastic volatility
//! model for an FX (EURUSD-style) pricing stack.
//!
//! This crate provides:
//! - Market quote sets per tenor (ATM vol, 25-delta risk reversal and butterfly)
//! - 25-delta smile analytics: skewed vols and strike backout
//! - Garman-Kohlhagen closed-form FX option pricing
//! - Calibration target construction (strike, expiry, market price triples)
//! - Heston parameter set with Feller-condition diagnostics
//!
//! ## Design Principles
//!
//! - **Validated construction**: parameter structs reject non-finite or
//!   out-of-domain inputs at the boundary, so downstream maths never checks
//! - **Plain data out**: calibration targets are self-contained value types
//!   that carry everything a pricer needs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod market;
pub mod models;
