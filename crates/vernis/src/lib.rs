//! # Vernis
//!
//! Baseline compatibility analyzer for Vue Single File Components.
//!
//! This crate re-exports the Vernis sub-crates for unified
//! documentation.
//!
//! ## Crates
//!
//! - [`esquisse`] - Structural SFC block parsing
//! - [`gamut`] - Feature scanning, Baseline classification and reporting

/// Structural SFC block parsing.
pub use vernis_esquisse as esquisse;

/// Feature scanning, Baseline classification and reporting.
pub use vernis_gamut as gamut;
