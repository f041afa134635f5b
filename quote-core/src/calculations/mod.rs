//! Pricing calculations for the studio questionnaire.
//!
//! This module provides the budget formulas and the shared helpers they use.

pub mod common;
pub mod pricing;

pub use pricing::PricingCalculator;
