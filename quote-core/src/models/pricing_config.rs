use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted per-m² rate. Keeps every budget product (up to four
/// sub-projects over a `u32` floor area) well inside `Decimal`'s range.
pub const MAX_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingConfigError {
    #[error("area rate table is empty")]
    EmptyAreaRates,

    #[error("area rate thresholds must be strictly ascending (found {previous} then {next})")]
    UnorderedThresholds { previous: u32, next: u32 },

    #[error("negative rate {0}")]
    NegativeRate(Decimal),

    #[error("rate {0} exceeds the maximum of {MAX_RATE}")]
    RateTooLarge(Decimal),
}

/// Per-square-meter rate for the three finish tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRates {
    pub silver: Decimal,
    pub gold: Decimal,
    pub diamond: Decimal,
}

impl Default for TierRates {
    fn default() -> Self {
        Self {
            silver: Decimal::from(3000),
            gold: Decimal::from(4000),
            diamond: Decimal::from(5000),
        }
    }
}

/// One row of the area break-point table: areas strictly below `below`
/// (and not matched by an earlier row) are charged `rate` per m².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRate {
    pub below: u32,
    pub rate: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineeringRates {
    /// Floor area from which the large-area rate applies (inclusive).
    pub large_area_threshold: u32,
    pub large_area_rate: Decimal,
    pub small_area_rate: Decimal,
}

impl Default for EngineeringRates {
    fn default() -> Self {
        Self {
            large_area_threshold: 200,
            large_area_rate: Decimal::from(15),
            small_area_rate: Decimal::from(20),
        }
    }
}

/// Every tunable number used by the pricing calculator.
///
/// The defaults are the studio's published prices; a deployment may
/// override any table from the `[pricing]` section of its config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub tier_rates: TierRates,
    pub area_rates: Vec<AreaRate>,
    /// Rate for areas at or above the last `area_rates` threshold.
    pub area_rate_floor: Decimal,
    pub engineering: EngineeringRates,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tier_rates: TierRates::default(),
            area_rates: vec![
                AreaRate {
                    below: 25,
                    rate: Decimal::from(100),
                },
                AreaRate {
                    below: 100,
                    rate: Decimal::from(80),
                },
                AreaRate {
                    below: 200,
                    rate: Decimal::from(60),
                },
            ],
            area_rate_floor: Decimal::from(50),
            engineering: EngineeringRates::default(),
        }
    }
}

impl PricingConfig {
    /// Checks the break-point table forms a partition of `[0, ∞)` and that
    /// every rate lies in `0..=MAX_RATE`.
    pub fn validate(&self) -> Result<(), PricingConfigError> {
        if self.area_rates.is_empty() {
            return Err(PricingConfigError::EmptyAreaRates);
        }

        for pair in self.area_rates.windows(2) {
            if pair[1].below <= pair[0].below {
                return Err(PricingConfigError::UnorderedThresholds {
                    previous: pair[0].below,
                    next: pair[1].below,
                });
            }
        }

        let rates = self
            .area_rates
            .iter()
            .map(|r| r.rate)
            .chain([
                self.area_rate_floor,
                self.tier_rates.silver,
                self.tier_rates.gold,
                self.tier_rates.diamond,
                self.engineering.large_area_rate,
                self.engineering.small_area_rate,
            ]);

        for rate in rates {
            if rate < Decimal::ZERO {
                return Err(PricingConfigError::NegativeRate(rate));
            }
            if rate > MAX_RATE {
                return Err(PricingConfigError::RateTooLarge(rate));
            }
        }

        Ok(())
    }
}
