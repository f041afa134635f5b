//! Budget formulas for the studio questionnaire.
//!
//! Every operation here is a total function over its documented domain: no
//! errors, no side effects. Missing room counters are zero, and areas are
//! whole square meters that validation has already checked.
//!
//! # Pricing models
//!
//! | Model                          | Formula                                          |
//! |--------------------------------|--------------------------------------------------|
//! | Tiered (generic residence)     | weighted area × tier rate, for each of 3 tiers   |
//! | Architectural house            | unweighted room count × area rate                |
//! | Area based                     | floor area × area rate                           |
//! | Essential engineering          | sub-project count × engineering rate × floor area |
//!
//! The architectural-house model deliberately uses the *raw* number of rooms
//! as its area, not the weighted area the tiered model uses.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::PricingCalculator;
//! use quote_core::{PricingConfig, RoomCounters, RoomKind};
//!
//! let config = PricingConfig::default();
//! let calculator = PricingCalculator::new(&config);
//!
//! let rooms = RoomCounters::new()
//!     .with(RoomKind::MasterSuite, 1)
//!     .with(RoomKind::Bedroom, 2);
//!
//! let rate = calculator.area_rate(rooms.unit_count());
//! let budget = calculator.architectural_house_budget(&rooms, rate);
//!
//! assert_eq!(budget.total_area, 3);
//! assert_eq!(budget.total, dec!(300));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::rate_for_area;
use crate::models::{HouseBudget, PricingConfig, RoomCounters, TieredBudget};

/// Calculator bound to one set of prices.
#[derive(Debug, Clone)]
pub struct PricingCalculator<'a> {
    config: &'a PricingConfig,
}

impl<'a> PricingCalculator<'a> {
    pub fn new(config: &'a PricingConfig) -> Self {
        Self { config }
    }

    /// Sum of `quantity × area_per_unit` over every room type.
    pub fn weighted_area(
        &self,
        rooms: &RoomCounters,
    ) -> u32 {
        rooms
            .iter()
            .map(|(kind, quantity)| u32::from(quantity) * kind.area_per_unit())
            .sum()
    }

    /// Weighted area priced at each finish tier.
    pub fn tiered_budget(
        &self,
        rooms: &RoomCounters,
    ) -> TieredBudget {
        let area = Decimal::from(self.weighted_area(rooms));
        let rates = &self.config.tier_rates;

        TieredBudget {
            silver: area * rates.silver,
            gold: area * rates.gold,
            diamond: area * rates.diamond,
        }
    }

    /// Room-by-room quote for building a new house.
    ///
    /// `total_area` is the unweighted count of rooms; `rate` is normally
    /// [`area_rate`](Self::area_rate) of that same count.
    pub fn architectural_house_budget(
        &self,
        rooms: &RoomCounters,
        rate: Decimal,
    ) -> HouseBudget {
        let total_area = rooms.unit_count();

        HouseBudget {
            total: Decimal::from(total_area) * rate,
            total_area,
        }
    }

    /// Quote from a declared floor area, used for renovations and
    /// non-house projects.
    pub fn area_based_budget(
        &self,
        floor_area: u32,
        rate: Decimal,
    ) -> Decimal {
        Decimal::from(floor_area) * rate
    }

    pub fn engineering_project_budget(
        &self,
        sub_project_count: usize,
        rate: Decimal,
        floor_area: u32,
    ) -> Decimal {
        Decimal::from(sub_project_count) * rate * Decimal::from(floor_area)
    }

    /// Per-m² rate from the area break-point table.
    pub fn area_rate(
        &self,
        provisional_area: u32,
    ) -> Decimal {
        rate_for_area(
            provisional_area,
            &self.config.area_rates,
            self.config.area_rate_floor,
        )
    }

    /// Per-m² rate for engineering sub-projects; large floor areas are
    /// cheaper per meter.
    pub fn engineering_rate(
        &self,
        floor_area: u32,
    ) -> Decimal {
        let rates = &self.config.engineering;
        if floor_area >= rates.large_area_threshold {
            rates.large_area_rate
        } else {
            rates.small_area_rate
        }
    }
}
