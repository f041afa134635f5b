use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals for the three finish-quality levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredBudget {
    pub silver: Decimal,
    pub gold: Decimal,
    pub diamond: Decimal,
}

/// Architectural project for a new house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseBudget {
    pub total: Decimal,
    /// Approximate area shown to the client next to the total.
    pub total_area: u32,
}

/// Outcome of the pricing step, one variant per pricing model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum BudgetResult {
    Tiered {
        tiers: TieredBudget,
        weighted_area: u32,
    },
    House(HouseBudget),
    AreaBased {
        total: Decimal,
        floor_area: u32,
        rate: Decimal,
    },
    Engineering {
        total: Decimal,
        sub_project_count: usize,
        floor_area: u32,
        rate: Decimal,
    },
}

impl BudgetResult {
    /// The single quoted total, or `None` for the tiered model.
    pub fn total(&self) -> Option<Decimal> {
        match self {
            Self::Tiered { .. } => None,
            Self::House(house) => Some(house.total),
            Self::AreaBased { total, .. } | Self::Engineering { total, .. } => Some(*total),
        }
    }

    /// Area figure displayed alongside the total, when the model produces one.
    pub fn approximate_area(&self) -> Option<u32> {
        match self {
            Self::Tiered { weighted_area, .. } => Some(*weighted_area),
            Self::House(house) if house.total_area > 0 => Some(house.total_area),
            _ => None,
        }
    }
}
