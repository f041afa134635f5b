mod answers;
mod budget;
mod pricing_config;
mod room;

pub use answers::{
    AnswerSet, BudgetType, Classification, Contact, PropertyType, StartWindow, SubProject,
    WorkType,
};
pub use budget::{BudgetResult, HouseBudget, TieredBudget};
pub use pricing_config::{
    AreaRate, EngineeringRates, MAX_RATE, PricingConfig, PricingConfigError, TierRates,
};
pub use room::{MAX_ROOM_QUANTITY, RoomCounters, RoomKind};
