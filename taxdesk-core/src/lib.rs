pub mod calculations;
pub mod models;
pub mod statistics;

pub use calculations::{DeductionEngine, DeductionLimits, DeductionLimitsError};
pub use models::*;
pub use statistics::{StatisticsAggregator, StatisticsSnapshot, compute_snapshot};
