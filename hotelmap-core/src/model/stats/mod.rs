mod quick_stats;
mod stat_value;

pub use quick_stats::QuickStats;
pub use stat_value::{StatValue, NOT_APPLICABLE};
