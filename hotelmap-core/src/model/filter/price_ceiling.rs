use serde::{Deserialize, Serialize};

/// the maximum nightly price set with the price slider. always within
/// [`PriceCeiling::MIN`, `PriceCeiling::MAX`]; out-of-range requests clamp.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "i64")]
pub struct PriceCeiling(u32);

impl PriceCeiling {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 2000;

    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(Self::MIN as i64, Self::MAX as i64);
        Self(clamped as u32)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// whether a normalized price is at or under the ceiling. an unknown
    /// price is never admitted.
    pub fn admits(&self, price: Option<f64>) -> bool {
        price.map(|p| p <= f64::from(self.0)).unwrap_or_default()
    }
}

impl Default for PriceCeiling {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl From<i64> for PriceCeiling {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for PriceCeiling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_maximum() {
        assert_eq!(PriceCeiling::default().value(), 2000);
    }

    #[test]
    fn test_clamps_into_range() {
        assert_eq!(PriceCeiling::new(-50).value(), 0);
        assert_eq!(PriceCeiling::new(5000).value(), 2000);
        assert_eq!(PriceCeiling::new(1250).value(), 1250);
    }

    #[test]
    fn test_admits_is_inclusive() {
        let ceiling = PriceCeiling::new(600);
        assert!(ceiling.admits(Some(600.0)));
        assert!(!ceiling.admits(Some(600.5)));
        assert!(!ceiling.admits(None));
        assert!(PriceCeiling::new(0).admits(Some(0.0)));
    }

    #[test]
    fn test_deserialize_clamps() {
        let ceiling: PriceCeiling = serde_json::from_str("2500").unwrap();
        assert_eq!(ceiling.value(), 2000);
    }
}
