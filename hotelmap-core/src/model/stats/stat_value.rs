use serde::{Serialize, Serializer};

/// label shown, and serialized, for an aggregate with nothing to aggregate
pub const NOT_APPLICABLE: &str = "N/A";

/// an aggregate over a possibly empty set. `NotApplicable` is never
/// confused with zero: it serializes as the string "N/A".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatValue<T> {
    Value(T),
    NotApplicable,
}

impl<T> StatValue<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            StatValue::Value(v) => Some(v),
            StatValue::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, StatValue::Value(_))
    }
}

impl<T> From<Option<T>> for StatValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => StatValue::Value(v),
            None => StatValue::NotApplicable,
        }
    }
}

impl<T: Serialize> Serialize for StatValue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StatValue::Value(v) => v.serialize(serializer),
            StatValue::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}
