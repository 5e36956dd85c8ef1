//! Consistency inference for rules that compare a measurement against a
//! preferred value.
//!
//! A rule either has an explicit preferred value, or adopts the first value
//! it measures and holds the rest of the document to it.

use serde_json::Value;

/// Where the preferred value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// A configured value used for every observation.
    Explicit(i64),
    /// Adopt the first observation.
    Consistent,
}

impl Preference {
    /// Normalizes a configured value.
    ///
    /// Only positive integers are explicit; anything else (including
    /// `"consistent"`, `null` and `0`) means infer.
    pub fn from_value(value: &Value) -> Self {
        match positive_integer(value).and_then(|preferred| i64::try_from(preferred).ok()) {
            Some(preferred) => Self::Explicit(preferred),
            None => Self::Consistent,
        }
    }
}

/// Reads a positive integer from a JSON number.
///
/// Integral floats such as `4.0` count; fractions do not.
pub fn positive_integer(value: &Value) -> Option<u64> {
    let number = match value.as_u64() {
        Some(number) => number,
        None => {
            let float = value.as_f64()?;
            if float.fract() != 0.0 || float > u64::MAX as f64 {
                return None;
            }
            float as u64
        }
    };
    (number > 0).then_some(number)
}

/// Outcome of comparing one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// The observation became the preferred value.
    Seeded,
    /// The observation equals the preferred value.
    Matches,
    /// `preferred - measured`, never zero.
    Differs(i64),
}

/// Tracks the effective preferred value across one rule invocation.
#[derive(Debug, Clone)]
pub struct ConsistencyTracker {
    preference: Preference,
    inferred: Option<i64>,
}

impl ConsistencyTracker {
    pub fn new(preference: Preference) -> Self {
        Self {
            preference,
            inferred: None,
        }
    }

    /// The value observations are compared against, if known yet.
    pub fn preferred(&self) -> Option<i64> {
        match self.preference {
            Preference::Explicit(value) => Some(value),
            Preference::Consistent => self.inferred,
        }
    }

    /// Compares `measured` against the preferred value, seeding it first if
    /// this is the first observation in consistent mode.
    pub fn observe(&mut self, measured: i64) -> Comparison {
        let Some(preferred) = self.preferred() else {
            self.inferred = Some(measured);
            return Comparison::Seeded;
        };

        match preferred - measured {
            0 => Comparison::Matches,
            delta => Comparison::Differs(delta),
        }
    }
}
