//! Value dimension domain model.
//!
//! Every profile is expressed over the same eight value dimensions. Scores are
//! stored in a dense struct with one named field per dimension so that every
//! arithmetic helper is total by construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Add;

/// One of the eight value dimensions a profile is scored on.
///
/// Declaration order is significant: it is the stable tie-break order used
/// when ranking values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Loyalty,
    Justice,
    Compassion,
    Ambition,
    Security,
    Freedom,
    Honesty,
    Harmony,
}

impl Value {
    /// All values in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Loyalty,
        Self::Justice,
        Self::Compassion,
        Self::Ambition,
        Self::Security,
        Self::Freedom,
        Self::Honesty,
        Self::Harmony,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loyalty => "loyalty",
            Self::Justice => "justice",
            Self::Compassion => "compassion",
            Self::Ambition => "ambition",
            Self::Security => "security",
            Self::Freedom => "freedom",
            Self::Honesty => "honesty",
            Self::Harmony => "harmony",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loyalty => "Loyalty",
            Self::Justice => "Justice",
            Self::Compassion => "Compassion",
            Self::Ambition => "Ambition",
            Self::Security => "Security",
            Self::Freedom => "Freedom",
            Self::Honesty => "Honesty",
            Self::Harmony => "Harmony",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "loyalty" => Some(Self::Loyalty),
            "justice" => Some(Self::Justice),
            "compassion" => Some(Self::Compassion),
            "ambition" => Some(Self::Ambition),
            "security" => Some(Self::Security),
            "freedom" => Some(Self::Freedom),
            "honesty" => Some(Self::Honesty),
            "harmony" => Some(Self::Harmony),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse per-value points carried by a question option or an answer.
///
/// Values not present contribute nothing.
pub type ValueDelta = BTreeMap<Value, u32>;

/// Dense score record: one entry per value dimension.
///
/// Raw scores use the default `u32`; normalized scores are `ValueScores<f64>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValueScores<T = u32> {
    pub loyalty: T,
    pub justice: T,
    pub compassion: T,
    pub ambition: T,
    pub security: T,
    pub freedom: T,
    pub honesty: T,
    pub harmony: T,
}

/// Normalized scores, each in `[0, 1]`.
pub type NormalizedScores = ValueScores<f64>;

impl<T: Copy> ValueScores<T> {
    /// Every dimension set to `score`.
    pub const fn splat(score: T) -> Self {
        Self {
            loyalty: score,
            justice: score,
            compassion: score,
            ambition: score,
            security: score,
            freedom: score,
            honesty: score,
            harmony: score,
        }
    }

    pub fn get(&self, value: Value) -> T {
        match value {
            Value::Loyalty => self.loyalty,
            Value::Justice => self.justice,
            Value::Compassion => self.compassion,
            Value::Ambition => self.ambition,
            Value::Security => self.security,
            Value::Freedom => self.freedom,
            Value::Honesty => self.honesty,
            Value::Harmony => self.harmony,
        }
    }

    pub fn get_mut(&mut self, value: Value) -> &mut T {
        match value {
            Value::Loyalty => &mut self.loyalty,
            Value::Justice => &mut self.justice,
            Value::Compassion => &mut self.compassion,
            Value::Ambition => &mut self.ambition,
            Value::Security => &mut self.security,
            Value::Freedom => &mut self.freedom,
            Value::Honesty => &mut self.honesty,
            Value::Harmony => &mut self.harmony,
        }
    }

    /// `(value, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Value, T)> + '_ {
        Value::ALL.iter().map(move |&value| (value, self.get(value)))
    }

    /// Apply `f` to every dimension.
    pub fn map<U>(&self, mut f: impl FnMut(Value, T) -> U) -> ValueScores<U> {
        ValueScores {
            loyalty: f(Value::Loyalty, self.loyalty),
            justice: f(Value::Justice, self.justice),
            compassion: f(Value::Compassion, self.compassion),
            ambition: f(Value::Ambition, self.ambition),
            security: f(Value::Security, self.security),
            freedom: f(Value::Freedom, self.freedom),
            honesty: f(Value::Honesty, self.honesty),
            harmony: f(Value::Harmony, self.harmony),
        }
    }

    /// Combine two records dimension by dimension.
    pub fn zip_with<U: Copy, R>(
        &self,
        other: &ValueScores<U>,
        mut f: impl FnMut(T, U) -> R,
    ) -> ValueScores<R> {
        self.map(|value, score| f(score, other.get(value)))
    }
}

impl ValueScores<u32> {
    pub const fn zero() -> Self {
        Self::splat(0)
    }

    /// Add a sparse delta in place, saturating at `u32::MAX`.
    pub fn add_delta(&mut self, delta: &ValueDelta) {
        for (&value, &points) in delta {
            let score = self.get_mut(value);
            *score = score.saturating_add(points);
        }
    }

    #[must_use]
    pub fn plus_delta(&self, delta: &ValueDelta) -> Self {
        let mut next = *self;
        next.add_delta(delta);
        next
    }

    #[must_use]
    pub fn elementwise_max(&self, other: &Self) -> Self {
        self.zip_with(other, u32::max)
    }

    /// True when every dimension is at least the corresponding one in `other`.
    pub fn dominates(&self, other: &Self) -> bool {
        self.iter().all(|(value, score)| score >= other.get(value))
    }
}

impl Add for ValueScores<u32> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, u32::saturating_add)
    }
}

impl From<&ValueDelta> for ValueScores<u32> {
    fn from(delta: &ValueDelta) -> Self {
        Self::zero().plus_delta(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(pairs: &[(Value, u32)]) -> ValueDelta {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_value_round_trip_through_str() {
        for value in Value::ALL {
            assert_eq!(Value::from_str(value.as_str()), Some(value));
        }
        assert_eq!(Value::from_str("HONESTY"), Some(Value::Honesty));
        assert_eq!(Value::from_str("greed"), None);
    }

    #[test]
    fn test_labels_are_capitalized() {
        assert_eq!(Value::Compassion.label(), "Compassion");
        assert_eq!(Value::Harmony.label(), "Harmony");
    }

    #[test]
    fn test_plus_delta_only_touches_listed_values() {
        let scores = ValueScores::zero().plus_delta(&delta(&[(Value::Honesty, 3), (Value::Justice, 2)]));
        assert_eq!(scores.honesty, 3);
        assert_eq!(scores.justice, 2);
        assert_eq!(scores.loyalty, 0);
        assert_eq!(scores.harmony, 0);
    }

    #[test]
    fn test_elementwise_max_and_add() {
        let a = ValueScores { loyalty: 4, freedom: 1, ..ValueScores::zero() };
        let b = ValueScores { loyalty: 2, freedom: 5, ..ValueScores::zero() };

        let max = a.elementwise_max(&b);
        assert_eq!(max.loyalty, 4);
        assert_eq!(max.freedom, 5);

        let sum = a + b;
        assert_eq!(sum.loyalty, 6);
        assert_eq!(sum.freedom, 6);
        assert!(sum.dominates(&max));
        assert!(!a.dominates(&b));
    }

    #[test]
    fn test_iter_follows_declaration_order() {
        let values: Vec<Value> = ValueScores::zero().iter().map(|(v, _)| v).collect();
        assert_eq!(values, Value::ALL.to_vec());
    }

    #[test]
    fn test_serializes_with_named_fields() {
        let json = serde_json::to_value(ValueScores { ambition: 8, ..ValueScores::zero() }).unwrap();
        assert_eq!(json["ambition"], 8);
        assert_eq!(json["harmony"], 0);
    }

    #[test]
    fn test_delta_deserializes_from_value_keys() {
        let parsed: ValueDelta = serde_json::from_str(r#"{"honesty": 3, "justice": 1}"#).unwrap();
        assert_eq!(parsed.get(&Value::Honesty), Some(&3));
        assert_eq!(parsed.get(&Value::Justice), Some(&1));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let mut scores = ValueScores { honesty: u32::MAX - 1, ..ValueScores::zero() };
        scores.add_delta(&delta(&[(Value::Honesty, 5), (Value::Loyalty, 2)]));
        assert_eq!(scores.honesty, u32::MAX);
        assert_eq!(scores.loyalty, 2);

        let sum = scores + ValueScores::splat(u32::MAX);
        assert_eq!(sum, ValueScores::splat(u32::MAX));
    }
}
