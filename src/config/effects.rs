//! Sparse effect records attached to decision options

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// A founder or startup field a decision option can change
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectField {
    Cash,
    MonthlyBurn,
    MonthlyRevenue,
    Customers,
    Employees,
    ProductDevelopment,
    MarketValidation,
    BrandAwareness,
    Energy,
    Stress,
}

/// Signed deltas keyed by [`EffectField`]
///
/// Absent fields mean "no effect". Options rarely touch more than four
/// fields, so the entries live inline, kept sorted by field so equal
/// records compare equal however they were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<EffectField, i64>",
    into = "BTreeMap<EffectField, i64>"
)]
pub struct Effects {
    entries: SmallVec<[(EffectField, i64); 4]>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Effects::set`]
    pub fn with(mut self, field: EffectField, delta: i64) -> Self {
        self.set(field, delta);
        self
    }

    /// Set the delta for `field`, replacing any previous one
    pub fn set(&mut self, field: EffectField, delta: i64) {
        match self.entries.binary_search_by_key(&field, |(f, _)| *f) {
            Ok(index) => self.entries[index].1 = delta,
            Err(index) => self.entries.insert(index, (field, delta)),
        }
    }

    /// Delta for `field`, zero when absent
    #[inline]
    pub fn get(&self, field: EffectField) -> i64 {
        self.entries
            .binary_search_by_key(&field, |(f, _)| *f)
            .map(|index| self.entries[index].1)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EffectField, i64)> + '_ {
        self.entries.iter().copied()
    }
}

impl From<BTreeMap<EffectField, i64>> for Effects {
    fn from(map: BTreeMap<EffectField, i64>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl From<Effects> for BTreeMap<EffectField, i64> {
    fn from(effects: Effects) -> Self {
        effects.entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_field_is_zero() {
        let effects = Effects::new().with(EffectField::Cash, -500);
        assert_eq!(effects.get(EffectField::Cash), -500);
        assert_eq!(effects.get(EffectField::Stress), 0);
        assert_eq!(effects.iter().count(), 1);
    }

    #[test]
    fn test_set_replaces() {
        let mut effects = Effects::new().with(EffectField::Energy, -15);
        effects.set(EffectField::Energy, 10);
        assert_eq!(effects.get(EffectField::Energy), 10);
        assert_eq!(effects.iter().count(), 1);
    }

    #[test]
    fn test_deserialize_sparse_object() {
        let effects: Effects =
            serde_json::from_str(r#"{"cash": -2000, "marketValidation": 30, "stress": 10}"#)
                .unwrap();
        assert_eq!(effects.get(EffectField::Cash), -2000);
        assert_eq!(effects.get(EffectField::MarketValidation), 30);
        assert_eq!(effects.get(EffectField::Stress), 10);
        assert_eq!(effects.get(EffectField::Customers), 0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Effects, _> = serde_json::from_str(r#"{"happiness": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_order_does_not_matter() {
        let forward = Effects::new()
            .with(EffectField::Cash, -1000)
            .with(EffectField::ProductDevelopment, 15)
            .with(EffectField::MarketValidation, 15);
        let backward = Effects::new()
            .with(EffectField::MarketValidation, 15)
            .with(EffectField::ProductDevelopment, 15)
            .with(EffectField::Cash, -1000);
        assert_eq!(forward, backward);

        let json = serde_json::to_string(&forward).unwrap();
        let parsed: Effects = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, forward);
    }
}
