//! Budget registry
//!
//! Maps a month name or a category name to a spending limit. Keys are stored
//! capitalized and keep the order in which they were first set; the registry
//! serializes as a JSON object in that order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::calendar::capitalize;
use super::money::Money;

/// A single budget limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetEntry {
    pub key: String,
    pub limit: Money,
}

/// Collection of budget limits in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetRegistry {
    entries: Vec<BudgetEntry>,
}

impl BudgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for a key, returning the previous limit if there was one
    ///
    /// The key is capitalized first. Overwriting keeps the original position.
    pub fn set(&mut self, key: &str, limit: Money) -> Option<Money> {
        let key = capitalize(key);
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.limit, limit)),
            None => {
                self.entries.push(BudgetEntry { key, limit });
                None
            }
        }
    }

    /// Look up the limit for a key; `None` means no budget is set
    pub fn get(&self, key: &str) -> Option<Money> {
        let key = capitalize(key);
        self.entries.iter().find(|e| e.key == key).map(|e| e.limit)
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &BudgetEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for BudgetRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.limit)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BudgetRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RegistryVisitor)
    }
}

struct RegistryVisitor;

impl<'de> Visitor<'de> for RegistryVisitor {
    type Value = BudgetRegistry;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of budget names to numeric limits")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut registry = BudgetRegistry::new();
        while let Some((key, limit)) = access.next_entry::<String, Money>()? {
            registry.set(&key, limit);
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_set_normalizes_key() {
        let mut registry = BudgetRegistry::new();
        registry.set("food", Money::new(dec!(400)));

        assert_eq!(registry.get("Food"), Some(Money::new(dec!(400))));
        assert_eq!(registry.get("FOOD"), Some(Money::new(dec!(400))));
        assert_eq!(registry.iter().next().unwrap().key, "Food");
    }

    #[test]
    fn test_unset_is_not_zero() {
        let registry = BudgetRegistry::new();
        assert_eq!(registry.get("June"), None);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut registry = BudgetRegistry::new();
        registry.set("June", Money::new(dec!(1000)));
        registry.set("Food", Money::new(dec!(400)));

        let previous = registry.set("june", Money::new(dec!(1200)));

        assert_eq!(previous, Some(Money::new(dec!(1000))));
        assert_eq!(registry.len(), 2);
        let keys: Vec<_> = registry.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["June", "Food"]);
        assert_eq!(registry.get("June"), Some(Money::new(dec!(1200))));
    }

    #[test]
    fn test_negative_limits_are_accepted() {
        let mut registry = BudgetRegistry::new();
        registry.set("Food", Money::new(dec!(-5)));
        assert_eq!(registry.get("Food"), Some(Money::new(dec!(-5))));
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut registry = BudgetRegistry::new();
        registry.set("Travel", Money::new(dec!(300)));
        registry.set("Food", Money::new(dec!(400.5)));

        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, r#"{"Travel":300,"Food":400.5}"#);

        let restored: BudgetRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, registry);
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_limit() {
        let result = serde_json::from_str::<BudgetRegistry>(r#"{"Food": "lots"}"#);
        assert!(result.is_err());
    }
}
