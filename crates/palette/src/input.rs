//! Ordered color-name → hex input.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Semantic color names mapped to hex strings, in insertion order.
///
/// Re-inserting a name replaces its hex in place, so names stay unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorInput {
    entries: Vec<(String, String)>,
}

impl ColorInput {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add or replace `name`.
    pub fn insert(&mut self, name: impl Into<String>, hex: impl Into<String>) {
        let name = name.into();
        let hex = hex.into();
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.0 == name) else {
            self.entries.push((name, hex));
            return;
        };
        entry.1 = hex;
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, hex: impl Into<String>) -> Self {
        self.insert(name, hex);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.0 == name)
            .map(|entry| entry.1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, hex)| (name.as_str(), hex.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of `self` followed by `other`, with `other` winning on name clashes.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for (name, hex) in other.iter() {
            merged.insert(name, hex);
        }
        merged
    }
}

impl<N: Into<String>, H: Into<String>> FromIterator<(N, H)> for ColorInput {
    fn from_iter<I: IntoIterator<Item = (N, H)>>(iter: I) -> Self {
        let mut input = Self::new();
        for (name, hex) in iter {
            input.insert(name, hex);
        }
        input
    }
}

/// Visitor that keeps JSON object keys in document order.
struct ColorInputVisitor;

impl<'de> Visitor<'de> for ColorInputVisitor {
    type Value = ColorInput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of color names to hex strings")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut input = ColorInput::new();
        while let Some((name, hex)) = map.next_entry::<String, String>()? {
            input.insert(name, hex);
        }
        Ok(input)
    }
}

impl<'de> Deserialize<'de> for ColorInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ColorInputVisitor)
    }
}
