//! Utility name → entry lookup assembled from named tables.

use crate::{Entry, ResolveContext, Resolved, Token};
use log::{debug, trace};
use std::collections::HashMap;

/// A named group of entries, e.g. all filter utilities.
#[derive(Clone, Debug)]
pub struct NamedTable {
    pub name: &'static str,
    pub entries: Vec<(String, Entry)>,
}

impl NamedTable {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn entry(mut self, utility: impl Into<String>, entry: Entry) -> Self {
        self.entries.push((utility.into(), entry));
        self
    }

    pub fn insert(&mut self, utility: impl Into<String>, entry: Entry) {
        self.entries.push((utility.into(), entry));
    }
}

/// Merged resolver entries keyed by utility name.
#[derive(Clone, Debug, Default)]
pub struct PropertyTable {
    entries: HashMap<String, (Entry, &'static str)>,
}

impl PropertyTable {
    /// Merge `tables` in order. When two tables define the same utility the
    /// later table wins; each override is logged.
    pub fn merge(tables: impl IntoIterator<Item = NamedTable>) -> Self {
        let mut merged = Self::default();
        for table in tables {
            for (utility, entry) in table.entries {
                if let Some((_previous, owner)) = merged.entries.get(&utility) {
                    debug!(
                        "[TABLE] '{utility}' from table '{owner}' overridden by table '{}'",
                        table.name
                    );
                }
                merged.entries.insert(utility, (entry, table.name));
            }
        }
        debug!("[TABLE] merged {} utilities", merged.entries.len());
        merged
    }

    pub fn get(&self, utility: &str) -> Option<&Entry> {
        self.entries.get(utility).map(|(entry, _owner)| entry)
    }

    /// Name of the table that supplied `utility`.
    pub fn source_of(&self, utility: &str) -> Option<&'static str> {
        self.entries.get(utility).map(|(_entry, owner)| *owner)
    }

    pub fn contains(&self, utility: &str) -> bool {
        self.entries.contains_key(utility)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered utility names, sorted.
    pub fn utilities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve `token` through the entry registered for `utility`.
    ///
    /// Returns `None` for unknown utilities and for tokens the entry emits
    /// nothing for.
    pub fn resolve(
        &self,
        utility: &str,
        token: &Token<'_>,
        context: &ResolveContext,
    ) -> Option<Resolved> {
        let resolved = self.get(utility)?.resolve(token, context);
        trace!("[TABLE] {utility} {token:?} -> {resolved:?}");
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_table_wins() {
        let first = NamedTable::new("first").entry("size", Entry::property("width"));
        let second = NamedTable::new("second").entry("size", Entry::property("height"));
        let table = PropertyTable::merge([first, second]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.source_of("size"), Some("second"));
        let height = table.resolve("size", &Token::new("1px"), &ResolveContext::default());
        assert_eq!(
            height.map(|resolved| resolved.to_css()),
            Some("height: 1px".to_owned())
        );
    }

    #[test]
    fn unknown_utility_resolves_to_nothing() {
        let table = PropertyTable::merge([NamedTable::new("empty")]);
        assert!(table.is_empty());
        assert_eq!(
            table.resolve("nope", &Token::new("1"), &ResolveContext::default()),
            None
        );
    }
}
