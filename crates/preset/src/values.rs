//! Named values substituted into tokens before resolution.

use preset_palette::PaletteMap;
use std::collections::HashMap;

/// Values available to every utility.
const GLOBAL_VALUES: [(&str, &str); 15] = [
    ("px", "1px"),
    ("fr", "minmax(0, 1fr)"),
    ("full", "100%"),
    ("half", "50%"),
    ("vh", "100vh"),
    ("svh", "100svh"),
    ("lvh", "100lvh"),
    ("dvh", "100dvh"),
    ("vw", "100vw"),
    ("svw", "100svw"),
    ("lvw", "100lvw"),
    ("dvw", "100dvw"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

/// Values that only apply to one utility.
const SCOPED_VALUES: [(&str, &[(&str, &str)]); 2] = [
    (
        "order",
        &[
            ("first", "calc(-infinity)"),
            ("last", "calc(infinity)"),
            ("none", "0"),
        ],
    ),
    (
        "grid-flow",
        &[("row-dense", "row dense"), ("col-dense", "column dense")],
    ),
];

/// Global and per-utility value aliases, e.g. `full` → `100%` or, for
/// `order` only, `first` → `calc(-infinity)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueTable {
    global: HashMap<String, String>,
    scoped: HashMap<String, HashMap<String, String>>,
}

impl ValueTable {
    /// The fixed aliases on top of a color library; a fixed alias wins over
    /// a color of the same name.
    pub fn with_colors(colors: &PaletteMap) -> Self {
        let mut table = Self::default();
        for entry in colors.iter() {
            table.insert(entry.name.clone(), entry.value.clone());
        }
        for (name, value) in GLOBAL_VALUES {
            table.insert(name, value);
        }
        for (utility, values) in SCOPED_VALUES {
            for (name, value) in values {
                table.insert_scoped(utility, *name, *value);
            }
        }
        table
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.global.insert(name.into(), value.into());
    }

    pub fn insert_scoped(
        &mut self,
        utility: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.scoped
            .entry(utility.into())
            .or_default()
            .insert(name.into(), value.into());
    }

    /// The value `name` stands for in `utility`: the utility's own entry
    /// first, then the global one.
    pub fn get(&self, utility: &str, name: &str) -> Option<&str> {
        self.scoped
            .get(utility)
            .and_then(|values| values.get(name))
            .or_else(|| self.global.get(name))
            .map(String::as_str)
    }

    /// Number of global entries.
    pub fn len(&self) -> usize {
        self.global.len()
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.scoped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_values_shadow_global_ones() {
        let mut table = ValueTable::with_colors(&PaletteMap::default());
        table.insert("none", "global-none");
        assert_eq!(table.get("order", "none"), Some("0"));
        assert_eq!(table.get("z", "none"), Some("global-none"));
        assert_eq!(table.get("order", "full"), Some("100%"));
        assert_eq!(table.get("grid-flow", "col-dense"), Some("column dense"));
        assert_eq!(table.get("w", "first"), None);
    }

    #[test]
    fn fixed_values() {
        let table = ValueTable::with_colors(&PaletteMap::default());
        assert_eq!(table.len(), GLOBAL_VALUES.len());
        assert_eq!(table.get("w", "fr"), Some("minmax(0, 1fr)"));
        assert_eq!(table.get("h", "dvh"), Some("100dvh"));
        assert_eq!(table.get("w", "fit"), Some("fit-content"));
    }
}
