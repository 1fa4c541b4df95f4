//! Static classes: fixed declarations under a class name, such as
//! `truncate` or `hidden`.

use preset_resolver::{Declaration, to_kebab_case};
use std::collections::HashMap;

/// Classes that set several properties at once.
const COMPOUND: [(&str, &[(&str, &str)]); 2] = [
    (
        "truncate",
        &[
            ("overflow", "hidden"),
            ("textOverflow", "ellipsis"),
            ("whiteSpace", "nowrap"),
        ],
    ),
    (
        "outline-hidden",
        &[("outline", "2px solid transparent"), ("outlineOffset", "2px")],
    ),
];

/// One property, many class names: `(property, [(class, value)])`.
const BY_PROPERTY: [(&str, &[(&str, &str)]); 8] = [
    ("fontStyle", &[("italic", "italic"), ("not-italic", "normal")]),
    (
        "textDecorationLine",
        &[
            ("underline", "underline"),
            ("overline", "overline"),
            ("line-through", "line-through"),
            ("no-underline", "none"),
        ],
    ),
    (
        "textDecorationStyle",
        &[
            ("decoration-solid", "solid"),
            ("decoration-double", "double"),
            ("decoration-dotted", "dotted"),
            ("decoration-dashed", "dashed"),
            ("decoration-wavy", "wavy"),
        ],
    ),
    (
        "textDecorationThickness",
        &[
            ("decoration-thickness-from-font", "from-font"),
            ("decoration-thickness-auto", "auto"),
        ],
    ),
    ("textUnderlineOffset", &[("underline-offset-auto", "auto")]),
    (
        "textTransform",
        &[
            ("uppercase", "uppercase"),
            ("lowercase", "lowercase"),
            ("capitalize", "capitalize"),
            ("normal-case", "none"),
        ],
    ),
    (
        "display",
        &[
            ("inline", "inline"),
            ("block", "block"),
            ("inline-block", "inline-block"),
            ("flow-root", "flow-root"),
            ("flex", "flex"),
            ("inline-flex", "inline-flex"),
            ("grid", "grid"),
            ("inline-grid", "inline-grid"),
            ("contents", "contents"),
            ("table", "table"),
            ("inline-table", "inline-table"),
            ("table-caption", "table-caption"),
            ("table-cell", "table-cell"),
            ("table-column", "table-column"),
            ("table-column-group", "table-column-group"),
            ("table-footer-group", "table-footer-group"),
            ("table-header-group", "table-header-group"),
            ("table-row-group", "table-row-group"),
            ("table-row", "table-row"),
            ("list-item", "list-item"),
            ("hidden", "none"),
        ],
    ),
    (
        "position",
        &[
            ("static", "static"),
            ("fixed", "fixed"),
            ("absolute", "absolute"),
            ("relative", "relative"),
            ("sticky", "sticky"),
        ],
    ),
];

/// Class name → declarations, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassTable {
    classes: HashMap<String, Vec<Declaration>>,
}

impl ClassTable {
    /// Every built-in static class.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for (class, declarations) in COMPOUND {
            for (property, value) in declarations {
                table.insert(class, property, value);
            }
        }
        for (property, classes) in BY_PROPERTY {
            for (class, value) in classes {
                table.insert(class, property, value);
            }
        }
        table
    }

    /// Append `property: value` to `class`; `property` may be camelCase.
    pub fn insert(&mut self, class: &str, property: &str, value: &str) {
        self.classes
            .entry(class.to_owned())
            .or_default()
            .push(Declaration::new(to_kebab_case(property), value));
    }

    pub fn get(&self, class: &str) -> Option<&[Declaration]> {
        self.classes.get(class).map(Vec::as_slice)
    }

    /// `property: value` pairs joined with `; `.
    pub fn to_css(&self, class: &str) -> Option<String> {
        let declarations = self.get(class)?;
        Some(
            declarations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Registered class names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_classes_keep_declaration_order() {
        let classes = ClassTable::builtin();
        assert_eq!(
            classes.to_css("truncate"),
            Some("overflow: hidden; text-overflow: ellipsis; white-space: nowrap".to_owned())
        );
        assert_eq!(
            classes.to_css("outline-hidden"),
            Some("outline: 2px solid transparent; outline-offset: 2px".to_owned())
        );
    }

    #[test]
    fn single_property_classes() {
        let classes = ClassTable::builtin();
        assert_eq!(classes.to_css("hidden"), Some("display: none".to_owned()));
        assert_eq!(
            classes.to_css("sticky"),
            Some("position: sticky".to_owned())
        );
        assert_eq!(
            classes.to_css("decoration-wavy"),
            Some("text-decoration-style: wavy".to_owned())
        );
        assert_eq!(
            classes.to_css("underline-offset-auto"),
            Some("text-underline-offset: auto".to_owned())
        );
        assert_eq!(classes.get("unknown"), None);
    }
}
