//! Single-property utilities: grid placement, stacking, opacity and friends.

use crate::{Entry, NamedTable, ResolveContext, Token, ValueSpec};

/// Grid track template for `grid-cols-3` / `grid-rows-3`.
const REPEAT_TRACKS: &str = "repeat({0}, minmax(0, 1fr))";
/// Grid span for `col-span-2` / `row-span-2`.
const SPAN: &str = "span {0} / span {0}";

const PLAIN: [(&str, &str); 19] = [
    ("columns", "columns"),
    ("align", "verticalAlign"),
    ("whitespace", "whiteSpace"),
    ("hyphens", "hyphens"),
    ("content", "content"),
    ("isolation", "isolation"),
    ("order", "order"),
    ("z", "zIndex"),
    ("col", "gridColumn"),
    ("col-start", "gridColumnStart"),
    ("col-end", "gridColumnEnd"),
    ("row", "gridRow"),
    ("row-start", "gridRowStart"),
    ("row-end", "gridRowEnd"),
    ("grid-flow", "gridAutoFlow"),
    ("auto-cols", "gridAutoColumns"),
    ("auto-rows", "gridAutoRows"),
    ("filter", "filter"),
    ("backdrop-filter", "backdropFilter"),
];

pub fn table() -> NamedTable {
    let mut table = NamedTable::new("defaults");
    for (utility, property) in PLAIN {
        table.insert(utility, Entry::property(property));
    }
    table
        .entry("opacity", Entry::template("opacity", "{0}%"))
        .entry("outline-offset", Entry::template("outlineOffset", "{0}px"))
        .entry(
            "grid-cols",
            Entry::template("gridTemplateColumns", REPEAT_TRACKS),
        )
        .entry(
            "grid-rows",
            Entry::template("gridTemplateRows", REPEAT_TRACKS),
        )
        .entry("col-span", Entry::template("gridColumn", SPAN))
        .entry("row-span", Entry::template("gridRow", SPAN))
        .entry("shrink", flex_factor("flexShrink"))
        .entry("grow", flex_factor("flexGrow"))
}

/// `shrink` / `grow`: the bare utility means `1`.
const fn flex_factor(property: &'static str) -> Entry {
    Entry::with_value(property, ValueSpec::Resolve(one_when_empty))
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "signature fixed by the ValueFn fn pointer type"
)]
fn one_when_empty(token: &Token<'_>, _context: &ResolveContext) -> Option<String> {
    let joined = token.joined();
    Some(if joined.is_empty() {
        "1".to_owned()
    } else {
        joined
    })
}
