//! Spacing-scale utilities: gaps, margins, padding, widths and heights.

use crate::{Aliases, Entry, NamedTable, Properties, PropertySpec, ValueSpec};

/// Named container widths shared by `w`, `h` and `size`.
pub const CONTAINER_SIZES: Aliases = &[
    ("3xs", "16rem"),
    ("2xs", "18rem"),
    ("xs", "20rem"),
    ("sm", "24rem"),
    ("md", "28rem"),
    ("lg", "32rem"),
    ("xl", "36rem"),
    ("2xl", "42rem"),
    ("3xl", "48rem"),
    ("4xl", "56rem"),
    ("5xl", "64rem"),
    ("6xl", "72rem"),
    ("7xl", "80rem"),
];

/// `w` sizes: the container widths plus the viewport width.
const WIDTH_SIZES: &[Aliases] = &[CONTAINER_SIZES, &[("screen", "100vw")]];

/// `h` sizes: the container widths plus the viewport height.
const HEIGHT_SIZES: &[Aliases] = &[CONTAINER_SIZES, &[("screen", "100vh")]];

/// Single-property spacing utilities.
const SPACING_PROPERTIES: [(&str, &str); 24] = [
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("inset", "inset"),
    ("gap", "gap"),
    ("gap-x", "columnGap"),
    ("gap-y", "rowGap"),
    ("min-w", "minWidth"),
    ("min-h", "minHeight"),
    ("max-w", "maxWidth"),
    ("max-h", "maxHeight"),
    ("mt", "marginTop"),
    ("mr", "marginRight"),
    ("mb", "marginBottom"),
    ("ml", "marginLeft"),
    ("mx", "marginInline"),
    ("my", "marginBlock"),
    ("pt", "paddingTop"),
    ("pr", "paddingRight"),
    ("pb", "paddingBottom"),
    ("pl", "paddingLeft"),
    ("py", "paddingBlock"),
    ("px", "paddingInline"),
];

const WIDTH_HEIGHT: Properties = Properties::Many(&["width", "height"]);

const PADDING_SIDES: &[(&str, Properties)] = &[
    ("x", Properties::One("paddingInline")),
    ("y", Properties::One("paddingBlock")),
    ("t", Properties::One("paddingTop")),
    ("r", Properties::One("paddingRight")),
    ("b", Properties::One("paddingBottom")),
    ("l", Properties::One("paddingLeft")),
];

const MARGIN_SIDES: &[(&str, Properties)] = &[
    ("x", Properties::One("marginInline")),
    ("y", Properties::One("marginBlock")),
    ("t", Properties::One("marginTop")),
    ("r", Properties::One("marginRight")),
    ("b", Properties::One("marginBottom")),
    ("l", Properties::One("marginLeft")),
];

const WIDTH_BOUNDS: &[(&str, Properties)] = &[
    ("min", Properties::One("minWidth")),
    ("max", Properties::One("maxWidth")),
];

const HEIGHT_BOUNDS: &[(&str, Properties)] = &[
    ("min", Properties::One("minHeight")),
    ("max", Properties::One("maxHeight")),
];

const fn scaled(property: PropertySpec, aliases: &'static [Aliases]) -> Entry {
    Entry::Declare {
        property,
        value: ValueSpec::Sizing { aliases },
    }
}

const fn directional(
    base: &'static str,
    keys: &'static [(&'static str, Properties)],
    aliases: &'static [Aliases],
) -> Entry {
    scaled(
        PropertySpec::Directional {
            base: Properties::One(base),
            keys,
        },
        aliases,
    )
}

/// One entry per fixed spacing property, plus a plain `size`.
pub fn sizing_table() -> NamedTable {
    let mut table = NamedTable::new("sizing");
    for (utility, property) in SPACING_PROPERTIES {
        let spec = PropertySpec::Fixed(Properties::One(property));
        table.insert(utility, scaled(spec, &[]));
    }
    table.entry("size", scaled(PropertySpec::Fixed(WIDTH_HEIGHT), &[]))
}

/// Keyed spacing utilities: `w`, `h`, `size`, `p`, `m`.
pub fn spacing_table() -> NamedTable {
    NamedTable::new("spacing")
        .entry("w", directional("width", WIDTH_BOUNDS, WIDTH_SIZES))
        .entry("h", directional("height", HEIGHT_BOUNDS, HEIGHT_SIZES))
        .entry(
            "size",
            scaled(PropertySpec::Fixed(WIDTH_HEIGHT), &[CONTAINER_SIZES]),
        )
        .entry("p", directional("padding", PADDING_SIDES, &[]))
        .entry("m", directional("margin", MARGIN_SIDES, &[]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ResolveContext, Token};

    fn css(table: &NamedTable, utility: &str, token: &Token<'_>) -> Option<String> {
        table
            .entries
            .iter()
            .find(|(name, _entry)| name == utility)
            .and_then(|(_name, entry)| entry.resolve(token, &ResolveContext::default()))
            .map(|resolved| resolved.to_css())
    }

    #[test]
    fn fixed_spacing_scales_and_keeps_zero_unitless() {
        let sizing = sizing_table();
        assert_eq!(
            css(&sizing, "gap-x", &Token::new("2")),
            Some("column-gap: 0.5rem".to_owned())
        );
        assert_eq!(
            css(&sizing, "top", &Token::new("0")),
            Some("top: 0".to_owned())
        );
        assert_eq!(
            css(&sizing, "max-w", &Token::new("50").with_unit("%")),
            Some("max-width: 50%".to_owned())
        );
    }

    #[test]
    fn width_bounds_and_named_sizes() {
        let spacing = spacing_table();
        assert_eq!(
            css(&spacing, "w", &Token::new("md").with_key("max")),
            Some("max-width: 28rem".to_owned())
        );
        assert_eq!(
            css(&spacing, "h", &Token::new("screen")),
            Some("height: 100vh".to_owned())
        );
        assert_eq!(
            css(&spacing, "w", &Token::new("screen")),
            Some("width: 100vw".to_owned())
        );
        assert_eq!(
            css(&spacing, "size", &Token::new("xs")),
            Some("width: 20rem; height: 20rem".to_owned())
        );
    }

    #[test]
    fn every_container_size_applies_to_width_and_height() {
        let spacing = spacing_table();
        for (name, size) in CONTAINER_SIZES {
            assert_eq!(
                css(&spacing, "w", &Token::new(name)),
                Some(format!("width: {size}"))
            );
            assert_eq!(
                css(&spacing, "h", &Token::new(name)),
                Some(format!("height: {size}"))
            );
        }
    }

    #[test]
    fn plain_size_has_no_named_sizes() {
        assert_eq!(
            css(&sizing_table(), "size", &Token::new("xs")),
            Some("width: xs; height: xs".to_owned())
        );
    }
}
