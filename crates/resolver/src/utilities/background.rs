//! `bg`, `bg-clip`, `bg-origin`.

use crate::rule::keyed_only;
use crate::values::{color_value, is_color_token, looks_like_position};
use crate::{
    Entry, NamedTable, Properties, PropertySpec, ResolveContext, Rule, Token, ValueSpec,
    first_match,
};
use preset_values_units::is_length;

const ATTACHMENT_KEYWORDS: [&str; 3] = ["fixed", "scroll", "local"];
const REPEAT_KEYWORDS: [&str; 4] = ["repeat", "repeat-x", "repeat-y", "no-repeat"];
const SIZE_KEYWORDS: [&str; 3] = ["cover", "contain", "auto"];

fn is_attachment(token: &Token<'_>) -> bool {
    ATTACHMENT_KEYWORDS.contains(&token.value())
}

fn is_repeat(token: &Token<'_>) -> bool {
    REPEAT_KEYWORDS.contains(&token.value())
}

fn is_size(token: &Token<'_>) -> bool {
    SIZE_KEYWORDS.contains(&token.value()) || is_length(&token.joined())
}

fn is_position(token: &Token<'_>) -> bool {
    looks_like_position(&token.joined())
}

/// Sub-property precedence: color, attachment, repeat, size, position.
const BACKGROUND_RULES: [Rule<&str>; 8] = [
    Rule::new("color", is_color_token, "backgroundColor"),
    Rule::new("attachment", is_attachment, "backgroundAttachment"),
    Rule::new("repeat", is_repeat, "backgroundRepeat"),
    Rule::new("size", is_size, "backgroundSize"),
    Rule::new("position", is_position, "backgroundPosition"),
    Rule::new("image", keyed_only, "backgroundImage"),
    Rule::new("clip", keyed_only, "backgroundClip"),
    Rule::new("origin", keyed_only, "backgroundOrigin"),
];

fn background_property(token: &Token<'_>, _context: &ResolveContext) -> Properties {
    Properties::One(first_match(&BACKGROUND_RULES, token).map_or("background", |name| *name))
}

fn background_value(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    if token.value().is_empty() {
        return None;
    }
    if token.key() == "color" || (token.key().is_empty() && is_color_token(token)) {
        return Some(color_value(token, context));
    }
    Some(token.joined())
}

/// `bg-clip-border` → `border-box`; `text` stays `text`.
fn box_keyword(token: &Token<'_>, _context: &ResolveContext) -> Option<String> {
    match token.value() {
        "" => None,
        "text" => Some("text".to_owned()),
        value => Some(format!("{value}-box")),
    }
}

pub fn table() -> NamedTable {
    NamedTable::new("background")
        .entry(
            "bg",
            Entry::Declare {
                property: PropertySpec::Keyed(background_property),
                value: ValueSpec::Resolve(background_value),
            },
        )
        .entry(
            "bg-clip",
            Entry::with_value("backgroundClip", ValueSpec::Resolve(box_keyword)),
        )
        .entry(
            "bg-origin",
            Entry::with_value("backgroundOrigin", ValueSpec::Resolve(box_keyword)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Resolved;
    use preset_color::ColorFormat;

    fn resolve(token: &Token<'_>) -> Option<Resolved> {
        let context = ResolveContext::new(0.25, ColorFormat::Rgb);
        table()
            .entries
            .iter()
            .find(|(name, _entry)| name == "bg")
            .and_then(|(_name, entry)| entry.resolve(token, &context))
    }

    fn property_of(token: &Token<'_>) -> Option<Vec<&'static str>> {
        match resolve(token)? {
            Resolved::Properties { names, .. } => Some(names),
            Resolved::Declarations(_) => None,
        }
    }

    #[test]
    fn sniffs_sub_property_in_precedence_order() {
        assert_eq!(
            property_of(&Token::new("red")),
            Some(vec!["backgroundColor"])
        );
        assert_eq!(
            property_of(&Token::new("current")),
            Some(vec!["backgroundColor"])
        );
        assert_eq!(
            property_of(&Token::new("fixed")),
            Some(vec!["backgroundAttachment"])
        );
        assert_eq!(
            property_of(&Token::new("no-repeat")),
            Some(vec!["backgroundRepeat"])
        );
        assert_eq!(
            property_of(&Token::new("cover")),
            Some(vec!["backgroundSize"])
        );
        assert_eq!(
            property_of(&Token::new("10").with_unit("px")),
            Some(vec!["backgroundSize"])
        );
        assert_eq!(
            property_of(&Token::new("center")),
            Some(vec!["backgroundPosition"])
        );
        assert_eq!(
            property_of(&Token::new("50").with_unit("%")),
            Some(vec!["backgroundPosition"])
        );
        assert_eq!(property_of(&Token::new("none")), Some(vec!["background"]));
    }

    #[test]
    fn key_short_circuits_sniffing() {
        let image = Token::new("url(a.png)").with_key("image");
        assert_eq!(property_of(&image), Some(vec!["backgroundImage"]));
        let size = Token::new("center").with_key("size");
        assert_eq!(property_of(&size), Some(vec!["backgroundSize"]));
    }

    #[test]
    fn colors_take_an_alpha_modifier() {
        let token = Token::new("rgb(59 130 246)").with_second("50", None);
        assert_eq!(
            resolve(&token).map(|resolved| resolved.to_css()),
            Some("background-color: rgb(59 130 246 / 50%)".to_owned())
        );
        assert_eq!(
            resolve(&Token::new("current")).map(|resolved| resolved.to_css()),
            Some("background-color: currentColor".to_owned())
        );
    }

    #[test]
    fn empty_value_emits_nothing() {
        assert_eq!(resolve(&Token::empty()), None);
    }

    #[test]
    fn clip_and_origin_box_keywords() {
        let context = ResolveContext::default();
        assert_eq!(
            box_keyword(&Token::new("border"), &context),
            Some("border-box".to_owned())
        );
        assert_eq!(
            box_keyword(&Token::new("text"), &context),
            Some("text".to_owned())
        );
        assert_eq!(box_keyword(&Token::empty(), &context), None);
    }
}
