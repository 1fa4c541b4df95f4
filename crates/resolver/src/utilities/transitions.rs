//! `transition`, `ease`, `duration`, `delay`.

use crate::rule::keyed_only;
use crate::{Entry, NamedTable, ResolveContext, Rule, Token, ValueSpec, first_match};
use preset_values_units::{is_number, is_time};

const TRANSITION_DEFAULT: &str = "color, background-color, border-color, text-decoration-color, fill, stroke, opacity, box-shadow, transform, translate, scale, rotate, filter, -webkit-backdrop-filter, backdrop-filter";

/// Named transition property lists.
const TRANSITION_PROPERTIES: &[(&str, &str)] = &[
    ("all", "all"),
    (
        "colors",
        "color, background-color, border-color, text-decoration-color, fill, stroke",
    ),
    ("opacity", "opacity"),
    ("shadow", "box-shadow"),
    ("transform", "transform, translate, scale, rotate"),
];

const EASINGS: &[(&str, &str)] = &[
    ("in", "var(--ease-in)"),
    ("out", "var(--ease-out)"),
    ("in-out", "var(--ease-in-out)"),
];

const BEHAVIORS: [&str; 2] = ["normal", "discrete"];

/// Unit for bare numeric durations and delays.
const DEFAULT_TIME_UNIT: &str = "ms";

type Render = fn(&Token<'_>) -> String;

fn is_property_list(token: &Token<'_>) -> bool {
    token.value().is_empty()
        || TRANSITION_PROPERTIES
            .iter()
            .any(|(name, _properties)| *name == token.value())
}

fn is_behavior(token: &Token<'_>) -> bool {
    BEHAVIORS.contains(&token.value())
}

fn is_duration(token: &Token<'_>) -> bool {
    token.value() == "initial" || is_number(token.value())
}

/// `value + unit`, with `ms` when the unit is absent.
fn with_time_unit(token: &Token<'_>) -> String {
    let unit = match token.unit() {
        "" => DEFAULT_TIME_UNIT,
        unit => unit,
    };
    format!("{}{unit}", token.value())
}

fn property_list(token: &Token<'_>) -> String {
    let properties = match token.value() {
        "" => TRANSITION_DEFAULT,
        value => TRANSITION_PROPERTIES
            .iter()
            .find(|(name, _properties)| *name == value)
            .map_or(value, |(_name, properties)| *properties),
    };
    format!(
        "transition-property: {properties}; transition-timing-function: var(--default-transition-timing-function); transition-duration: var(--default-transition-duration)"
    )
}

fn behavior(token: &Token<'_>) -> String {
    let value = match token.value() {
        "discrete" => "allow-discrete",
        value => value,
    };
    format!("transition-behavior: {value}")
}

fn duration(token: &Token<'_>) -> String {
    if token.value() == "initial" {
        return "transition-duration: initial".to_owned();
    }
    format!("transition-duration: {}", with_time_unit(token))
}

fn delay(token: &Token<'_>) -> String {
    let joined = token.joined();
    if is_time(&joined) {
        return format!("transition-delay: {joined}");
    }
    format!("transition-delay: {}", with_time_unit(token))
}

const TRANSITION_RULES: [Rule<Render>; 4] = [
    Rule::new("property", is_property_list, property_list),
    Rule::new("behavior", is_behavior, behavior),
    Rule::new("duration", is_duration, duration),
    Rule::new("delay", keyed_only, delay),
];

/// Keys whose rule needs a value to render.
const VALUE_KEYS: [&str; 3] = ["behavior", "duration", "delay"];

/// Property lists, behavior, duration, delay; anything else is the
/// `transition` shorthand.
fn transition(token: &Token<'_>, _context: &ResolveContext) -> Option<String> {
    if token.value().is_empty() && VALUE_KEYS.contains(&token.key()) {
        return None;
    }
    Some(first_match(&TRANSITION_RULES, token).map_or_else(
        || format!("transition: {}", token.joined()),
        |render| render(token),
    ))
}

fn time_value(token: &Token<'_>, _context: &ResolveContext) -> Option<String> {
    if token.value().is_empty() {
        return None;
    }
    Some(with_time_unit(token))
}

pub fn table() -> NamedTable {
    NamedTable::new("transitions")
        .entry("transition", Entry::Compute(transition))
        .entry(
            "ease",
            Entry::with_value(
                "transitionTimingFunction",
                ValueSpec::Alias { aliases: EASINGS },
            ),
        )
        .entry(
            "duration",
            Entry::with_value("transitionDuration", ValueSpec::Resolve(time_value)),
        )
        .entry(
            "delay",
            Entry::with_value("transitionDelay", ValueSpec::Resolve(time_value)),
        )
}
