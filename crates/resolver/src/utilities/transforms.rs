//! `move`, `move-x`, `move-y`.
//!
//! The single-axis utilities write their own axis variable and compose
//! `translate` from both, so `move-x-4 move-y-2` translates on both axes.
//! Both variables default to `0` in the root block.

use crate::{Entry, NamedTable, ResolveContext, Token, ValueSpec};
use preset_values_units::scale_sizing;

const COMPOSED_TRANSLATE: &str = "translate: var(--tui-move-x) var(--tui-move-y)";

/// Both axes; a missing second value repeats the first.
fn move_both(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    if token.value().is_empty() {
        return None;
    }
    let first = scale_sizing(token.value(), token.unit(), context.sizing);
    let second = match token.second_value() {
        "" => first.clone(),
        second => scale_sizing(second, token.second_unit(), context.sizing),
    };
    Some(format!("{first} {second}"))
}

fn axis(name: &str, token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    if token.value().is_empty() {
        return None;
    }
    let offset = scale_sizing(token.value(), token.unit(), context.sizing);
    Some(format!("--tui-move-{name}: {offset}; {COMPOSED_TRANSLATE}"))
}

fn move_x(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    axis("x", token, context)
}

fn move_y(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    axis("y", token, context)
}

pub fn table() -> NamedTable {
    NamedTable::new("transforms")
        .entry(
            "move",
            Entry::with_value("translate", ValueSpec::Resolve(move_both)),
        )
        .entry("move-x", Entry::Compute(move_x))
        .entry("move-y", Entry::Compute(move_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_scales_both_axes() {
        let context = ResolveContext::default();
        assert_eq!(
            move_both(&Token::new("4"), &context),
            Some("1rem 1rem".to_owned())
        );
        assert_eq!(
            move_both(&Token::new("4").with_second("50", Some("%")), &context),
            Some("1rem 50%".to_owned())
        );
        let mixed = Token::new("10").with_unit("px").with_second("2", None);
        assert_eq!(move_both(&mixed, &context), Some("10px 0.5rem".to_owned()));
        assert_eq!(move_both(&Token::empty(), &context), None);
    }

    #[test]
    fn single_axis_keeps_the_other() {
        let context = ResolveContext::default();
        assert_eq!(
            move_x(&Token::new("8"), &context),
            Some("--tui-move-x: 2rem; translate: var(--tui-move-x) var(--tui-move-y)".to_owned())
        );
        assert_eq!(
            move_y(&Token::new("-50").with_unit("%"), &context),
            Some("--tui-move-y: -50%; translate: var(--tui-move-x) var(--tui-move-y)".to_owned())
        );
    }
}
