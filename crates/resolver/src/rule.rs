//! Ordered predicate tables.
//!
//! Multi-purpose utilities classify their token through a fixed list of
//! rules. An explicit token key selects the rule registered under that key;
//! otherwise the first rule whose predicate accepts the token wins.

use crate::Token;

/// Predicate over a token.
pub type Predicate = fn(&Token<'_>) -> bool;

/// One entry of a predicate table.
#[derive(Clone, Copy, Debug)]
pub struct Rule<T> {
    /// Token key that selects this rule directly, e.g. `color`.
    pub key: &'static str,
    /// Sniffs an unkeyed token.
    pub matches: Predicate,
    pub then: T,
}

impl<T> Rule<T> {
    pub const fn new(key: &'static str, matches: Predicate, then: T) -> Self {
        Self { key, matches, then }
    }
}

/// Never matches; for rules reachable only through their key.
pub const fn keyed_only(_token: &Token<'_>) -> bool {
    false
}

/// The rule selected by the token's key, else the first rule whose predicate
/// accepts the token.
pub fn first_match<'rules, T>(rules: &'rules [Rule<T>], token: &Token<'_>) -> Option<&'rules T> {
    let key = token.key();
    if !key.is_empty()
        && let Some(rule) = rules.iter().find(|rule| rule.key == key)
    {
        return Some(&rule.then);
    }
    rules
        .iter()
        .find(|rule| (rule.matches)(token))
        .map(|rule| &rule.then)
}
