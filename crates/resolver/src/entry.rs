//! Resolver entries and their evaluation.

use crate::declaration::{Declaration, parse_declarations, to_kebab_case};
use crate::{ResolveContext, Token};
use preset_values_units::{is_number, scale_sizing, substitute};

/// Decides the target properties from a token.
pub type PropertyFn = fn(&Token<'_>, &ResolveContext) -> Properties;
/// Decides the value from a token; `None` emits nothing.
pub type ValueFn = fn(&Token<'_>, &ResolveContext) -> Option<String>;
/// Renders the full declaration text; `None` emits nothing.
pub type DeclarationFn = fn(&Token<'_>, &ResolveContext) -> Option<String>;
/// Named values, searched front to back.
pub type Aliases = &'static [(&'static str, &'static str)];

/// One or more CSS property names, in camelCase (`backgroundColor`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Properties {
    One(&'static str),
    Many(&'static [&'static str]),
}

impl Properties {
    pub fn names(self) -> Vec<&'static str> {
        match self {
            Self::One(name) => vec![name],
            Self::Many(names) => names.to_vec(),
        }
    }
}

/// How an entry picks its target properties.
#[derive(Clone, Copy, Debug)]
pub enum PropertySpec {
    Fixed(Properties),
    /// A key suffix (`x`, `t`, `tl`, `min`, …) selects the properties; an
    /// absent or unknown key falls back to `base`.
    Directional {
        base: Properties,
        keys: &'static [(&'static str, Properties)],
    },
    Keyed(PropertyFn),
}

impl PropertySpec {
    fn resolve(&self, token: &Token<'_>, context: &ResolveContext) -> Properties {
        match *self {
            Self::Fixed(properties) => properties,
            Self::Directional { base, keys } => {
                let key = token.key();
                keys.iter()
                    .find(|(suffix, _properties)| *suffix == key)
                    .map_or(base, |(_suffix, properties)| *properties)
            }
            Self::Keyed(resolve) => resolve(token, context),
        }
    }
}

/// A CSS filter function applied to the token value, e.g. `brightness(50%)`.
///
/// The same function backs a `filter` and a `backdrop-filter` utility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterFunction {
    pub name: &'static str,
    /// Unit appended when the token has none.
    pub default_unit: &'static str,
    /// Argument used when the token has no value, e.g. `100%` for `grayscale`.
    pub empty_value: Option<&'static str>,
}

impl FilterFunction {
    pub const fn new(name: &'static str, default_unit: &'static str) -> Self {
        Self {
            name,
            default_unit,
            empty_value: None,
        }
    }

    #[must_use]
    pub const fn full_when_empty(mut self) -> Self {
        self.empty_value = Some("100%");
        self
    }

    pub fn apply(&self, token: &Token<'_>) -> Option<String> {
        let value = token.value();
        let argument = if value.is_empty() {
            self.empty_value?.to_owned()
        } else {
            let unit = match token.unit() {
                "" => self.default_unit,
                unit => unit,
            };
            format!("{value}{unit}")
        };
        Some(format!("{}({argument})", self.name))
    }
}

/// How an entry computes its value.
#[derive(Clone, Copy, Debug)]
pub enum ValueSpec {
    /// `value + unit`.
    Raw,
    /// Numeric values are substituted into `{0}`; anything else passes through.
    Template(&'static str),
    /// Named sizes from each table in turn, then numbers scaled by the
    /// spacing multiplier.
    Sizing { aliases: &'static [Aliases] },
    /// Named values first, then `value + unit`.
    Alias { aliases: Aliases },
    Filter(FilterFunction),
    Resolve(ValueFn),
}

impl ValueSpec {
    fn resolve(&self, token: &Token<'_>, context: &ResolveContext) -> Option<String> {
        let joined = token.joined();
        match *self {
            Self::Raw => non_empty(joined),
            Self::Template(template) => {
                if is_number(token.value()) {
                    Some(substitute(template, token.value()))
                } else {
                    non_empty(joined)
                }
            }
            Self::Sizing { aliases } => aliases
                .iter()
                .find_map(|table| lookup(table, &joined))
                .map(str::to_owned)
                .or_else(|| non_empty(scale_sizing(token.value(), token.unit(), context.sizing))),
            Self::Alias { aliases } => lookup(aliases, token.value())
                .map(str::to_owned)
                .or_else(|| non_empty(joined)),
            Self::Filter(function) => function.apply(token),
            Self::Resolve(resolve) => resolve(token, context),
        }
    }
}

/// A registered utility.
#[derive(Clone, Copy, Debug)]
pub enum Entry {
    Declare {
        property: PropertySpec,
        value: ValueSpec,
    },
    /// The utility renders its declarations itself, bypassing value resolution.
    Compute(DeclarationFn),
}

impl Entry {
    /// A fixed property whose value passes through unchanged.
    pub const fn property(name: &'static str) -> Self {
        Self::Declare {
            property: PropertySpec::Fixed(Properties::One(name)),
            value: ValueSpec::Raw,
        }
    }

    pub const fn with_value(name: &'static str, value: ValueSpec) -> Self {
        Self::Declare {
            property: PropertySpec::Fixed(Properties::One(name)),
            value,
        }
    }

    pub const fn template(name: &'static str, template: &'static str) -> Self {
        Self::with_value(name, ValueSpec::Template(template))
    }

    pub fn resolve(&self, token: &Token<'_>, context: &ResolveContext) -> Option<Resolved> {
        match self {
            Self::Declare { property, value } => {
                let value = value.resolve(token, context)?;
                let names = property.resolve(token, context).names();
                Some(Resolved::Properties { names, value })
            }
            Self::Compute(render) => render(token, context).map(Resolved::Declarations),
        }
    }
}

/// The outcome of resolving one token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// One value for one or more properties.
    Properties {
        names: Vec<&'static str>,
        value: String,
    },
    /// Declaration text rendered by the utility, e.g. `font-size: 1rem; line-height: 1.5`.
    Declarations(String),
}

impl Resolved {
    /// The declarations with kebab-case property names.
    pub fn declarations(&self) -> Vec<Declaration> {
        match self {
            Self::Properties { names, value } => names
                .iter()
                .map(|name| Declaration::new(to_kebab_case(name), value.clone()))
                .collect(),
            Self::Declarations(text) => parse_declarations(text),
        }
    }

    /// `property: value` pairs joined with `; `.
    pub fn to_css(&self) -> String {
        self.declarations()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

pub fn lookup<'table>(
    aliases: &'table [(&'static str, &'static str)],
    name: &str,
) -> Option<&'table str> {
    aliases
        .iter()
        .find(|(alias, _value)| *alias == name)
        .map(|(_alias, value)| *value)
}
