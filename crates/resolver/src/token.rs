//! Parsed utility invocation.

/// One utility invocation split into its parts, e.g. `bg-red-500/50` as
/// value `red-500` with second value `50`, or `px-4` as key `x`, value `4`.
///
/// Absent parts read as the empty string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Token<'src> {
    key: Option<&'src str>,
    value: Option<&'src str>,
    unit: Option<&'src str>,
    second_value: Option<&'src str>,
    second_unit: Option<&'src str>,
}

impl<'src> Token<'src> {
    /// A token carrying only a value.
    pub const fn new(value: &'src str) -> Self {
        Self {
            key: None,
            value: Some(value),
            unit: None,
            second_value: None,
            second_unit: None,
        }
    }

    /// A token with no parts at all, as for a bare `ring` or `border`.
    pub const fn empty() -> Self {
        Self {
            key: None,
            value: None,
            unit: None,
            second_value: None,
            second_unit: None,
        }
    }

    #[must_use]
    pub const fn with_key(mut self, key: &'src str) -> Self {
        self.key = Some(key);
        self
    }

    #[must_use]
    pub const fn with_value(mut self, value: &'src str) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub const fn with_unit(mut self, unit: &'src str) -> Self {
        self.unit = Some(unit);
        self
    }

    #[must_use]
    pub const fn with_second(mut self, value: &'src str, unit: Option<&'src str>) -> Self {
        self.second_value = Some(value);
        self.second_unit = unit;
        self
    }

    pub fn key(&self) -> &'src str {
        self.key.unwrap_or_default()
    }

    pub fn value(&self) -> &'src str {
        self.value.unwrap_or_default()
    }

    pub fn unit(&self) -> &'src str {
        self.unit.unwrap_or_default()
    }

    pub fn second_value(&self) -> &'src str {
        self.second_value.unwrap_or_default()
    }

    pub fn second_unit(&self) -> &'src str {
        self.second_unit.unwrap_or_default()
    }

    /// `value + unit`.
    pub fn joined(&self) -> String {
        format!("{}{}", self.value(), self.unit())
    }

    /// `second_value + second_unit`.
    pub fn second_joined(&self) -> String {
        format!("{}{}", self.second_value(), self.second_unit())
    }
}
