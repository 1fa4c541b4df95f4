//! Assembles the resolver table, value aliases, classes and root block
//! from a [`Config`].

use crate::root::{root_css, root_variables};
use crate::{ClassTable, Config, PresetError, ValueTable};
use log::{debug, trace};
use preset_palette::color_library;
use preset_resolver::{PropertyTable, ResolveContext, Resolved, Token, default_table};

/// A fully assembled preset, built once and read-only afterwards.
#[derive(Clone, Debug)]
pub struct Preset {
    config: Config,
    context: ResolveContext,
    table: PropertyTable,
    values: ValueTable,
    classes: ClassTable,
    root: Vec<(String, String)>,
}

/// Build a [`Preset`] from `config`.
///
/// # Errors
/// Returns an error when the configuration is out of range or a configured
/// color is not a hex string.
pub fn create_config(config: &Config) -> Result<Preset, PresetError> {
    config.validate()?;
    let colors = color_library(&config.colors, config.color_format, &config.adjustments)?;
    let values = ValueTable::with_colors(&colors);
    let table = default_table();
    let classes = ClassTable::builtin();
    debug!(
        "[PRESET] {} utilities, {} values, {} classes, sizing {}, {} colors",
        table.len(),
        values.len(),
        classes.len(),
        config.sizing,
        config.color_format
    );
    Ok(Preset {
        config: config.clone(),
        context: ResolveContext::new(config.sizing, config.color_format),
        table,
        values,
        classes,
        root: root_variables(),
    })
}

impl Preset {
    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn context(&self) -> &ResolveContext {
        &self.context
    }

    pub const fn table(&self) -> &PropertyTable {
        &self.table
    }

    pub const fn values(&self) -> &ValueTable {
        &self.values
    }

    pub const fn classes(&self) -> &ClassTable {
        &self.classes
    }

    /// Variables of the `:root` block.
    pub fn root_variables(&self) -> &[(String, String)] {
        &self.root
    }

    /// Resolve `token` for `utility`, first replacing a named value
    /// (`red-500`, `full`, `first` for `order`) with what it stands for.
    pub fn resolve(&self, utility: &str, token: &Token<'_>) -> Option<Resolved> {
        let Some(value) = self.values.get(utility, token.value()) else {
            return self.table.resolve(utility, token, &self.context);
        };
        trace!("[PRESET] {utility}: '{}' -> '{value}'", token.value());
        let named = token.with_value(value);
        self.table.resolve(utility, &named, &self.context)
    }

    /// The `:root` block, followed by `palette` declaration lines if given.
    pub fn root_css(&self, palette: Option<&str>) -> String {
        root_css(&self.root, palette)
    }
}
