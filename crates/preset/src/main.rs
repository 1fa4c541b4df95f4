//! `preset`: generate palettes, print the `:root` block, resolve one utility.

use anyhow::{Result, anyhow};
use env_logger::{Builder, Env};
use preset::{Config, create_config};
use preset_palette::{
    ColorInput, DEFAULT_COLORS, OutputMode, Palette, PaletteOptions, generate_colors,
};
use preset_resolver::Token;
use std::env;
use std::io::{Write as _, stderr, stdout};
use std::path::PathBuf;

/// Flags shared by every command, plus the positional arguments.
#[derive(Debug, Default)]
struct Args {
    positional: Vec<String>,
    config: Option<PathBuf>,
    dark: bool,
    mode: Option<String>,
    prefix: Option<String>,
    key: Option<String>,
    unit: Option<String>,
    second: Option<String>,
    second_unit: Option<String>,
}

/// Split `args` into flags and positional arguments.
///
/// # Errors
/// Returns an error for unknown flags or flags missing their value.
fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut index = 0;
    while index < args.len() {
        let arg = args[index].as_str();
        if arg == "--dark" {
            parsed.dark = true;
            index += 1;
            continue;
        }
        if !arg.starts_with("--") {
            parsed.positional.push(arg.to_owned());
            index += 1;
            continue;
        }
        let value = args
            .get(index + 1)
            .cloned()
            .ok_or_else(|| anyhow!("{arg} needs a value"))?;
        match arg {
            "--config" => parsed.config = Some(PathBuf::from(value)),
            "--mode" => parsed.mode = Some(value),
            "--prefix" => parsed.prefix = Some(value),
            "--key" => parsed.key = Some(value),
            "--unit" => parsed.unit = Some(value),
            "--second" => parsed.second = Some(value),
            "--second-unit" => parsed.second_unit = Some(value),
            _ => return Err(anyhow!("unknown flag {arg}")),
        }
        index += 2;
    }
    Ok(parsed)
}

/// The configuration named by `--config`, else the defaults.
///
/// # Errors
/// Returns an error when the file cannot be loaded.
fn load_config(args: &Args) -> Result<Config> {
    let Some(path) = &args.config else {
        return Ok(Config::default());
    };
    Ok(Config::load(path)?)
}

/// # Errors
/// Returns an error for an unknown mode name.
fn parse_mode(name: &str) -> Result<OutputMode> {
    match name {
        "css" => Ok(OutputMode::CssVariables),
        "class" => Ok(OutputMode::ClassString),
        "alias" => Ok(OutputMode::ValueAlias),
        "reference" => Ok(OutputMode::Reference),
        _ => Err(anyhow!("unknown mode '{name}', expected css, class, alias or reference")),
    }
}

/// Configured colors, or the built-in base colors when none are configured.
fn palette_colors(config: &Config) -> ColorInput {
    if config.colors.is_empty() {
        DEFAULT_COLORS.into_iter().collect()
    } else {
        config.colors.clone()
    }
}

/// # Errors
/// Returns an error if the config, mode or a color is invalid.
fn cmd_palette(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let mode = args
        .mode
        .as_deref()
        .map_or(Ok(OutputMode::default()), parse_mode)?;
    let options = PaletteOptions::new(palette_colors(&config))
        .dark(args.dark)
        .mode(mode)
        .prefix(args.prefix.clone().unwrap_or_default())
        .factors(config.adjustments);
    let mut out = stdout();
    match generate_colors(&options)? {
        Palette::Text(text) => writeln!(out, "{text}")?,
        Palette::Map(map) => {
            for entry in map {
                writeln!(out, "{}: {}", entry.name, entry.value)?;
            }
        }
    }
    Ok(())
}

/// # Errors
/// Returns an error if the config or a configured color is invalid.
fn cmd_root(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let preset = create_config(&config)?;
    let palette = if config.colors.is_empty() {
        None
    } else {
        let options = PaletteOptions::new(config.colors.clone())
            .dark(args.dark)
            .factors(config.adjustments);
        generate_colors(&options)?.as_text().map(str::to_owned)
    };
    writeln!(stdout(), "{}", preset.root_css(palette.as_deref()))?;
    Ok(())
}

/// # Errors
/// Returns an error if the utility is missing or resolves to nothing.
fn cmd_resolve(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let preset = create_config(&config)?;
    let utility = args
        .positional
        .first()
        .ok_or_else(|| anyhow!("resolve needs a utility name"))?;
    let mut token = args
        .positional
        .get(1)
        .map_or_else(Token::empty, |value| Token::new(value));
    if let Some(key) = &args.key {
        token = token.with_key(key);
    }
    if let Some(unit) = &args.unit {
        token = token.with_unit(unit);
    }
    if let Some(second) = &args.second {
        token = token.with_second(second, args.second_unit.as_deref());
    }
    if let Some(resolved) = preset.resolve(utility, &token) {
        writeln!(stdout(), "{}", resolved.to_css())?;
        return Ok(());
    }
    if token.value().is_empty()
        && let Some(css) = preset.classes().to_css(utility)
    {
        writeln!(stdout(), "{css}")?;
        return Ok(());
    }
    Err(anyhow!("'{utility}' produced no declarations"))
}

/// Print usage information to stderr.
fn print_usage() {
    drop(writeln!(
        stderr(),
        "Usage:\n  preset palette [--config FILE] [--dark] [--mode css|class|alias|reference] [--prefix P]\n  preset root [--config FILE] [--dark]\n  preset resolve UTILITY [VALUE] [--key K] [--unit U] [--second V] [--second-unit U] [--config FILE]"
    ));
}

/// # Errors
/// Returns an error if command parsing or execution fails.
fn main() -> Result<()> {
    let _log_init: Result<(), _> = Builder::from_env(Env::default().filter_or("RUST_LOG", "warn"))
        .format_timestamp(None)
        .try_init();
    let mut raw: Vec<String> = env::args().skip(1).collect();
    if raw.is_empty() {
        print_usage();
        return Err(anyhow!("missing command"));
    }
    let command = raw.remove(0);
    let args = parse_args(&raw)?;
    match command.as_str() {
        "palette" => cmd_palette(&args),
        "root" => cmd_root(&args),
        "resolve" => cmd_resolve(&args),
        _ => {
            print_usage();
            Err(anyhow!("unknown command '{command}'"))
        }
    }
}
