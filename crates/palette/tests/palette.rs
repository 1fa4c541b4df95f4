#![allow(clippy::unwrap_used, reason = "tests unwrap known-good palettes")]

use preset_color::{hex_to_rgb, rgb_to_hsl};
use preset_palette::{
    AdjustmentFactors, ColorInput, NEUTRAL_SATURATION, OutputMode, Palette, PaletteError,
    PaletteMap, PaletteOptions, ShadeStep, generate_colors,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn blue() -> ColorInput {
    ColorInput::new().with("blue", "#3b82f6")
}

fn alias_map(options: PaletteOptions) -> PaletteMap {
    let palette = generate_colors(&options.mode(OutputMode::ValueAlias)).unwrap();
    palette.as_map().unwrap().clone()
}

fn hsl_of(components: &str) -> (f32, f32) {
    let channels: Vec<u8> = components
        .split(' ')
        .map(|channel| channel.parse().unwrap())
        .collect();
    let hex = format!("#{:02x}{:02x}{:02x}", channels[0], channels[1], channels[2]);
    let hsl = rgb_to_hsl(hex_to_rgb(&hex).unwrap());
    (hsl.saturation, hsl.lightness)
}

fn lightness_of(components: &str) -> f32 {
    hsl_of(components).1
}

fn saturation_of(components: &str) -> f32 {
    hsl_of(components).0
}

#[test]
fn value_alias_scenario() {
    init_logs();
    let mode = OutputMode::from_flags(false, true, false, false);
    let palette = generate_colors(&PaletteOptions::new(blue()).mode(mode)).unwrap();
    let map = palette.as_map().unwrap();
    assert_eq!(map.len(), 11);
    assert_eq!(map.get("blue-500"), Some("59 130 246"));
    let step_50 = lightness_of(map.get("blue-50").unwrap());
    let step_100 = lightness_of(map.get("blue-100").unwrap());
    let step_500 = lightness_of(map.get("blue-500").unwrap());
    assert!(step_50 > step_100);
    assert!(step_100 > step_500);
}

#[test]
fn css_variables_are_the_default_mode() {
    init_logs();
    let palette = generate_colors(&PaletteOptions::new(blue())).unwrap();
    let text = palette.as_text().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with("--blue-50: "));
    assert_eq!(lines[5], "--blue-500: 59 130 246;");
    assert!(lines[10].starts_with("--blue-950: "));
}

#[test]
fn class_string_uses_underscored_channels() {
    let options = PaletteOptions::new(blue())
        .mode(OutputMode::ClassString)
        .prefix("tw-");
    let palette = generate_colors(&options).unwrap();
    let text = palette.as_text().unwrap();
    let fragments: Vec<&str> = text.split(' ').collect();
    assert_eq!(fragments.len(), 11);
    assert!(fragments.contains(&"[--tw-blue-500]-[59_130_246]"));
}

#[test]
fn reference_mode_points_at_css_variables() {
    let options = PaletteOptions::new(blue()).mode(OutputMode::Reference);
    let reference = generate_colors(&options).unwrap();
    let variables = generate_colors(&PaletteOptions::new(blue())).unwrap();
    let text = variables.as_text().unwrap();
    for entry in reference.as_map().unwrap().iter() {
        assert_eq!(entry.value, format!("var(--{})", entry.name));
        assert!(
            text.contains(&format!("--{}: ", entry.name)),
            "{}",
            entry.name
        );
    }
}

#[test]
fn dark_mode_reverses_step_assignment() {
    let light = alias_map(PaletteOptions::new(blue()));
    let dark = alias_map(PaletteOptions::new(blue()).dark(true));
    for (step, mirrored) in ShadeStep::ALL.iter().zip(ShadeStep::ALL.iter().rev()) {
        assert_eq!(
            light.get(&format!("blue-{}", step.label())),
            dark.get(&format!("blue-{}", mirrored.label())),
        );
    }
}

#[test]
fn neutral_colors_keep_saturation() {
    let gray = ColorInput::new().with("gray", "#808080");
    for entry in alias_map(PaletteOptions::new(gray)).iter() {
        let channels: Vec<&str> = entry.value.split(' ').collect();
        assert!(
            channels.iter().all(|channel| *channel == channels[0]),
            "{} = {}",
            entry.name,
            entry.value
        );
    }
}

#[test]
fn neutral_threshold_is_decided_by_the_base_saturation() {
    init_logs();
    let base_saturation = |hex: &str| rgb_to_hsl(hex_to_rgb(hex).unwrap()).saturation;
    // One blue step apart, on either side of the threshold.
    assert!(base_saturation("#5d5d71") < NEUTRAL_SATURATION);
    assert!(base_saturation("#5d5d72") >= NEUTRAL_SATURATION);
    assert!(base_saturation("#6b7280") < NEUTRAL_SATURATION);
    assert!(base_saturation("#64748b") >= NEUTRAL_SATURATION);

    let colors = ColorInput::new()
        .with("mist", "#5d5d71")
        .with("dusk", "#5d5d72")
        .with("gray", "#6b7280")
        .with("slate", "#64748b");
    let map = alias_map(PaletteOptions::new(colors));

    // Below the threshold darker steps keep the base saturation.
    for name in ["mist", "gray"] {
        let base = saturation_of(map.get(&format!("{name}-500")).unwrap());
        let darker = saturation_of(map.get(&format!("{name}-700")).unwrap());
        assert!(darker < NEUTRAL_SATURATION, "{name}-700 {darker}");
        assert!((darker - base).abs() < 1.5, "{name}: {darker} vs {base}");
    }

    // At or above it darker steps are saturated toward 100.
    for name in ["dusk", "slate"] {
        let base = saturation_of(map.get(&format!("{name}-500")).unwrap());
        let darker = saturation_of(map.get(&format!("{name}-700")).unwrap());
        assert!(darker > base + 10.0, "{name}: {darker} vs {base}");
    }
}

#[test]
fn colors_keep_insertion_order() {
    let colors = ColorInput::new()
        .with("primary", "#3b82f6")
        .with("accent", "#f97316");
    let options = PaletteOptions::new(colors).mode(OutputMode::Reference);
    let palette = generate_colors(&options).unwrap();
    let names: Vec<&str> = palette
        .as_map()
        .unwrap()
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names[0], "primary-50");
    assert_eq!(names[11], "accent-50");
}

#[test]
fn custom_factors_change_the_ramp() {
    let factors = AdjustmentFactors::new(9.0, 10.0, 6.5, 7.0);
    let default = alias_map(PaletteOptions::new(blue()));
    let gentle = alias_map(PaletteOptions::new(blue()).factors(factors));
    let default_50 = lightness_of(default.get("blue-50").unwrap());
    let gentle_50 = lightness_of(gentle.get("blue-50").unwrap());
    assert!(gentle_50 < default_50);
    assert_eq!(default.get("blue-500"), gentle.get("blue-500"));
}

#[test]
fn invalid_hex_is_an_error() {
    let colors = ColorInput::new().with("oops", "blue");
    let result = generate_colors(&PaletteOptions::new(colors));
    assert!(matches!(result, Err(PaletteError::InvalidHex { .. })));
}

#[test]
fn invalid_factors_are_an_error() {
    let factors = AdjustmentFactors {
        lighter_saturation: 0.0,
        ..AdjustmentFactors::default()
    };
    let result = generate_colors(&PaletteOptions::new(blue()).factors(factors));
    assert_eq!(result, Err(PaletteError::InvalidFactors));
}

#[test]
fn empty_input_yields_empty_output() {
    let palette = generate_colors(&PaletteOptions::default()).unwrap();
    assert_eq!(palette, Palette::Text(String::new()));
}
