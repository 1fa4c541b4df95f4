use preset_color::ColorFormat;
use preset_resolver::{
    Declaration, PropertyTable, ResolveContext, Resolved, Token, default_table,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn table() -> PropertyTable {
    init_logs();
    default_table()
}

fn css(table: &PropertyTable, utility: &str, token: &Token<'_>) -> Option<String> {
    table
        .resolve(utility, token, &ResolveContext::default())
        .map(|resolved| resolved.to_css())
}

#[test]
fn named_color_goes_to_background_color() {
    let table = table();
    let resolved = table.resolve("bg", &Token::new("red"), &ResolveContext::default());
    assert_eq!(
        resolved,
        Some(Resolved::Properties {
            names: vec!["backgroundColor"],
            value: "red".to_owned(),
        })
    );
}

#[test]
fn padding_key_selects_inline_axis() {
    let table = table();
    let token = Token::new("4").with_key("x");
    assert_eq!(
        table.resolve("p", &token, &ResolveContext::default()),
        Some(Resolved::Properties {
            names: vec!["paddingInline"],
            value: "1rem".to_owned(),
        })
    );
}

#[test]
fn sizing_multiplier_comes_from_context() {
    let table = table();
    let context = ResolveContext::new(0.5, ColorFormat::Oklch);
    let margin = table.resolve("m", &Token::new("4"), &context);
    assert_eq!(
        margin.map(|resolved| resolved.to_css()),
        Some("margin: 2rem".to_owned())
    );
}

#[test]
fn shadow_preset_composes_every_layer() {
    let table = table();
    let declarations = table
        .resolve("shadow", &Token::new("md"), &ResolveContext::default())
        .map(|resolved| resolved.declarations())
        .unwrap_or_default();
    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations[0].property, "--tui-shadow");
    assert!(declarations[0].value.starts_with("0 4px 6px -1px"));
    assert_eq!(
        declarations[1],
        Declaration::new(
            "box-shadow",
            "var(--tui-inset-shadow), var(--tui-inset-ring-shadow), var(--tui-ring-offset-shadow), var(--tui-shadow), var(--tui-ring-shadow)"
        )
    );
}

#[test]
fn radius_top_yields_both_corners() {
    let table = table();
    assert_eq!(
        css(&table, "radius", &Token::new("lg").with_key("t")),
        Some("border-top-left-radius: 0.5rem; border-top-right-radius: 0.5rem".to_owned())
    );
}

#[test]
fn size_comes_from_the_spacing_table() {
    let table = table();
    assert_eq!(table.source_of("size"), Some("spacing"));
    assert_eq!(
        css(&table, "size", &Token::new("sm")),
        Some("width: 24rem; height: 24rem".to_owned())
    );
}

#[test]
fn later_tables_override_only_size() {
    let table = table();
    assert_eq!(table.source_of("p"), Some("spacing"));
    assert_eq!(table.source_of("px"), Some("sizing"));
    assert_eq!(table.source_of("opacity"), Some("defaults"));
    assert_eq!(table.source_of("shadow"), Some("effects"));
    assert_eq!(table.source_of("move-x"), Some("transforms"));
}

#[test]
fn every_utility_family_is_registered() {
    let table = table();
    for utility in [
        "columns", "opacity", "grid-cols", "col-span", "shrink", "grow", "inset", "gap-x", "w",
        "h", "size", "p", "m", "bg", "bg-clip", "bg-origin", "text", "font", "tracking",
        "leading", "decoration", "underline-offset", "indent", "radius", "border", "outline",
        "ring", "ring-offset", "shadow", "blur", "backdrop-blur", "brightness",
        "backdrop-saturate", "drop-shadow", "backdrop-opacity", "transition", "ease", "duration",
        "delay", "move", "move-x", "move-y",
    ] {
        assert!(table.contains(utility), "missing {utility}");
    }
    assert_eq!(table.utilities().len(), table.len());
}

#[test]
fn alpha_modifier_follows_color_format() {
    let table = table();
    let rgb = ResolveContext::new(0.25, ColorFormat::Rgb);
    let token = Token::new("rgb(255 0 0)").with_second("50", None);
    assert_eq!(
        table
            .resolve("text", &token, &rgb)
            .map(|resolved| resolved.to_css()),
        Some("color: rgb(255 0 0 / 50%)".to_owned())
    );
    let oklch = ResolveContext::default();
    assert_eq!(
        table
            .resolve("text", &token, &oklch)
            .map(|resolved| resolved.to_css()),
        Some("color: rgb(255 0 0)".to_owned())
    );
    assert_eq!(
        table
            .resolve("border", &token, &rgb)
            .map(|resolved| resolved.to_css()),
        Some("border-color: rgb(255 0 0 / 50%)".to_owned())
    );
}

#[test]
fn filters_and_templates() {
    let table = table();
    assert_eq!(
        css(&table, "backdrop-grayscale", &Token::empty()),
        Some("backdrop-filter: grayscale(100%)".to_owned())
    );
    assert_eq!(
        css(&table, "outline-offset", &Token::new("2")),
        Some("outline-offset: 2px".to_owned())
    );
    assert_eq!(
        css(&table, "col-span", &Token::new("3")),
        Some("grid-column: span 3 / span 3".to_owned())
    );
}

#[test]
fn unknown_utility_and_empty_value_emit_nothing() {
    let table = table();
    assert_eq!(css(&table, "nonexistent", &Token::new("1")), None);
    assert_eq!(css(&table, "bg", &Token::empty()), None);
    assert_eq!(css(&table, "p", &Token::empty()), None);
}
