//! The `:root` block every utility's custom properties fall back on.

/// Shadow and ring layers start empty so the composed `box-shadow` is valid
/// before any layer is set.
pub const ROOT_VARIABLES: [(&str, &str); 15] = [
    ("--tui-inset-shadow", "0 0 #0000"),
    ("--tui-inset-ring-shadow", "0 0 #0000"),
    ("--tui-shadow", "0 0 #0000"),
    ("--tui-ring-shadow", "0 0 #0000"),
    ("--tui-ring-offset-shadow", "0 0 #0000"),
    ("--tui-ring-offset-width", "0px"),
    ("--tui-ring-inset", " "),
    ("--tui-ring-offset-color", "#fff"),
    ("--tui-move-x", "0"),
    ("--tui-move-y", "0"),
    ("--ease-in", "cubic-bezier(0.4, 0, 1, 1)"),
    ("--ease-out", "cubic-bezier(0, 0, 0.2, 1)"),
    ("--ease-in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
    ("--default-transition-duration", "150ms"),
    (
        "--default-transition-timing-function",
        "cubic-bezier(0.4, 0, 0.2, 1)",
    ),
];

/// The built-in variables as owned pairs.
pub fn root_variables() -> Vec<(String, String)> {
    ROOT_VARIABLES
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect()
}

/// Render `:root { … }` from `variables`, followed by any extra declaration
/// lines (e.g. a generated palette in CSS-variable form).
pub fn root_css(variables: &[(String, String)], extra: Option<&str>) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in variables {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    for line in extra.unwrap_or_default().lines() {
        let line = line.trim();
        if !line.is_empty() {
            css.push_str(&format!("  {line}\n"));
        }
    }
    css.push('}');
    css
}
