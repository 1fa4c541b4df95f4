//! `{0}` value templates such as `repeat({0}, minmax(0, 1fr))`.

/// Placeholder replaced by the token value.
const PLACEHOLDER: &str = "{0}";

/// Substitute every `{0}` in `template` with `value`.
pub fn substitute(template: &str, value: &str) -> String {
    template.replace(PLACEHOLDER, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_placeholder() {
        assert_eq!(substitute("span {0} / span {0}", "2"), "span 2 / span 2");
        assert_eq!(substitute("{0}%", "50"), "50%");
        assert_eq!(substitute("none", "3"), "none");
    }
}
