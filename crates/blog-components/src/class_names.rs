//! Conditional CSS class composition.

/// Compose a base class with flag-conditional class sets.
///
/// The base comes first, followed by each set whose flag is true,
/// space-separated.
///
/// # Examples
///
/// ```
/// use blog_components::class_names;
///
/// assert_eq!(
///     class_names("border-b", &[("text-white", true), ("hidden", false)]),
///     "border-b text-white"
/// );
/// ```
#[must_use]
pub fn class_names(base: &str, conditional: &[(&str, bool)]) -> String {
    let mut out = base.to_owned();
    for (classes, enabled) in conditional {
        if *enabled {
            out.push(' ');
            out.push_str(classes);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_only() {
        assert_eq!(class_names("border-b", &[]), "border-b");
    }

    #[test]
    fn test_all_flags_false() {
        assert_eq!(class_names("border-b", &[("a", false), ("b", false)]), "border-b");
    }

    #[test]
    fn test_multiple_enabled_sets_keep_order() {
        assert_eq!(
            class_names("x", &[("a b", true), ("c", true)]),
            "x a b c"
        );
    }
}
