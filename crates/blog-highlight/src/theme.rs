//! Bundled highlight theme stylesheet.

/// Light theme for the class-based spans the highlighter emits.
///
/// Process-wide static asset: serve it once at application start (for
/// example as `/highlight.css`), not per rendered post. The forced inline
/// overrides on each code element intentionally take precedence over the
/// `background` declared here.
pub const HIGHLIGHT_THEME_CSS: &str = r"pre code {
  display: block;
  overflow-x: auto;
  padding: 0.5em;
  color: #24292e;
  background: #fff;
}
.hl-comment {
  color: #6a737d;
  font-style: italic;
}
.hl-keyword,
.hl-storage {
  color: #d73a49;
}
.hl-string {
  color: #032f62;
}
.hl-constant,
.hl-support {
  color: #005cc5;
}
.hl-entity.hl-name.hl-function,
.hl-support.hl-function {
  color: #6f42c1;
}
.hl-entity.hl-name.hl-tag {
  color: #22863a;
}
.hl-entity.hl-other.hl-attribute-name {
  color: #6f42c1;
}
.hl-variable {
  color: #e36209;
}
.hl-markup.hl-heading {
  color: #005cc5;
  font-weight: 600;
}
.hl-invalid {
  color: #b31d28;
  background-color: #ffeef0;
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_targets_prefixed_classes() {
        assert!(HIGHLIGHT_THEME_CSS.contains(".hl-keyword"));
        assert!(HIGHLIGHT_THEME_CSS.contains(".hl-comment"));
    }
}
