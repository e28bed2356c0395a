//! Language identification for fenced code blocks.

/// Languages the highlighter carries grammars for.
///
/// These are the languages the blog actually publishes with. Anything else
/// falls back to first-line detection and finally to plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    JavaScript,
    TypeScript,
    Rust,
    Python,
    Shell,
    Json,
    Html,
    Css,
    Markdown,
}

impl Language {
    /// Parse a language from a fence info string or class hint.
    ///
    /// Supports both bare names (`js`) and `language-` prefixed names
    /// (`language-js`) as emitted for fenced code blocks by markdown
    /// renderers.
    ///
    /// Returns None if the hint names no supported language.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        // Support both "js" and "language-js" formats
        let lang = s.strip_prefix("language-").unwrap_or(s);

        match lang {
            "js" | "jsx" | "javascript" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "tsx" | "typescript" => Some(Self::TypeScript),
            "rust" | "rs" => Some(Self::Rust),
            "python" | "py" => Some(Self::Python),
            "sh" | "bash" | "shell" | "zsh" => Some(Self::Shell),
            "json" => Some(Self::Json),
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }

    /// Parse a language from a `class` attribute value.
    ///
    /// The attribute may carry several space-separated classes; the first
    /// one naming a supported language wins.
    #[must_use]
    pub fn from_class_attr(class: &str) -> Option<Self> {
        class.split_ascii_whitespace().find_map(Self::parse)
    }

    /// Token used to look up the grammar in the syntax set.
    pub(crate) fn syntax_token(self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
            Self::Rust => "rs",
            Self::Python => "py",
            Self::Shell => "sh",
            Self::Json => "json",
            Self::Html => "html",
            Self::Css => "css",
            Self::Markdown => "md",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_names() {
        assert_eq!(Language::parse("js"), Some(Language::JavaScript));
        assert_eq!(Language::parse("rust"), Some(Language::Rust));
        assert_eq!(Language::parse("bash"), Some(Language::Shell));
    }

    #[test]
    fn test_parse_language_prefix() {
        assert_eq!(Language::parse("language-js"), Some(Language::JavaScript));
        assert_eq!(Language::parse("language-python"), Some(Language::Python));
        assert_eq!(Language::parse("language-md"), Some(Language::Markdown));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Language::parse("language-cobol"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn test_from_class_attr_multiple_classes() {
        assert_eq!(
            Language::from_class_attr("hljs language-ts wrap"),
            Some(Language::TypeScript)
        );
    }

    #[test]
    fn test_from_class_attr_no_language() {
        assert_eq!(Language::from_class_attr("prose wrap"), None);
    }
}
