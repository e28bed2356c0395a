//! Syntect-backed code colorization.

use std::borrow::Cow;
use std::sync::LazyLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::language::Language;

/// Grammar set, loaded once per process.
static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Class style for generated spans, matched by [`HIGHLIGHT_THEME_CSS`](crate::HIGHLIGHT_THEME_CSS).
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Escape a string for safe inclusion in HTML text content.
///
/// Borrows the input unchanged when it contains no markup characters.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Language-aware code colorizer.
///
/// Produces class-based `<span>` markup from raw code text. The grammar is
/// chosen from an explicit [`Language`] when one is known, otherwise from
/// first-line detection. Code that matches no grammar, or that fails to
/// tokenize, is emitted as escaped plain text — colorization degrades, it
/// never errors.
pub struct Highlighter;

impl Highlighter {
    /// Create a new highlighter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Colorize `source`, returning HTML span markup.
    ///
    /// `lang` is the class hint from the code element, if it carried one.
    #[must_use]
    pub fn highlight(&self, source: &str, lang: Option<Language>) -> String {
        let syntax = lang
            .and_then(|l| SYNTAXES.find_syntax_by_token(l.syntax_token()))
            .or_else(|| {
                source
                    .lines()
                    .next()
                    .and_then(|line| SYNTAXES.find_syntax_by_first_line(line))
            });

        let Some(syntax) = syntax else {
            return escape_html(source).into_owned();
        };

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAXES, CLASS_STYLE);
        for line in LinesWithEndings::from(source) {
            if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
                tracing::debug!(error = %e, "Tokenization failed, emitting plain text");
                return escape_html(source).into_owned();
            }
        }
        generator.finalize()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
