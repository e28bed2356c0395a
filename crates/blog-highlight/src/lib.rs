//! Post-render syntax highlighting pass for blog post HTML.
//!
//! This crate takes a fragment of already-rendered post HTML and rewrites
//! every fenced code block in it (`code` elements nested in `pre` elements):
//!
//! 1. The code text is tokenized and colorized according to a language
//!    grammar, chosen from the element's `language-…` class hint or detected
//!    from the code itself.
//! 2. Two fixed inline presentation overrides are then forced onto the
//!    element: `background-color: #e9e9e9` and `font-size: 14px`, taking
//!    precedence over whatever the theme stylesheet would set.
//!
//! Everything outside matched code blocks passes through byte-identical.
//! The pass never fails: fragments that cannot be parsed are returned
//! unchanged, and code in an unknown language is emitted as escaped plain
//! text.
//!
//! # Example
//!
//! ```
//! use blog_highlight::HighlightPass;
//!
//! let pass = HighlightPass::new();
//! let html = pass.apply(r#"<pre><code class="language-js">const x = 1;</code></pre>"#);
//! assert!(html.contains("background-color:#e9e9e9"));
//! ```
//!
//! The colorized output uses class-based spans; serve
//! [`HIGHLIGHT_THEME_CSS`] once at application start to style them.

mod error;
mod highlighter;
mod language;
mod pass;
mod theme;

pub use error::HighlightError;
pub use highlighter::{Highlighter, escape_html};
pub use language::Language;
pub use pass::{CODE_BACKGROUND, CODE_FONT_SIZE, HighlightPass};
pub use theme::HIGHLIGHT_THEME_CSS;
