//! Error types for the highlighting pass.

use std::str::Utf8Error;

/// Error while rewriting a post HTML fragment.
///
/// Never surfaced through [`HighlightPass::apply`](crate::HighlightPass::apply):
/// the pass logs it and falls back to returning the fragment unchanged.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HighlightError {
    /// Markup parsing error.
    #[error("markup parse error")]
    Parse(#[from] quick_xml::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error")]
    Utf8(#[from] Utf8Error),

    /// Attribute error on a code element's start tag.
    #[error("attribute error")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Encoding error during markup parsing.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),
}
