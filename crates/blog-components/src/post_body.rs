//! Post body renderer.

use blog_highlight::HighlightPass;

/// Typography class applied to the rendered markdown wrapper.
///
/// The matching stylesheet (headings, lists, code blocks) is an external
/// collaborator; this crate only references the class name.
pub const MARKDOWN_CLASS: &str = "markdown";

/// Renders a pre-built post body inside the bounded-width wrapper and runs
/// the highlighting pass over it.
///
/// The `content` string is trusted: it is injected verbatim, with no
/// escaping or sanitization at this layer. Sanitization, if any, is the
/// responsibility of whatever produced the content upstream (typically the
/// markdown-to-HTML conversion step).
///
/// The highlighting pass runs once per distinct content value: rendering
/// the same content again returns the memoized output without re-walking
/// the fragment.
#[derive(Default)]
pub struct PostBody {
    pass: HighlightPass,
    /// Last rendered (content, output) pair.
    memo: Option<(String, String)>,
}

impl PostBody {
    /// Create a new post body renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `content` to HTML.
    ///
    /// Highlighting and the inline style overrides are applied only when
    /// `content` differs from the previous call.
    pub fn render(&mut self, content: &str) -> &str {
        let fresh = self
            .memo
            .as_ref()
            .is_none_or(|(prev, _)| prev != content);
        if fresh {
            let highlighted = self.pass.apply(content);
            let html = format!(
                r#"<div class="max-w-2xl mx-auto"><div class="{MARKDOWN_CLASS}">{highlighted}</div></div>"#
            );
            self.memo = Some((content.to_owned(), html));
        }
        self.memo.as_ref().map_or("", |(_, html)| html)
    }
}
