//! Top-of-page banner strip.

use std::fmt::Write;

use crate::class_names::class_names;
use crate::container::container;

/// Profile link shown in the non-preview attribution line.
pub const GITHUB_URL: &str = "https://github.com/jinokiim";

/// Dark variant, shown while viewing an unpublished draft.
const PREVIEW_CLASSES: &str = "bg-neutral-800 border-neutral-800 text-white";

/// Light variant, shown on the published site.
const DEFAULT_CLASSES: &str = "bg-neutral-50 border-neutral-200";

/// Single-line banner strip across the top of every page.
///
/// In preview mode the strip is a dark band with no text; otherwise it is a
/// light band carrying the fixed attribution line. Exactly one of the two
/// variants applies per render.
#[derive(Clone, Copy, Debug, Default)]
pub struct Banner {
    preview: bool,
}

impl Banner {
    /// Create a banner in the default (non-preview) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set preview mode.
    #[must_use]
    pub fn preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// Render the banner to HTML.
    #[must_use]
    pub fn render(&self) -> String {
        let class = class_names(
            "border-b",
            &[
                (PREVIEW_CLASSES, self.preview),
                (DEFAULT_CLASSES, !self.preview),
            ],
        );

        let mut body = String::new();
        if !self.preview {
            write!(
                body,
                r#"Jinolog의 <a href="{GITHUB_URL}" class="underline hover:text-blue-600 duration-200 transition-colors">GitHub</a>."#
            )
            .unwrap();
        }

        format!(
            r#"<div class="{class}">{}</div>"#,
            container(&format!(r#"<div class="py-2 text-center text-sm">{body}</div>"#))
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_exactly_one_variant_per_render() {
        for preview in [false, true] {
            let out = Banner::new().preview(preview).render();
            assert_eq!(out.contains(PREVIEW_CLASSES), preview);
            assert_eq!(out.contains(DEFAULT_CLASSES), !preview);
        }
    }

    #[test]
    fn test_default_shows_attribution_link() {
        let out = Banner::new().render();
        assert!(out.contains(r#"href="https://github.com/jinokiim""#));
        assert!(out.contains(">GitHub</a>"));
    }

    #[test]
    fn test_preview_is_dark_strip_without_text() {
        let out = Banner::new().preview(true).render();
        assert!(!out.contains(GITHUB_URL));
        assert!(out.contains(r#"<div class="py-2 text-center text-sm"></div>"#));
    }

    #[test]
    fn test_renders_through_container() {
        let out = Banner::new().render();
        assert!(out.contains(r#"class="container mx-auto px-5""#));
    }
}
