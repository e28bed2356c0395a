//! Layout container.

/// Wrap children in the site's horizontally centered container.
#[must_use]
pub fn container(children: &str) -> String {
    format!(r#"<div class="container mx-auto px-5">{children}</div>"#)
}
