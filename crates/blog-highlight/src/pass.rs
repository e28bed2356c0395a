//! The post-render highlighting pass.
//!
//! Rewrites a fragment of rendered post HTML in one streaming sweep:
//! every `code` element nested in a `pre` element has its text content
//! colorized and the two fixed inline presentation overrides forced onto
//! its `style` attribute. Markup outside matched code blocks is copied
//! through byte-identical.

use std::fmt::Write;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::HighlightError;
use crate::highlighter::{Highlighter, escape_html};
use crate::language::Language;

/// Background color forced onto every highlighted code element.
pub const CODE_BACKGROUND: &str = "#e9e9e9";

/// Font size forced onto every highlighted code element.
pub const CODE_FONT_SIZE: &str = "14px";

/// Marker attribute stamped onto processed code elements.
///
/// A stamped element is not re-tokenized when the pass runs again over its
/// own output; the inline overrides are re-asserted either way, so applying
/// the pass twice yields the same fragment as applying it once.
const HIGHLIGHTED_ATTR: &str = "data-highlighted";

/// A `pre > code` element currently being captured.
struct Capture {
    /// Byte offset of the element's start tag in the source fragment.
    splice_start: usize,
    /// Byte offset just past the start tag (beginning of the content).
    content_start: usize,
    /// Attributes from the start tag, in source order.
    attrs: Vec<(String, String)>,
    /// Decoded text content accumulated so far.
    text: String,
    /// Open nested `code` start tags inside this element.
    nested_code: usize,
}

impl Capture {
    fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Post-render syntax highlighting pass.
///
/// # Example
///
/// ```
/// use blog_highlight::HighlightPass;
///
/// let pass = HighlightPass::new();
/// let out = pass.apply("<pre><code class=\"language-js\">const x = 1;</code></pre>");
/// assert!(out.contains("font-size:14px"));
/// assert_eq!(pass.apply("<p>plain text</p>"), "<p>plain text</p>");
/// ```
pub struct HighlightPass {
    highlighter: Highlighter,
}

impl HighlightPass {
    /// Create a new pass.
    #[must_use]
    pub fn new() -> Self {
        Self {
            highlighter: Highlighter::new(),
        }
    }

    /// Apply the pass to a rendered HTML fragment.
    ///
    /// Fragments that cannot be parsed are returned unchanged — breakage in
    /// the input is a rendering artifact for the browser to cope with, not
    /// an error condition at this layer.
    #[must_use]
    pub fn apply(&self, html: &str) -> String {
        match self.rewrite(html) {
            Ok(out) => out,
            Err(e) => {
                tracing::debug!(error = %e, "Fragment not parseable, passing through");
                html.to_owned()
            }
        }
    }

    fn rewrite(&self, html: &str) -> Result<String, HighlightError> {
        let mut reader = Reader::from_str(html);
        // Rendered HTML is not strict XML: void elements and stray end
        // tags must not abort the sweep.
        reader.config_mut().check_end_names = false;
        reader.config_mut().allow_unmatched_ends = true;

        let mut pre_depth = 0usize;
        let mut capture: Option<Capture> = None;
        // Output is built lazily; fragments with no code blocks never
        // allocate a rewritten copy.
        let mut out: Option<String> = None;
        let mut copied_to = 0usize;

        loop {
            let event_start = position(&reader);
            let event = reader.read_event()?;
            let event_end = position(&reader);

            match event {
                Event::Start(e) => {
                    let name = decode_name(&reader, &e)?;
                    if let Some(cap) = capture.as_mut() {
                        if name == "code" {
                            cap.nested_code += 1;
                        }
                    } else if name == "pre" {
                        pre_depth += 1;
                    } else if name == "code" && pre_depth > 0 {
                        capture = Some(Capture {
                            splice_start: event_start,
                            content_start: event_end,
                            attrs: decode_attrs(&reader, &e)?,
                            text: String::new(),
                            nested_code: 0,
                        });
                    }
                }
                Event::End(e) => {
                    let name = decode_name_bytes(&reader, e.name().as_ref())?;
                    if capture.is_none() {
                        if name == "pre" {
                            pre_depth = pre_depth.saturating_sub(1);
                        }
                    } else if name == "code" {
                        let nested = capture.as_ref().map_or(0, |cap| cap.nested_code);
                        if nested > 0 {
                            if let Some(cap) = capture.as_mut() {
                                cap.nested_code -= 1;
                            }
                        } else if let Some(cap) = capture.take() {
                            let buf = out
                                .get_or_insert_with(|| String::with_capacity(html.len() + 128));
                            buf.push_str(&html[copied_to..cap.splice_start]);
                            self.emit_code_element(
                                buf,
                                &cap,
                                &html[cap.content_start..event_start],
                            );
                            copied_to = event_end;
                        }
                    }
                }
                Event::Text(e) => {
                    if let Some(cap) = capture.as_mut() {
                        cap.text.push_str(&reader.decoder().decode(&e)?);
                    }
                }
                Event::GeneralRef(e) => {
                    if let Some(cap) = capture.as_mut() {
                        let entity = reader.decoder().decode(&e)?;
                        cap.text.push_str(&decode_entity(&entity));
                    }
                }
                Event::CData(e) => {
                    if let Some(cap) = capture.as_mut() {
                        cap.text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Event::Eof => break,
                Event::Empty(_)
                | Event::Comment(_)
                | Event::Decl(_)
                | Event::PI(_)
                | Event::DocType(_) => {}
            }
        }

        if capture.is_some() {
            // A code element was never closed; treat the whole fragment as
            // malformed rather than emitting a partial rewrite.
            tracing::debug!("Unclosed code element, passing fragment through");
            return Ok(html.to_owned());
        }

        match out {
            Some(mut buf) => {
                buf.push_str(&html[copied_to..]);
                Ok(buf)
            }
            None => Ok(html.to_owned()),
        }
    }

    /// Emit the rewritten code element.
    ///
    /// Colorization runs first; the style overrides are derived only after
    /// the inner markup is final.
    fn emit_code_element(&self, out: &mut String, cap: &Capture, raw_inner: &str) {
        let stamped = cap.attr(HIGHLIGHTED_ATTR).is_some();
        let inner = if stamped {
            // Already colorized by a previous run; keep its markup.
            raw_inner.to_owned()
        } else {
            let lang = cap.attr("class").and_then(Language::from_class_attr);
            self.highlighter.highlight(&cap.text, lang)
        };

        out.push_str("<code");
        for (key, value) in &cap.attrs {
            if key == "style" || key == HIGHLIGHTED_ATTR {
                continue;
            }
            write!(out, r#" {key}="{}""#, escape_html(value)).unwrap();
        }
        let style = merge_style(cap.attr("style").unwrap_or(""));
        write!(out, r#" {HIGHLIGHTED_ATTR}="true" style="{style}">"#).unwrap();
        out.push_str(&inner);
        out.push_str("</code>");
    }
}

impl Default for HighlightPass {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge an existing inline style with the two forced overrides.
///
/// Caller-supplied declarations survive except for the two properties the
/// pass owns, which are always re-asserted with the fixed values.
fn merge_style(existing: &str) -> String {
    let mut kept = existing
        .split(';')
        .map(str::trim)
        .filter(|d| {
            let property = d.split(':').next().unwrap_or("").trim();
            !d.is_empty() && property != "background-color" && property != "font-size"
        })
        .collect::<Vec<_>>()
        .join(";");
    if !kept.is_empty() {
        kept.push(';');
    }
    format!("{kept}background-color:{CODE_BACKGROUND};font-size:{CODE_FONT_SIZE}")
}

/// Byte offset of the reader into the source fragment.
fn position(reader: &Reader<&[u8]>) -> usize {
    // The offset indexes an in-memory str, so it always fits in usize.
    usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX)
}

fn decode_name(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> Result<String, HighlightError> {
    decode_name_bytes(reader, e.name().as_ref())
}

fn decode_name_bytes(reader: &Reader<&[u8]>, name: &[u8]) -> Result<String, HighlightError> {
    Ok(reader.decoder().decode(name)?.to_ascii_lowercase())
}

/// Decode start tag attributes, preserving source order.
fn decode_attrs(
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<Vec<(String, String)>, HighlightError> {
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?.to_ascii_lowercase();
        let value = attr.unescape_value()?.into_owned();
        attrs.push((key, value));
    }
    Ok(attrs)
}

/// Decode an entity reference to its character value.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        "nbsp" => "\u{a0}".to_owned(),
        // Numeric character references
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        _ => format!("&{entity};"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn overrides() -> String {
        format!("background-color:{CODE_BACKGROUND};font-size:{CODE_FONT_SIZE}")
    }

    #[test]
    fn test_no_code_blocks_pass_through() {
        let pass = HighlightPass::new();
        let html = "<p>plain text</p>";
        assert_eq!(pass.apply(html), html);
    }

    #[test]
    fn test_mixed_fragment_without_pre_untouched() {
        let pass = HighlightPass::new();
        let html = r#"<h1>Title</h1><p>Inline <code>x</code> stays.</p>"#;
        assert_eq!(pass.apply(html), html);
    }

    #[test]
    fn test_single_block_gets_both_overrides() {
        let pass = HighlightPass::new();
        let out = pass.apply(r#"<pre><code class="language-js">const x = 1;</code></pre>"#);
        assert!(out.contains(&format!(r#"style="{}""#, overrides())));
        assert!(out.contains(r#"data-highlighted="true""#));
    }

    #[test]
    fn test_single_block_inner_markup_differs() {
        let pass = HighlightPass::new();
        let raw = r#"<pre><code class="language-js">const x = 1;</code></pre>"#;
        let out = pass.apply(raw);
        assert_ne!(out, raw);
        assert!(out.contains("<span"));
        // The class hint survives the rewrite
        assert!(out.contains(r#"class="language-js""#));
    }

    #[test]
    fn test_all_blocks_receive_overrides() {
        let pass = HighlightPass::new();
        let html = "<pre><code class=\"language-js\">let a;</code></pre>\
                    <p>between</p>\
                    <pre><code class=\"language-rust\">fn b() {}</code></pre>";
        let out = pass.apply(html);
        assert_eq!(out.matches(&overrides()).count(), 2);
        assert!(out.contains("<p>between</p>"));
    }

    #[test]
    fn test_unknown_language_degrades_to_plain() {
        let pass = HighlightPass::new();
        let out = pass.apply("<pre><code>just some prose</code></pre>");
        // Still styled even when nothing could be colorized
        assert!(out.contains(&overrides()));
        assert!(out.contains("just some prose"));
    }

    #[test]
    fn test_entities_in_code_are_decoded_before_tokenizing() {
        let pass = HighlightPass::new();
        let out = pass.apply("<pre><code>a &lt; b</code></pre>");
        assert!(out.contains("a &lt; b"));
    }

    #[test]
    fn test_idempotent_over_own_output() {
        let pass = HighlightPass::new();
        let once = pass.apply(r#"<pre><code class="language-js">const x = 1;</code></pre>"#);
        let twice = pass.apply(&once);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_existing_style_declarations_survive() {
        let pass = HighlightPass::new();
        let out = pass.apply(
            r#"<pre><code class="language-js" style="tab-size:4;font-size:12px">let a;</code></pre>"#,
        );
        assert!(out.contains(&format!(r#"style="tab-size:4;{}""#, overrides())));
        assert!(!out.contains("12px"));
    }

    #[test]
    fn test_unclosed_code_passes_through() {
        let pass = HighlightPass::new();
        let html = "<pre><code>unclosed";
        assert_eq!(pass.apply(html), html);
    }

    #[test]
    fn test_surrounding_markup_is_byte_identical() {
        let pass = HighlightPass::new();
        let out = pass.apply(
            "<h2 id=\"setup\">Setup</h2><pre><code class=\"language-sh\">ls -la\n</code></pre><p>done</p>",
        );
        assert!(out.starts_with("<h2 id=\"setup\">Setup</h2><pre>"));
        assert!(out.ends_with("</pre><p>done</p>"));
    }

    #[test]
    fn test_merge_style_filters_owned_properties() {
        assert_eq!(
            merge_style("font-size: 12px; color: red; background-color: #fff"),
            format!("color: red;{}", overrides())
        );
        assert_eq!(merge_style(""), overrides());
    }

    #[test]
    fn test_merge_style_keeps_lookalike_properties() {
        assert_eq!(
            merge_style("font-size-adjust: 0.5; font-size: 12px"),
            format!("font-size-adjust: 0.5;{}", overrides())
        );
    }

    #[test]
    fn test_decode_entity_named_and_numeric() {
        assert_eq!(decode_entity("lt"), "<");
        assert_eq!(decode_entity("#65"), "A");
        assert_eq!(decode_entity("#x41"), "A");
        assert_eq!(decode_entity("bogus"), "&bogus;");
    }
}
