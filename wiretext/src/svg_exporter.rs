//! SVG exporter for wireframe documents
//!
//! This module turns DSL text into a greyscale SVG wireframe:
//! - Elements stacked vertically on a fixed-width canvas
//! - Landmarks drawn as dashed, labelled regions around their children
//! - Buttons, inputs and image placeholders as simple outlined boxes
//!
//! Geometry and colours come from [`RenderConfig`].

mod layout;
mod shape;

pub use layout::{Layout, LayoutContext};
pub use shape::{RectShape, Shape, TextShape};

use crate::render_config::RenderConfig;
use crate::source_model::{self, WireframeDocument};

/// Render wireframe text to an SVG document
///
/// # Parameters
/// * `text` - Raw DSL text
/// * `config` - Render settings, defaults when `None`
///
/// # Returns
/// * `String` - Complete SVG document
pub fn render_svg(text: &str, config: Option<&RenderConfig>) -> String {
    let document = source_model::parse(text);
    match config {
        Some(config) => render_document(&document, config),
        None => render_document(&document, &RenderConfig::default()),
    }
}

/// Lay out a parsed document without serializing it
pub fn layout_document(document: &WireframeDocument, config: &RenderConfig) -> Layout {
    let mut context = LayoutContext::new(config);

    if let Some(title) = document.metadata.title() {
        context.place_title(title);
    }
    for element in &document.elements {
        context.place(element);
    }

    context.finish()
}

/// Render a parsed document to an SVG document
pub fn render_document(document: &WireframeDocument, config: &RenderConfig) -> String {
    let layout = layout_document(document, config);
    let width = config.page_width;
    let height = layout.height;

    log::debug!(
        "Rendering {} top-level shapes on a {}x{} canvas",
        layout.shapes.len(),
        width,
        height
    );

    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    output.push_str(&format!(
        "<svg width=\"{width}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {width} {height}\">\n"
    ));
    output.push_str(&format!(
        "  <!-- Generated by wiretext {} -->\n",
        env!("CARGO_PKG_VERSION")
    ));
    output.push_str(&format!(
        "  <!-- Original Title: {} -->\n",
        comment_text(document.metadata.title().unwrap_or("Untitled"))
    ));
    if let Some(purpose) = document.metadata.purpose() {
        output.push_str(&format!("  <!-- Purpose: {} -->\n", comment_text(purpose)));
    }

    output.push_str("  <!-- Background -->\n");
    output.push_str(&format!(
        "  <rect width=\"{width}\" height=\"{height}\" fill=\"{}\"/>\n",
        escape_xml(&config.colors.background)
    ));

    output.push_str("  <!-- Content -->\n");
    for shape in &layout.shapes {
        shape.write_svg(&mut output, 1);
    }

    output.push_str("</svg>\n");
    output
}

/// Escape the five XML special characters
///
/// Characters XML 1.0 cannot carry at all (C0 controls other than tab, line
/// feed and carriage return, plus U+FFFE and U+FFFF) are dropped.
pub fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if is_xml_char(c) => escaped.push(c),
            _ => {}
        }
    }
    escaped
}

fn is_xml_char(c: char) -> bool {
    c >= '\u{20}' && c != '\u{FFFE}' && c != '\u{FFFF}'
}

/// XML comments may not contain `--`
fn comment_text(s: &str) -> String {
    let mut escaped = escape_xml(s);
    while escaped.contains("--") {
        escaped = escaped.replace("--", "- -");
    }
    escaped
}
