//! wiretext - accessibility-aware text wireframes
//!
//! Write a page as plain text, check it for common accessibility problems,
//! and render it as a greyscale SVG wireframe.
//!
//! ```
//! let text = "Title: Sign in\n|| Main\n# Sign in\nEmail: [____]\n[[Continue]]";
//!
//! let document = wiretext::parse(text);
//! assert_eq!(document.landmark_names(), vec!["Main"]);
//!
//! assert!(wiretext::validate(text).is_empty());
//! assert!(wiretext::render_svg(text, None).starts_with("<?xml"));
//! ```

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod export;
pub mod line_classifier;
pub mod patterns;
pub mod pipeline;
pub mod render_config;
pub mod source_model;
pub mod storage;
pub mod svg_exporter;
pub mod validation;

pub use export::{suggested_filename, wrap_for, ExportTarget, SaveRequest};
pub use line_classifier::{classify_line, Category};
pub use render_config::RenderConfig;
pub use source_model::{parse, Element, WireframeDocument};
pub use svg_exporter::render_svg;
pub use validation::{validate, Diagnostic, Finding};
