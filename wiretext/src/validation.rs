//! Accessibility validation of wireframe text
//!
//! Runs a fixed set of independent checks over the raw lines and collects
//! every finding. Diagnostics are advisory: validation never fails and
//! never blocks rendering or export.

mod diagnostic;
mod headings;
mod links;
mod metadata_blocks;

pub use diagnostic::{Diagnostic, Finding};

/// Validate wireframe text
///
/// # Parameters
/// * `text` - Raw DSL text
///
/// # Returns
/// * `Vec<Diagnostic>` - Findings in check order: heading entry point,
///   single H1, level skips, metadata blocks, duplicate links
pub fn validate(text: &str) -> Vec<Diagnostic> {
    let lines: Vec<&str> = text.lines().collect();
    let heading_records = headings::collect_headings(&lines);

    let mut diagnostics = Vec::new();
    diagnostics.extend(headings::check_entry_point(&heading_records));
    diagnostics.extend(headings::check_single_level1(&heading_records));
    diagnostics.extend(headings::check_level_skips(&heading_records));
    diagnostics.extend(metadata_blocks::check_single_metadata_block(&lines));
    diagnostics.extend(links::check_duplicate_links(&lines));

    log::debug!(
        "Validated {} lines: {} headings, {} diagnostics",
        lines.len(),
        heading_records.len(),
        diagnostics.len()
    );

    diagnostics
}
