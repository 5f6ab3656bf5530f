//! Single metadata block check

use super::diagnostic::{Diagnostic, Finding};
use crate::line_classifier::is_metadata_line;

/// Count metadata blocks
///
/// The leading run of metadata lines counts once. After the first content
/// line, every further metadata line adds one to the count on its own,
/// even when several appear together.
///
/// # Returns
/// * `(count, stray_lines)` - Block count and the 1-based lines of metadata
///   found after content started
pub fn count_metadata_blocks(lines: &[&str]) -> (usize, Vec<usize>) {
    let mut blocks = 0;
    let mut content_seen = false;
    let mut stray_lines = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let is_metadata = is_metadata_line(line);

        if is_metadata {
            if content_seen {
                blocks += 1;
                stray_lines.push(index + 1);
            } else if blocks == 0 {
                blocks = 1;
            }
        } else if !line.trim().is_empty() {
            content_seen = true;
        }
    }

    (blocks, stray_lines)
}

/// A valid document has at most one metadata block
pub fn check_single_metadata_block(lines: &[&str]) -> Option<Diagnostic> {
    let (count, stray_lines) = count_metadata_blocks(lines);
    (count > 1).then(|| Diagnostic::new(Finding::MultipleMetadataBlocks { count }, stray_lines))
}
