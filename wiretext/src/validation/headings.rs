//! Heading structure checks

use super::diagnostic::{Diagnostic, Finding};
use regex::Regex;
use std::sync::LazyLock;

// Markers must start the raw line and be followed by a space.
static HEADING_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6}) ").expect("HEADING_MARKER_REGEX: invalid regex pattern")
});

/// A heading found while scanning lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingRecord {
    pub level: u8,
    /// 1-based line number
    pub line: usize,
}

/// Collect heading records from raw lines
pub fn collect_headings(lines: &[&str]) -> Vec<HeadingRecord> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            HEADING_MARKER_REGEX.captures(line).map(|caps| HeadingRecord {
                level: caps[1].len() as u8,
                line: index + 1,
            })
        })
        .collect()
}

/// The first heading must be level 1
pub fn check_entry_point(headings: &[HeadingRecord]) -> Option<Diagnostic> {
    let first = headings.first()?;
    (first.level != 1).then(|| {
        Diagnostic::new(
            Finding::FirstHeadingNotLevel1 {
                level: first.level,
                line: first.line,
            },
            vec![first.line],
        )
    })
}

/// At most one level 1 heading
pub fn check_single_level1(headings: &[HeadingRecord]) -> Option<Diagnostic> {
    let h1_lines: Vec<usize> = headings
        .iter()
        .filter(|h| h.level == 1)
        .map(|h| h.line)
        .collect();

    (h1_lines.len() > 1).then(|| {
        Diagnostic::new(
            Finding::MultipleLevel1Headings {
                count: h1_lines.len(),
            },
            h1_lines,
        )
    })
}

/// Headings must not go more than one level deeper than their predecessor
///
/// Going back up any number of levels is allowed.
pub fn check_level_skips(headings: &[HeadingRecord]) -> Vec<Diagnostic> {
    headings
        .windows(2)
        .filter(|pair| pair[1].level > pair[0].level + 1)
        .map(|pair| {
            Diagnostic::new(
                Finding::HeadingLevelSkip {
                    from: pair[0].level,
                    to: pair[1].level,
                    line: pair[1].line,
                },
                vec![pair[1].line],
            )
        })
        .collect()
}
