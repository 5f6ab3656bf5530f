//! Duplicate link check
//!
//! Scans raw lines with its own link pattern rather than the parsed element
//! tree, so bracketed text inside headings, landmarks or button lines is
//! checked too.

use super::diagnostic::{Diagnostic, Finding};
use crate::source_model::LINK_REGEX;
use std::collections::HashMap;

/// One link key with every line it was seen on
#[derive(Debug, Clone, PartialEq, Eq)]
struct LinkOccurrences {
    text: String,
    url: Option<String>,
    lines: Vec<usize>,
}

/// Placeholder blanks like `[____]` or `[__ __]` are form fields
fn is_placeholder(text: &str) -> bool {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    !compact.is_empty() && compact.chars().all(|c| c == '_')
}

/// Report link text and destination pairs that appear on more than one line
///
/// Links without a destination share a key by text alone. Diagnostics come
/// out in order of each key's first appearance.
pub fn check_duplicate_links(lines: &[&str]) -> Vec<Diagnostic> {
    let mut order: Vec<LinkOccurrences> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;

        for caps in LINK_REGEX.captures_iter(line) {
            let text = caps[1].trim();
            if is_placeholder(text) {
                continue;
            }
            let url = caps
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|u| !u.is_empty());

            let key = format!("{}|{}", text, url.unwrap_or("NO_URL"));
            let slot = *index_by_key.entry(key).or_insert_with(|| {
                order.push(LinkOccurrences {
                    text: text.to_string(),
                    url: url.map(str::to_string),
                    lines: Vec::new(),
                });
                order.len() - 1
            });

            let occurrences = &mut order[slot];
            if occurrences.lines.last() != Some(&line_number) {
                occurrences.lines.push(line_number);
            }
        }
    }

    order
        .into_iter()
        .filter(|occurrences| occurrences.lines.len() > 1)
        .map(|occurrences| {
            let lines = occurrences.lines.clone();
            Diagnostic::new(
                Finding::DuplicateLink {
                    text: occurrences.text,
                    url: occurrences.url,
                    lines: occurrences.lines,
                },
                lines,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> Vec<Diagnostic> {
        let lines: Vec<&str> = text.lines().collect();
        check_duplicate_links(&lines)
    }

    #[test]
    fn test_duplicate_link_lists_all_lines() {
        let diagnostics = check("[Learn more](/docs)\nintro\n[Learn more](/docs)\n[Learn more](/docs)");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].lines, vec![1, 3, 4]);
        assert_eq!(
            diagnostics[0].message(),
            "Duplicate links detected: \"Learn more\" → /docs appears on lines 1, 3, 4"
        );
    }

    #[test]
    fn test_same_text_different_urls_is_fine() {
        assert!(check("[Learn more](/docs)\n[Learn more](/pricing)").is_empty());
    }

    #[test]
    fn test_undefined_links_share_a_key() {
        let diagnostics = check("[Contact us]\n[Contact us]");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].finding,
            Finding::DuplicateLink {
                text: "Contact us".to_string(),
                url: None,
                lines: vec![1, 2]
            }
        );
    }

    #[test]
    fn test_text_and_url_are_trimmed() {
        assert_eq!(check("[ Home ]( / )\n[Home](/)").len(), 1);
    }

    #[test]
    fn test_placeholders_are_ignored() {
        assert!(check("[____]\n[____]\nName: [__ __]\nEmail: [__ __]").is_empty());
    }

    #[test]
    fn test_repeat_on_one_line_is_not_a_duplicate() {
        assert!(check("[Top] [Top]").is_empty());
    }

    #[test]
    fn test_links_inside_headings_are_checked() {
        assert_eq!(check("## [Offers](/offers)\n[Offers](/offers)").len(), 1);
    }

    #[test]
    fn test_order_follows_first_appearance() {
        let diagnostics = check("[B]\n[A]\n[A]\n[B]");

        let texts: Vec<String> = diagnostics
            .iter()
            .map(|d| match &d.finding {
                Finding::DuplicateLink { text, .. } => text.clone(),
                other => panic!("Unexpected finding {other:?}"),
            })
            .collect();
        assert_eq!(texts, vec!["B", "A"]);
    }
}
