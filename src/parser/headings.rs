use crate::article::Section;

const MIN_LEVEL: usize = 2;
const MAX_LEVEL: usize = 6;

/// A heading line found in the source text, with byte offsets of the whole line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMarker {
    pub level: usize,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Recognize `== Heading ==` style lines. The delimiter run must be 2..=6
/// equals signs and the same length on both sides; longer runs are tried first.
pub fn parse_marker(line: &str) -> Option<(usize, &str)> {
    let line = line.trim();
    (MIN_LEVEL..=MAX_LEVEL).rev().find_map(|level| {
        if line.len() < level * 2 {
            return None;
        }
        // '=' is ASCII, so byte slicing at the runs lands on char boundaries.
        let bytes = line.as_bytes();
        let is_run = |run: &[u8]| run.iter().all(|&b| b == b'=');
        if is_run(&bytes[..level]) && is_run(&bytes[line.len() - level..]) {
            Some((level, line[level..line.len() - level].trim()))
        } else {
            None
        }
    })
}

pub fn find_markers(text: &str) -> Vec<HeadingMarker> {
    let mut markers = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        if let Some((level, heading)) = parse_marker(line) {
            markers.push(HeadingMarker {
                level,
                text: heading.to_string(),
                start,
                end: offset,
            });
        }
    }
    markers
}

/// Split text on explicit heading markers. Returns `("", [])` when the text
/// has none, which tells the caller to fall back to paragraph segmentation.
pub fn split_on_headings(text: &str) -> (String, Vec<Section>) {
    let markers = find_markers(text);
    let Some(first) = markers.first() else {
        return (String::new(), Vec::new());
    };

    let lead = text[..first.start].trim().to_string();
    let sections = markers
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start);
            Section::new(&m.text, &text[m.end..end])
        })
        .collect();

    (lead, sections)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_levels() {
        assert_eq!(parse_marker("== Early life =="), Some((2, "Early life")));
        assert_eq!(parse_marker("=== Career ==="), Some((3, "Career")));
        assert_eq!(parse_marker("======Deep======"), Some((6, "Deep")));
        assert_eq!(parse_marker("  ==  Padded  ==  "), Some((2, "Padded")));
    }

    #[test]
    fn unbalanced_is_prose() {
        assert_eq!(parse_marker("== Heading ="), None);
        assert_eq!(parse_marker("= Heading ="), None);
        assert_eq!(parse_marker("== Heading"), None);
        assert_eq!(parse_marker("==="), None);
    }

    #[test]
    fn empty_heading_text() {
        assert_eq!(parse_marker("===="), Some((2, "")));
        let (_, sections) = split_on_headings("Lead\n== ==\nBody");
        assert_eq!(sections[0].heading, "Section");
        assert_eq!(sections[0].content, "Body");
    }

    #[test]
    fn no_markers_is_empty() {
        let (lead, sections) = split_on_headings("Just prose.\n\nMore prose.");
        assert!(lead.is_empty());
        assert!(sections.is_empty());
    }

    #[test]
    fn lead_and_sections_in_order() {
        let text = "Intro line.\n\n== Early life ==\nContent A\n== Career ==\nContent B";
        let (lead, sections) = split_on_headings(text);
        assert_eq!(lead, "Intro line.");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], Section::new("Early life", "Content A"));
        assert_eq!(sections[1], Section::new("Career", "Content B"));
    }

    #[test]
    fn mixed_levels_all_count() {
        let text = "== A ==\none\n=== A.1 ===\ntwo\n==== A.1.1 ====\nthree";
        let markers = find_markers(text);
        let levels: Vec<usize> = markers.iter().map(|m| m.level).collect();
        assert_eq!(levels, vec![2, 3, 4]);
        let (lead, sections) = split_on_headings(text);
        assert!(lead.is_empty());
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[2].content, "three");
    }

    #[test]
    fn marker_split_across_lines_is_prose() {
        assert!(find_markers("== A\n==").is_empty());
        let (lead, sections) = split_on_headings("Lead\n== A\n==\nBody");
        assert!(lead.is_empty());
        assert!(sections.is_empty());
    }

    #[test]
    fn crlf_lines() {
        let text = "Lead\r\n== Life ==\r\nBody text\r\n";
        let (lead, sections) = split_on_headings(text);
        assert_eq!(lead, "Lead");
        assert_eq!(sections, vec![Section::new("Life", "Body text")]);
    }

    #[test]
    fn consecutive_headings_leave_empty_content() {
        let (_, sections) = split_on_headings("== One ==\n== Two ==\nx");
        assert_eq!(sections[0].content, "");
        assert_eq!(sections[1].content, "x");
    }
}
