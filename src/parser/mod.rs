pub mod headings;
pub mod paragraphs;

use crate::article::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Headings,
    Paragraphs,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Headings => "headings",
            Strategy::Paragraphs => "paragraphs",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Segmented {
    pub lead: String,
    pub sections: Vec<Section>,
    pub strategy: Strategy,
}

/// Explicit heading markers win; otherwise fall back to the paragraph heuristic.
/// Sections always come from exactly one strategy.
pub fn segment(text: &str) -> Segmented {
    let (heading_lead, heading_sections) = headings::split_on_headings(text);
    if !heading_sections.is_empty() {
        let lead = if heading_lead.is_empty() {
            paragraphs::first_paragraph(text)
        } else {
            heading_lead
        };
        return Segmented {
            lead,
            sections: heading_sections,
            strategy: Strategy::Headings,
        };
    }

    let (lead, sections) = paragraphs::segment_paragraphs(text);
    Segmented {
        lead,
        sections,
        strategy: Strategy::Paragraphs,
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_take_precedence() {
        let s = segment("Lead.\n\nA\n\nB\n\nC\n== Notes ==\nD");
        assert_eq!(s.strategy, Strategy::Headings);
        assert_eq!(s.sections.len(), 1);
        assert_eq!(s.lead, "Lead.\n\nA\n\nB\n\nC");
    }

    #[test]
    fn unbalanced_heading_falls_back() {
        let s = segment("Lead.\n\n== Not a heading =\nBody");
        assert_eq!(s.strategy, Strategy::Paragraphs);
        assert_eq!(s.sections.len(), 1);
        assert_eq!(s.sections[0].heading, "Biography");
    }

    #[test]
    fn heading_first_borrows_paragraph_lead() {
        let s = segment("== Life ==\nBorn somewhere.\n\nMore.");
        assert_eq!(s.strategy, Strategy::Headings);
        assert_eq!(s.lead, "== Life ==\nBorn somewhere.");
    }

    #[test]
    fn fixture_with_headings() {
        let text = std::fs::read_to_string("tests/fixtures/ada_lovelace.txt").unwrap();
        let s = segment(text.trim());
        assert_eq!(s.strategy, Strategy::Headings);
        let names: Vec<&str> = s.sections.iter().map(|x| x.heading.as_str()).collect();
        assert_eq!(names, vec!["Early life", "Education", "Work with Babbage", "Death", "Legacy"]);
        assert!(s.lead.starts_with("Augusta Ada King"));
    }

    #[test]
    fn fixture_plain_prose() {
        let text = std::fs::read_to_string("tests/fixtures/jane_doe.txt").unwrap();
        let s = segment(text.trim());
        assert_eq!(s.strategy, Strategy::Paragraphs);
        let names: Vec<&str> = s.sections.iter().map(|x| x.heading.as_str()).collect();
        assert_eq!(names, vec!["Early life", "Career", "Legacy"]);
    }
}
