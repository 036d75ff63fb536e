use std::sync::LazyLock;

use regex::Regex;

use crate::article::Section;

static PARAGRAPH_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static CHUNK_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

pub const EARLY_LIFE: &str = "Early life";
pub const CAREER: &str = "Career";
pub const LEGACY: &str = "Legacy";
pub const BIOGRAPHY: &str = "Biography";

/// Non-empty, trimmed paragraphs separated by blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// First paragraph of the text, or the first non-blank line if nothing splits out.
pub fn first_paragraph(text: &str) -> String {
    split_paragraphs(text)
        .first()
        .map(|p| p.to_string())
        .or_else(|| {
            text.lines()
                .map(str::trim)
                .find(|l| !l.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_default()
}

/// Fallback segmentation: first paragraph is the lead, the rest is bucketed
/// into fixed biography sections by chunk count.
pub fn segment_paragraphs(text: &str) -> (String, Vec<Section>) {
    let paragraphs = split_paragraphs(text);
    let lead = first_paragraph(text);
    let body = paragraphs.get(1..).unwrap_or_default().join("\n\n");
    (lead, bucket_body(&body))
}

fn bucket_body(body: &str) -> Vec<Section> {
    if body.is_empty() {
        return Vec::new();
    }

    let chunks: Vec<&str> = CHUNK_BREAK_RE.split(body).collect();
    match chunks.as_slice() {
        [first, middle @ .., last] if chunks.len() >= 3 => vec![
            Section::new(EARLY_LIFE, first),
            Section::new(CAREER, &middle.join("\n\n")),
            Section::new(LEGACY, last),
        ],
        _ => vec![Section::new(BIOGRAPHY, body)],
    }
}

// ── Tests ──
