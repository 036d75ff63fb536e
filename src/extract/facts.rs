use std::sync::LazyLock;

use regex::Regex;

use super::dates::DATE_PATTERN;

pub const OCCUPATION_MAX_CHARS: usize = 160;

static BIRTH_PLACE_DATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\bborn\s+{DATE_PATTERN}\s+in\s+(?P<place>[^.,;()]+)")).unwrap()
});
static BIRTH_PLACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bborn\s+in\s+(?P<place>[^.,;()]+)").unwrap());
static OCCUPATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?P<verb>is|was)\s+(?P<article>an?|the)\s+(?P<occupation>[^.;()]+)").unwrap()
});
static OCCUPATION_STOP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bchiefly known for\b|\bknown\s+for\b|\bwho\b|\bwhich\b").unwrap()
});
static CHIEFLY_KNOWN_FOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bchiefly known for\s+(?P<subject>[^.;]+)").unwrap());
static KNOWN_FOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bknown for\s+(?P<subject>[^.;]+)").unwrap());

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// "born DATE in PLACE", falling back to "born in PLACE" only when the dated
/// form does not match at all. A dated match with a blank place yields nothing.
pub fn birth_place(sentence: &str) -> Option<String> {
    BIRTH_PLACE_DATED_RE
        .captures(sentence)
        .or_else(|| BIRTH_PLACE_RE.captures(sentence))
        .and_then(|caps| non_empty(&caps["place"]))
}

/// Noun phrase after "is/was a/an/the", cut before any "known for"/"who"/"which" clause.
pub fn occupation(sentence: &str) -> Option<String> {
    let caps = OCCUPATION_RE.captures(sentence)?;
    let phrase = &caps["occupation"];
    let phrase = match OCCUPATION_STOP_RE.find(phrase) {
        Some(stop) => &phrase[..stop.start()],
        None => phrase,
    };
    non_empty(phrase).map(|occ| occ.chars().take(OCCUPATION_MAX_CHARS).collect())
}

/// Subject of "chiefly known for", else of "known for".
pub fn known_for(sentence: &str) -> Option<String> {
    CHIEFLY_KNOWN_FOR_RE
        .captures(sentence)
        .or_else(|| KNOWN_FOR_RE.captures(sentence))
        .and_then(|caps| non_empty(&caps["subject"]))
}

// ── Tests ──
