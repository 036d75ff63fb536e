pub mod dates;
pub mod facts;

use tracing::debug;

/// Biographical facts pulled from a lead sentence. `None` means not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facts {
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    pub death_date: Option<String>,
    pub occupation: Option<String>,
    pub known_for: Option<String>,
}

impl Facts {
    /// Fields in infobox order, paired with their infobox keys.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("birth_date", self.birth_date.as_deref()),
            ("birth_place", self.birth_place.as_deref()),
            ("death_date", self.death_date.as_deref()),
            ("occupation", self.occupation.as_deref()),
            ("known_for", self.known_for.as_deref()),
        ]
    }

    pub fn found(&self) -> Vec<&'static str> {
        self.entries()
            .iter()
            .filter(|(_, v)| v.is_some())
            .map(|(k, _)| *k)
            .collect()
    }
}

/// Shortest prefix ending in `.`, `!` or `?` followed by whitespace.
/// A paragraph with no such boundary is its own sentence.
pub fn first_sentence(paragraph: &str) -> &str {
    let paragraph = paragraph.trim();
    let mut chars = paragraph.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(_, next)) = chars.peek() {
                if next.is_whitespace() {
                    let sentence = paragraph[..i + c.len_utf8()].trim();
                    if !sentence.is_empty() {
                        return sentence;
                    }
                    break;
                }
            }
        }
    }
    paragraph
}

/// Run every fact rule against the first sentence of `lead`. Rules are
/// independent; a miss on one never affects another.
pub fn extract_facts(lead: &str) -> Facts {
    let sentence = first_sentence(lead);
    let facts = Facts {
        birth_date: dates::birth_date(sentence),
        birth_place: facts::birth_place(sentence),
        death_date: dates::death_date(sentence),
        occupation: facts::occupation(sentence),
        known_for: facts::known_for(sentence),
    };
    debug!(sentence_len = sentence.len(), found = ?facts.found(), "extracted lead facts");
    facts
}

// ── Tests ──
