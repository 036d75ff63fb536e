use std::sync::LazyLock;

use regex::Regex;

/// "4 July 1980", "1980-07-04" or a bare "1980", tried in that order.
pub const DATE_PATTERN: &str = r"(?:\d{1,2}\s+[A-Z][a-z]+\s+\d{4}|\d{4}-\d{2}-\d{2}|\d{4})";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeEvent {
    Birth,
    Death,
}

impl LifeEvent {
    pub fn keyword(self) -> &'static str {
        match self {
            LifeEvent::Birth => "born",
            LifeEvent::Death => "died",
        }
    }
}

struct EventPatterns {
    parenthesized: Regex,
    bare: Regex,
}

impl EventPatterns {
    fn new(event: LifeEvent) -> Self {
        let kw = event.keyword();
        EventPatterns {
            parenthesized: Regex::new(&format!(r"(?i)\({kw}\s+(?P<date>{DATE_PATTERN})\)")).unwrap(),
            bare: Regex::new(&format!(r"(?i)\b{kw}\s+(?P<date>{DATE_PATTERN})\b")).unwrap(),
        }
    }
}

static BIRTH: LazyLock<EventPatterns> = LazyLock::new(|| EventPatterns::new(LifeEvent::Birth));
static DEATH: LazyLock<EventPatterns> = LazyLock::new(|| EventPatterns::new(LifeEvent::Death));

/// Date attached to "born"/"died". "(born DATE)" beats a bare "born DATE".
pub fn event_date(sentence: &str, event: LifeEvent) -> Option<String> {
    let patterns = match event {
        LifeEvent::Birth => &*BIRTH,
        LifeEvent::Death => &*DEATH,
    };
    patterns
        .parenthesized
        .captures(sentence)
        .or_else(|| patterns.bare.captures(sentence))
        .map(|caps| caps["date"].to_string())
}

pub fn birth_date(sentence: &str) -> Option<String> {
    event_date(sentence, LifeEvent::Birth)
}

pub fn death_date(sentence: &str) -> Option<String> {
    event_date(sentence, LifeEvent::Death)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parenthesized_birth() {
        let s = "Jane Doe (born 4 July 1980) is an American mathematician.";
        assert_eq!(birth_date(s).as_deref(), Some("4 July 1980"));
        assert_eq!(death_date(s), None);
    }

    #[test]
    fn iso_and_year_forms() {
        assert_eq!(birth_date("X (born 1980-07-04) is").as_deref(), Some("1980-07-04"));
        assert_eq!(birth_date("X (born 1980) is").as_deref(), Some("1980"));
    }

    #[test]
    fn bare_form_fallback() {
        let s = "Ada (born 10 December 1815 in London; died 27 November 1852) was a writer";
        assert_eq!(birth_date(s).as_deref(), Some("10 December 1815"));
        assert_eq!(death_date(s).as_deref(), Some("27 November 1852"));
    }

    #[test]
    fn parenthesized_preferred_over_bare() {
        let s = "He was born 1900 somewhere, records say (born 1901).";
        assert_eq!(birth_date(s).as_deref(), Some("1901"));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(birth_date("X (BORN 1950) WAS").as_deref(), Some("1950"));
        assert_eq!(death_date("x DIED 2001.").as_deref(), Some("2001"));
    }

    #[test]
    fn keyword_inside_word_is_ignored() {
        assert_eq!(birth_date("the stubborn 1999 mule"), None);
        assert_eq!(birth_date("reborn 1999"), None);
    }

    #[test]
    fn no_date_after_keyword() {
        assert_eq!(birth_date("She was born in Paris."), None);
    }
}
