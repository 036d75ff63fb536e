use serde::{Deserialize, Serialize};

use crate::article::{StructuredArticle, DEFAULT_TEMPLATE};
use crate::error::{Error, Result};
use crate::pipeline;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureOptions {
    #[serde(default = "default_generate_wikitext")]
    pub generate_wikitext: bool,
    #[serde(default = "default_template")]
    pub template: String,
    // Accepted for compatibility; the structuring core ignores these.
    #[serde(default = "default_language")]
    pub language: Option<String>,
    #[serde(default)]
    pub return_debug: bool,
    #[serde(default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_generate_wikitext() -> bool {
    true
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_language() -> Option<String> {
    Some("en".to_string())
}

impl Default for StructureOptions {
    fn default() -> Self {
        StructureOptions {
            generate_wikitext: default_generate_wikitext(),
            template: default_template(),
            language: default_language(),
            return_debug: false,
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub options: StructureOptions,
}

impl ArticleInput {
    /// Decode one payload. `line` is the 1-based JSON Lines position, 0 for a whole document.
    pub fn from_json(raw: &str, line: usize) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| Error::Json { line, source })
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }
        Ok(())
    }
}

pub fn process(input: &ArticleInput) -> StructuredArticle {
    pipeline::run(
        &input.title,
        &input.text,
        &input.options.template,
        input.options.generate_wikitext,
    )
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_when_absent() {
        let input = ArticleInput::from_json(r#"{"title": "A", "text": "B"}"#, 0).unwrap();
        assert_eq!(input.options, StructureOptions::default());
        assert!(input.options.generate_wikitext);
        assert_eq!(input.options.template, "Infobox person");
        assert_eq!(input.options.language.as_deref(), Some("en"));
    }

    #[test]
    fn camel_case_option_names() {
        let raw = r#"{"title": "A", "text": "B",
            "options": {"generateWikitext": false, "template": "Infobox scientist",
                        "returnDebug": true, "extra": {"k": 1}}}"#;
        let input = ArticleInput::from_json(raw, 3).unwrap();
        assert!(!input.options.generate_wikitext);
        assert!(input.options.return_debug);
        assert_eq!(input.options.template, "Infobox scientist");
        assert_eq!(input.options.extra.get("k"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn malformed_payload_reports_line() {
        let err = ArticleInput::from_json("{not json", 7).unwrap_err();
        assert!(matches!(err, Error::Json { line: 7, .. }));
    }

    #[test]
    fn missing_title_is_rejected() {
        assert!(ArticleInput::from_json(r#"{"text": "B"}"#, 0).is_err());
        let blank = ArticleInput::from_json(r#"{"title": "  ", "text": "B"}"#, 0).unwrap();
        assert!(matches!(blank.validate(), Err(Error::EmptyTitle)));
    }

    #[test]
    fn process_honours_options() {
        let mut input = ArticleInput::from_json(
            r#"{"title": "Jane", "text": "Jane is a poet.", "options": {"template": "Infobox writer"}}"#,
            0,
        )
        .unwrap();
        let out = process(&input);
        assert!(out.wikitext.unwrap().starts_with("{{Infobox writer\n| name = Jane\n"));

        input.options.generate_wikitext = false;
        let out = process(&input);
        assert!(out.wikitext.is_none());
        let json = serde_json::to_value(&out).unwrap();
        assert!(json["wikitext"].is_null());
    }
}
