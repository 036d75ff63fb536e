use tracing::debug;

use crate::article::StructuredArticle;
use crate::extract::extract_facts;
use crate::infobox::build_infobox;
use crate::parser;
use crate::render::render;

/// Segmentation → fact extraction → infobox. Pure function of its inputs.
pub fn structure(title: &str, text: &str, template: &str) -> StructuredArticle {
    let text = text.trim();
    let segmented = parser::segment(text);
    debug!(
        strategy = segmented.strategy.as_str(),
        sections = segmented.sections.len(),
        lead_len = segmented.lead.len(),
        "segmented article"
    );

    let facts = extract_facts(&segmented.lead);
    let infobox = build_infobox(title, template, &facts);

    StructuredArticle {
        title: title.to_string(),
        infobox,
        lead: segmented.lead,
        sections: segmented.sections,
        categories: Vec::new(),
        references: Vec::new(),
        wikitext: None,
    }
}

/// `structure`, plus rendered markup when `generate_wikitext` is set.
pub fn run(title: &str, text: &str, template: &str, generate_wikitext: bool) -> StructuredArticle {
    let mut article = structure(title, text, template);
    if generate_wikitext {
        article.wikitext = Some(render(&article));
    }
    article
}

// ── Tests ──
