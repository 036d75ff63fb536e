use crate::article::{StructuredArticle, PLACEHOLDER_HEADING};

/// Serialize an article into wiki markup: infobox, lead, sections, categories.
/// Output is deterministic and ends with exactly one newline.
pub fn render(article: &StructuredArticle) -> String {
    let mut lines: Vec<String> = Vec::new();

    let ib = &article.infobox;
    lines.push(format!("{{{{{}", ib.template));
    for (key, value) in ib.fields.iter() {
        let value = value.trim();
        if !value.is_empty() {
            lines.push(format!("| {} = {}", key, value));
        }
    }
    lines.push("}}".to_string());
    lines.push(String::new());

    let lead = article.lead.trim();
    if !lead.is_empty() {
        lines.push(lead.to_string());
        lines.push(String::new());
    }

    for section in &article.sections {
        let heading = match section.heading.trim() {
            "" => PLACEHOLDER_HEADING,
            h => h,
        };
        lines.push(format!("== {} ==", heading));
        let content = section.content.trim();
        if !content.is_empty() {
            lines.push(content.to_string());
        }
        lines.push(String::new());
    }

    for category in &article.categories {
        let category = category.trim();
        if !category.is_empty() {
            lines.push(format!("[[Category:{}]]", category));
        }
    }

    let mut out = lines.join("\n").trim_end().to_string();
    out.push('\n');
    out
}

// ── Tests ──
