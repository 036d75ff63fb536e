use crate::article::{Infobox, InfoboxFields};
use crate::extract::Facts;

/// `name` always comes first; every other key appears only when a non-blank
/// value was extracted, in a fixed order independent of extraction order.
pub fn build_infobox(title: &str, template: &str, facts: &Facts) -> Infobox {
    let mut fields = InfoboxFields::new();
    fields.insert("name", title);
    for (key, value) in facts.entries() {
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            fields.insert(key, v);
        }
    }
    Infobox {
        template: template.to_string(),
        fields,
    }
}

// ── Tests ──
