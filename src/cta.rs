//! Call-to-action tag injection for post bodies.

/// Rendered tag for the primary CTA slot.
pub const CTA_TAG_1: &str = "<blogcta1></blogcta1>";

/// Rendered tag for the secondary CTA slot.
pub const CTA_TAG_2: &str = "<blogcta2></blogcta2>";

/// Placeholder comment lines authors put in Markdown.
const CTA_PLACEHOLDER_1: &str = "<!-- cta-1 -->";
const CTA_PLACEHOLDER_2: &str = "<!-- cta-2 -->";

/// Replace CTA placeholder lines with their rendered tags.
///
/// A placeholder only matches when it is the entire line. When neither
/// placeholder is present, [`CTA_TAG_1`] is inserted as a new line
/// immediately before the second `## ` heading; documents with fewer
/// than two such headings are returned unchanged.
pub fn inject_call_to_action(markdown: &str) -> String {
    let mut lines: Vec<&str> = markdown.split('\n').collect();

    let mut replaced = false;
    for line in lines.iter_mut() {
        if *line == CTA_PLACEHOLDER_1 {
            *line = CTA_TAG_1;
            replaced = true;
        } else if *line == CTA_PLACEHOLDER_2 {
            *line = CTA_TAG_2;
            replaced = true;
        }
    }

    if !replaced && let Some(index) = second_h2_index(&lines) {
        lines.insert(index, CTA_TAG_1);
    }

    lines.join("\n")
}

/// Index of the second line starting with `"## "`, if there is one.
fn second_h2_index(lines: &[&str]) -> Option<usize> {
    let mut seen = 0;
    for (index, line) in lines.iter().enumerate() {
        if line.starts_with("## ") {
            seen += 1;
            if seen == 2 {
                return Some(index);
            }
        }
    }
    None
}
