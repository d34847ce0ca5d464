//! Skills section: entries grouped by category and rendered as a bold
//! label followed by a comma-joined, word-wrapped list.
//!
//! Categorization runs each skill against an ordered, fixed sequence of
//! pattern groups; the first group that matches wins. The declaration
//! order below IS the contract — a term matching both the backend and
//! database groups (e.g. "aws") lands in the earlier group. The fallback
//! category collects everything no group matched.

use super::{Block, Line, RenderContext, Span};
use crate::style::Rgb;
use regex::Regex;
use std::sync::OnceLock;

/// The category groups in evaluation order. Pattern sources are
/// case-insensitive alternations over technology name fragments.
const CATEGORY_GROUPS: [(&str, &str); 3] = [
    (
        "Frontend",
        r"(?i)html|css|scss|bootstrap|react|vue|angular|jsx|javascript|typescript|responsive|ui|ux|sass|less|jquery|dom|design",
    ),
    (
        "Backend",
        r"(?i)node|express|flask|django|spring|rest|api|server|java|python|php|ruby|go|microservice|\.net|c#|aspnet|aws|azure|cloud|lambda|serverless",
    ),
    (
        "Databases",
        r"(?i)sql|mongo|database|data|nosql|postgres|oracle|mysql|redis|cache|firebase|aws|dynamodb|neo4j|graphdb|storage",
    ),
];

/// Label for skills no pattern group claimed.
const FALLBACK_CATEGORY: &str = "Other Skills";

fn compiled_groups() -> &'static Vec<(&'static str, Regex)> {
    static GROUPS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    GROUPS.get_or_init(|| {
        CATEGORY_GROUPS
            .iter()
            .map(|(label, pattern)| {
                (
                    *label,
                    Regex::new(pattern).expect("category pattern must compile"),
                )
            })
            .collect()
    })
}

/// Assign a skill to the first matching category group.
pub fn categorize(skill: &str) -> &'static str {
    for (label, regex) in compiled_groups() {
        if regex.is_match(skill) {
            return label;
        }
    }
    FALLBACK_CATEGORY
}

pub fn render(skills: &[String], ctx: &RenderContext<'_>) -> Vec<Block> {
    if skills.is_empty() {
        return Vec::new();
    }

    let profile = ctx.profile;
    let measurer = ctx.measurer;
    let body = ctx.body_font();
    let label_font = body.bold();

    // Bucket in declaration order, fallback last.
    let mut buckets: Vec<(&str, Vec<&str>)> = CATEGORY_GROUPS
        .iter()
        .map(|(label, _)| (*label, Vec::new()))
        .collect();
    buckets.push((FALLBACK_CATEGORY, Vec::new()));

    for skill in skills {
        let category = categorize(skill);
        let bucket = buckets
            .iter_mut()
            .find(|(label, _)| *label == category)
            .expect("categorize returns a known label");
        bucket.1.push(skill);
    }

    let mut blocks = Vec::new();
    let mut first = true;

    for (label, entries) in buckets.iter().filter(|(_, e)| !e.is_empty()) {
        let mut lines = Vec::new();
        if first {
            lines.push(ctx.section_title_line("Skills"));
            first = false;
        }

        let label_text = format!("{}: ", label);
        let label_width = measurer.width(&label_text, label_font);
        let joined = entries.join(", ");
        let wrapped = measurer.wrap(&joined, (ctx.width - label_width).max(1.0), body);

        for (i, text) in wrapped.iter().enumerate() {
            let line = if i == 0 {
                Line::new(
                    vec![
                        Span::new(label_text.clone(), label_font, Rgb::BLACK),
                        Span::new(text.clone(), body, profile.secondary_color),
                    ],
                    ctx.body_advance(),
                )
            } else {
                // Continuation lines align under the list, past the label.
                Line::new(
                    vec![Span::new(text.clone(), body, profile.secondary_color)],
                    ctx.body_advance(),
                )
                .with_indent(label_width)
            };
            lines.push(line);
        }

        blocks.push(Block::new(lines).with_spacing_after(profile.paragraph_spacing));
    }

    if let Some(last) = blocks.last_mut() {
        last.spacing_after = profile.section_spacing;
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleOverrides;

    #[test]
    fn first_match_wins_in_declaration_order() {
        // "aws" appears in both the Backend and Databases groups; the
        // earlier group claims it.
        assert_eq!(categorize("AWS"), "Backend");
        assert_eq!(categorize("React"), "Frontend");
        assert_eq!(categorize("PostgreSQL"), "Databases");
        assert_eq!(categorize("Figma"), "Other Skills");
    }

    #[test]
    fn categorization_is_case_insensitive() {
        assert_eq!(categorize("react"), categorize("REACT"));
    }

    #[test]
    fn sample_skills_land_in_expected_buckets() {
        assert_eq!(categorize("Node.js"), "Backend");
        assert_eq!(categorize("SQL"), "Databases");
        assert_eq!(categorize("Python"), "Backend");
        assert_eq!(categorize("TypeScript"), "Frontend");
    }

    #[test]
    fn title_attached_to_first_category_block() {
        let profile = StyleOverrides::default().resolve();
        let ctx = RenderContext::new(&profile, 400.0);
        let skills = vec!["React".to_string(), "SQL".to_string()];
        let blocks = render(&skills, &ctx);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines[0].spans[0].text, "SKILLS");
        assert!(blocks[0].lines[1].spans[0].text.starts_with("Frontend:"));
    }

    #[test]
    fn wrapped_list_rejoins_to_original() {
        let profile = StyleOverrides::default().resolve();
        // Narrow column forces the comma list to wrap.
        let ctx = RenderContext::new(&profile, 140.0);
        let skills: Vec<String> = (0..20).map(|i| format!("LongSkillName{:02}", i)).collect();
        let blocks = render(&skills, &ctx);

        let mut rejoined = String::new();
        for block in &blocks {
            for line in &block.lines {
                for span in &line.spans {
                    if span.text.ends_with(": ") || span.text == "SKILLS" {
                        continue;
                    }
                    if !rejoined.is_empty() {
                        rejoined.push(' ');
                    }
                    rejoined.push_str(&span.text);
                }
            }
        }
        let expected = skills.join(", ");
        assert_eq!(rejoined.split_whitespace().collect::<Vec<_>>(),
                   expected.split_whitespace().collect::<Vec<_>>());
    }

    #[test]
    fn empty_skills_render_nothing() {
        let profile = StyleOverrides::default().resolve();
        let ctx = RenderContext::new(&profile, 400.0);
        assert!(render(&[], &ctx).is_empty());
    }
}
