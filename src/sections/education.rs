//! Education section: institution bold with the year right-aligned on the
//! same baseline, degree and grade italic below.

use super::{Block, Line, RenderContext, Span};
use crate::model::Education;
use crate::style::Rgb;

pub fn render(entries: &[Education], ctx: &RenderContext<'_>) -> Vec<Block> {
    if entries.is_empty() {
        return Vec::new();
    }

    let profile = ctx.profile;
    let mut blocks = Vec::with_capacity(entries.len());

    for (index, edu) in entries.iter().enumerate() {
        let mut lines = Vec::new();
        if index == 0 {
            // The title stays attached to the first entry so the two can
            // never end up on opposite sides of a page break.
            lines.push(ctx.section_title_line("Education"));
        }

        let heading = ctx.sub_header_font().bold();
        let mut institution = Line::new(
            vec![Span::new(edu.institution.clone(), heading, Rgb::BLACK)],
            profile.line_advance(profile.sub_header_font_size),
        );
        if !edu.year.trim().is_empty() {
            institution = institution.with_trailing(Span::new(
                edu.year.trim(),
                ctx.body_font(),
                profile.secondary_color,
            ));
        }
        lines.push(institution);

        let degree_text = match &edu.grade {
            Some(grade) if !grade.trim().is_empty() => {
                format!("{} - CGPA: {}", edu.degree, grade.trim())
            }
            _ => edu.degree.clone(),
        };
        lines.push(Line::new(
            vec![Span::new(degree_text, ctx.body_font().italic(), Rgb::BLACK)],
            ctx.body_advance(),
        ));

        let spacing = if index + 1 == entries.len() {
            profile.section_spacing
        } else {
            profile.paragraph_spacing
        };
        blocks.push(Block::new(lines).with_spacing_after(spacing));
    }

    blocks
}
