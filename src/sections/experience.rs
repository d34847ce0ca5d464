//! Experience section: job title bold with the duration right-aligned,
//! company italic, description wrapped — or exploded into bullet blocks
//! when it carries explicit markers.

use super::{bullet_blocks, push_description_lines, Block, Line, RenderContext, Span};
use crate::model::Experience;
use crate::style::Rgb;
use crate::text::split_bullets;

pub fn render(entries: &[Experience], ctx: &RenderContext<'_>) -> Vec<Block> {
    if entries.is_empty() {
        return Vec::new();
    }

    let profile = ctx.profile;
    let mut blocks = Vec::new();

    for (index, exp) in entries.iter().enumerate() {
        let mut lines = Vec::new();
        if index == 0 {
            lines.push(ctx.section_title_line("Experience"));
        }

        let mut title = Line::new(
            vec![Span::new(
                exp.title.clone(),
                ctx.sub_header_font().bold(),
                Rgb::BLACK,
            )],
            profile.line_advance(profile.sub_header_font_size),
        );
        if !exp.duration.trim().is_empty() {
            title = title.with_trailing(Span::new(
                exp.duration.trim(),
                ctx.body_font(),
                profile.secondary_color,
            ));
        }
        lines.push(title);

        if !exp.company.trim().is_empty() {
            lines.push(Line::new(
                vec![Span::new(
                    exp.company.clone(),
                    ctx.body_font().italic(),
                    profile.secondary_color,
                )],
                ctx.body_advance(),
            ));
        }

        let description = exp.description.trim();
        let bullets = if description.is_empty() {
            None
        } else {
            split_bullets(description)
        };

        match bullets {
            Some(items) => {
                blocks.push(Block::new(lines));
                let mut item_blocks = bullet_blocks(ctx, &items, Rgb::BLACK);
                if let Some(last) = item_blocks.last_mut() {
                    last.spacing_after = profile.paragraph_spacing;
                }
                blocks.extend(item_blocks);
            }
            None => {
                if !description.is_empty() {
                    push_description_lines(&mut lines, ctx, description, Rgb::BLACK);
                }
                blocks.push(Block::new(lines).with_spacing_after(profile.paragraph_spacing));
            }
        }
    }

    if let Some(last) = blocks.last_mut() {
        last.spacing_after = profile.section_spacing;
    }
    blocks
}
