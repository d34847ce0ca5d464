//! Projects section: clickable bold title, wrapped or bulleted description,
//! and a `Technologies used:` label with an italic, wrapped list.

use super::{bullet_blocks, push_description_lines, Block, Line, RenderContext, Span};
use crate::model::Project;
use crate::style::Rgb;
use crate::text::split_bullets;

pub fn render(entries: &[Project], ctx: &RenderContext<'_>) -> Vec<Block> {
    if entries.is_empty() {
        return Vec::new();
    }

    let profile = ctx.profile;
    let mut blocks = Vec::new();

    for (index, project) in entries.iter().enumerate() {
        let mut lines = Vec::new();
        if index == 0 {
            lines.push(ctx.section_title_line("Projects"));
        }

        let linked = profile.enable_hyperlinks
            && project.link.as_deref().is_some_and(|l| !l.trim().is_empty());
        let title_color = if linked {
            profile.hyperlink_color
        } else {
            Rgb::BLACK
        };
        let mut title_span = Span::new(
            project.title.clone(),
            ctx.sub_header_font().bold(),
            title_color,
        );
        if linked {
            // Raw target; the link registry validates it and silently drops
            // the region (not the text) when it is malformed.
            title_span = title_span.with_href(project.link.clone().unwrap_or_default());
        }
        lines.push(Line::new(
            vec![title_span],
            profile.line_advance(profile.sub_header_font_size),
        ));

        let description = project.description.trim();
        let mut tail_lines: Vec<Line> = Vec::new();
        technologies_lines(&mut tail_lines, project, ctx);

        match split_bullets(description).filter(|_| !description.is_empty()) {
            Some(items) => {
                blocks.push(Block::new(lines));
                blocks.extend(bullet_blocks(ctx, &items, Rgb::BLACK));
                if !tail_lines.is_empty() {
                    blocks.push(
                        Block::new(tail_lines).with_spacing_after(profile.paragraph_spacing),
                    );
                }
            }
            None => {
                if !description.is_empty() {
                    push_description_lines(&mut lines, ctx, description, Rgb::BLACK);
                }
                lines.extend(tail_lines);
                blocks.push(Block::new(lines).with_spacing_after(profile.paragraph_spacing));
            }
        }
    }

    if let Some(last) = blocks.last_mut() {
        last.spacing_after = profile.section_spacing;
    }
    blocks
}

/// `Technologies used:` bold label, then the italic list wrapped to the
/// remaining width with continuation lines indented past the label.
fn technologies_lines(lines: &mut Vec<Line>, project: &Project, ctx: &RenderContext<'_>) {
    let technologies = project.technologies.trim();
    if technologies.is_empty() {
        return;
    }

    let profile = ctx.profile;
    let label_font = ctx.body_font().bold();
    let list_font = ctx.body_font().italic();
    let label = "Technologies used: ";
    let label_width = ctx.measurer.width(label, label_font);
    let wrapped = ctx
        .measurer
        .wrap(technologies, (ctx.width - label_width).max(1.0), list_font);

    for (i, text) in wrapped.iter().enumerate() {
        let line = if i == 0 {
            Line::new(
                vec![
                    Span::new(label, label_font, Rgb::BLACK),
                    Span::new(text.clone(), list_font, profile.secondary_color),
                ],
                ctx.body_advance(),
            )
        } else {
            Line::new(
                vec![Span::new(text.clone(), list_font, profile.secondary_color)],
                ctx.body_advance(),
            )
            .with_indent(label_width)
        };
        lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleOverrides;

    fn project(link: Option<&str>) -> Project {
        Project {
            title: "Orbit Tracker".into(),
            description: "Tracks satellites in real time.".into(),
            technologies: "Rust, WebGL".into(),
            link: link.map(String::from),
        }
    }

    #[test]
    fn linked_title_carries_href_and_link_color() {
        let profile = StyleOverrides::default().resolve();
        let ctx = RenderContext::new(&profile, 400.0);
        let blocks = render(&[project(Some("https://example.com"))], &ctx);
        let title = &blocks[0].lines[1].spans[0];
        assert_eq!(title.href.as_deref(), Some("https://example.com"));
        assert_eq!(title.color, profile.hyperlink_color);
    }

    #[test]
    fn unlinked_title_is_plain() {
        let profile = StyleOverrides::default().resolve();
        let ctx = RenderContext::new(&profile, 400.0);
        let blocks = render(&[project(None)], &ctx);
        let title = &blocks[0].lines[1].spans[0];
        assert!(title.href.is_none());
        assert_eq!(title.color, Rgb::BLACK);
    }

    #[test]
    fn technologies_render_with_bold_label() {
        let profile = StyleOverrides::default().resolve();
        let ctx = RenderContext::new(&profile, 400.0);
        let blocks = render(&[project(None)], &ctx);
        let lines = &blocks[0].lines;
        let tech = lines
            .iter()
            .find(|l| l.spans[0].text.starts_with("Technologies"))
            .unwrap();
        assert!(tech.spans[0].font.bold);
        assert!(tech.spans[1].font.italic);
    }

    #[test]
    fn missing_technologies_are_skipped() {
        let profile = StyleOverrides::default().resolve();
        let ctx = RenderContext::new(&profile, 400.0);
        let mut p = project(None);
        p.technologies = String::new();
        let blocks = render(&[p], &ctx);
        assert!(blocks[0]
            .lines
            .iter()
            .all(|l| !l.spans[0].text.starts_with("Technologies")));
    }
}
