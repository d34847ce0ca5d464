//! # Section Renderers
//!
//! One renderer per content category. Each consumes its slice of the
//! resume plus the resolved style and produces ordered [`Block`]s — the
//! unit the flow engine paginates. A block is never split across a page
//! boundary, so a section title travels in the same block as its first
//! content lines.

pub mod education;
pub mod experience;
pub mod header;
pub mod projects;
pub mod skills;

use crate::font::FontSpec;
use crate::model::ResumeData;
use crate::style::{Rgb, StyleProfile};
use crate::text::TextMeasurer;

/// Horizontal alignment of a line within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// A thin horizontal rule drawn under a line, spanning the column width.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub color: Rgb,
    pub thickness: f64,
}

/// One styled run of text. Spans carrying an `href` become clickable
/// regions whose rectangle is derived from this exact text's measured
/// width at placement time.
#[derive(Debug, Clone)]
pub struct Span {
    pub text: String,
    pub font: FontSpec,
    pub color: Rgb,
    pub href: Option<String>,
}

impl Span {
    pub fn new(text: impl Into<String>, font: FontSpec, color: Rgb) -> Self {
        Self {
            text: text.into(),
            font,
            color,
            href: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// A renderable line: left-to-right spans, an optional right-aligned
/// trailing span sharing the baseline (durations, years), and the vertical
/// advance the cursor moves after this line.
#[derive(Debug, Clone)]
pub struct Line {
    pub spans: Vec<Span>,
    pub trailing: Option<Span>,
    pub align: Align,
    pub advance: f64,
    /// Hanging indent for bullet continuation lines, points.
    pub indent: f64,
    pub rule_below: Option<Rule>,
}

impl Line {
    pub fn new(spans: Vec<Span>, advance: f64) -> Self {
        Self {
            spans,
            trailing: None,
            align: Align::Left,
            advance,
            indent: 0.0,
            rule_below: None,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn with_trailing(mut self, span: Span) -> Self {
        self.trailing = Some(span);
        self
    }

    pub fn with_indent(mut self, indent: f64) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule_below = Some(rule);
        self
    }
}

/// A renderable unit with a known minimum height. The flow engine tests
/// `min_height` against remaining page space before placing any line.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub lines: Vec<Line>,
    /// Vertical gap after the block. May spill past the break test.
    pub spacing_after: f64,
}

impl Block {
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            spacing_after: 0.0,
        }
    }

    pub fn with_spacing_after(mut self, spacing: f64) -> Self {
        self.spacing_after = spacing;
        self
    }

    /// Height this block needs before it may begin rendering.
    pub fn min_height(&self) -> f64 {
        self.lines.iter().map(|l| l.advance).sum()
    }
}

/// Shared context handed to every section renderer: the resolved style,
/// the measurer, and the width of the column the section renders into.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub profile: &'a StyleProfile,
    pub measurer: TextMeasurer,
    pub width: f64,
}

impl<'a> RenderContext<'a> {
    pub fn new(profile: &'a StyleProfile, width: f64) -> Self {
        Self {
            profile,
            measurer: TextMeasurer::new(),
            width,
        }
    }

    pub fn body_font(&self) -> FontSpec {
        FontSpec::new(self.profile.font_family, self.profile.body_font_size)
    }

    pub fn sub_header_font(&self) -> FontSpec {
        FontSpec::new(self.profile.font_family, self.profile.sub_header_font_size)
    }

    /// Uppercase section title with a thin secondary rule below it.
    pub fn section_title_line(&self, title: &str) -> Line {
        let profile = self.profile;
        let font = FontSpec::new(profile.font_family, profile.section_title_font_size).bold();
        let advance = profile.line_advance(profile.section_title_font_size) + 5.0;
        Line::new(
            vec![Span::new(title.to_uppercase(), font, profile.primary_color)],
            advance,
        )
        .with_rule(Rule {
            color: profile.secondary_color,
            thickness: 0.2,
        })
    }

    /// Advance for one body-sized line.
    pub fn body_advance(&self) -> f64 {
        self.profile.line_advance(self.profile.body_font_size)
    }
}

/// All rendered section blocks for one resume, ready for pagination.
#[derive(Debug, Clone, Default)]
pub struct SectionSet {
    pub header: Vec<Block>,
    pub education: Vec<Block>,
    pub skills: Vec<Block>,
    pub experience: Vec<Block>,
    pub projects: Vec<Block>,
}

/// Render every section. The header always spans the full content width;
/// in column mode Education and Skills wrap against the left column width
/// while Experience and Projects wrap against the right.
pub fn render_all(resume: &ResumeData, profile: &StyleProfile) -> SectionSet {
    let full = RenderContext::new(profile, profile.content_width());
    let (side, main) = if profile.column_layout {
        (
            RenderContext::new(profile, profile.left_column_width()),
            RenderContext::new(profile, profile.right_column_width()),
        )
    } else {
        (full, full)
    };

    SectionSet {
        header: header::render(&resume.personal_details, &full),
        education: education::render(&resume.education, &side),
        skills: skills::render(&resume.skills, &side),
        experience: experience::render(&resume.experience, &main),
        projects: projects::render(&resume.projects, &main),
    }
}

/// Wrap a plain description into body lines appended to `lines`.
pub(crate) fn push_description_lines(
    lines: &mut Vec<Line>,
    ctx: &RenderContext<'_>,
    description: &str,
    color: Rgb,
) {
    let font = ctx.body_font();
    for text in ctx.measurer.wrap(description, ctx.width, font) {
        lines.push(Line::new(vec![Span::new(text, font, color)], ctx.body_advance()));
    }
}

/// Explode a bulleted description into one block per bullet item, each
/// with the marker's measured width as hanging indent.
pub(crate) fn bullet_blocks(
    ctx: &RenderContext<'_>,
    items: &[String],
    color: Rgb,
) -> Vec<Block> {
    let font = ctx.body_font();
    items
        .iter()
        .map(|item| {
            let wrapped = ctx.measurer.wrap_bullet(item, ctx.width, font);
            let lines = wrapped
                .lines
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    let line =
                        Line::new(vec![Span::new(text.clone(), font, color)], ctx.body_advance());
                    if i == 0 {
                        line
                    } else {
                        line.with_indent(wrapped.indent)
                    }
                })
                .collect();
            Block::new(lines)
        })
        .collect()
}
