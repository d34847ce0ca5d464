//! # Page-Aware Flow Engine
//!
//! Blocks flow INTO pages; nothing is laid out on an infinite canvas and
//! sliced afterwards. Before any block begins rendering the engine asks
//! "does its minimum height fit the remaining column?" — if not, a fresh
//! page is opened first. Because the test runs against whole blocks, a
//! section title can never be orphaned from its first content lines and a
//! bullet item never straddles a page boundary.
//!
//! Position state is an explicit [`LayoutCursor`] value threaded through
//! every placement. Column mode runs two independent passes over the same
//! starting position — a left cursor confined to the left column and a
//! right cursor confined to the right — rather than mutating a shared
//! margin, so neither pass can observe the other's in-flight state.

pub mod links;

pub use links::{normalize_url, LinkRect, LinkRegistry};

use crate::error::GenerateError;
use crate::font::FontSpec;
use crate::sections::{Align, Block, Line, SectionSet};
use crate::style::{Rgb, StyleProfile, COLUMN_GUTTER, PAGE_HEIGHT, PAGE_WIDTH};
use crate::text::TextMeasurer;

/// Hard cap on generated pages. Rejects pathological inputs instead of
/// paginating forever.
pub const MAX_PAGES: usize = 50;

/// Fraction of the font size between the top of a line slot and its
/// baseline.
const ASCENT_RATIO: f64 = 0.8;

/// Gap between a text baseline and the rule drawn under it.
const RULE_GAP: f64 = 2.5;

/// A drawing primitive with absolute page coordinates (top-left origin;
/// text `y` is the baseline).
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Text {
        x: f64,
        y: f64,
        text: String,
        font: FontSpec,
        color: Rgb,
    },
    Rule {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        thickness: f64,
        color: Rgb,
    },
}

/// A fully laid-out page ready for PDF serialization.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub commands: Vec<DrawCommand>,
    pub links: Vec<LinkRect>,
}

impl Page {
    pub fn width(&self) -> f64 {
        PAGE_WIDTH
    }

    pub fn height(&self) -> f64 {
        PAGE_HEIGHT
    }
}

/// Mutable position state advanced during placement: the column's left
/// edge and width, the vertical write position, and the page index.
/// Created, threaded through each render step, and discarded per call.
#[derive(Debug, Clone, Copy)]
pub struct LayoutCursor {
    pub x: f64,
    pub width: f64,
    pub y: f64,
    pub page: usize,
}

/// The flow engine owns the growing page list and the link registry while
/// cursors move across them.
pub struct FlowEngine<'a> {
    profile: &'a StyleProfile,
    measurer: TextMeasurer,
    pages: Vec<Page>,
    links: LinkRegistry,
}

impl<'a> FlowEngine<'a> {
    pub fn new(profile: &'a StyleProfile) -> Self {
        Self {
            profile,
            measurer: TextMeasurer::new(),
            pages: vec![Page::default()],
            links: LinkRegistry::new(),
        }
    }

    /// A cursor at the top of the first page, confined to `[x, x + width)`.
    pub fn cursor(&self, x: f64, width: f64) -> LayoutCursor {
        LayoutCursor {
            x,
            width,
            y: self.profile.margins.top,
            page: 0,
        }
    }

    fn bottom_limit(&self) -> f64 {
        PAGE_HEIGHT - self.profile.margins.bottom
    }

    /// Move the cursor to the top of the next page, allocating it if this
    /// cursor is the first to reach that far.
    fn advance_page(&mut self, cursor: &mut LayoutCursor) -> Result<(), GenerateError> {
        cursor.page += 1;
        if cursor.page == self.pages.len() {
            if self.pages.len() == MAX_PAGES {
                return Err(GenerateError::PageLimit(MAX_PAGES));
            }
            self.pages.push(Page::default());
        }
        cursor.y = self.profile.margins.top;
        Ok(())
    }

    /// Place one block at the cursor, breaking to a new page first when the
    /// block's minimum height does not fit the remaining column.
    pub fn place_block(
        &mut self,
        cursor: &mut LayoutCursor,
        block: &Block,
    ) -> Result<(), GenerateError> {
        let min_height = block.min_height();
        let usable = self.profile.usable_height();
        if min_height > usable {
            return Err(GenerateError::LayoutOverflow {
                height: min_height,
                usable,
            });
        }
        if cursor.y + min_height > self.bottom_limit() {
            self.advance_page(cursor)?;
        }

        for line in &block.lines {
            self.place_line(cursor, line);
        }
        cursor.y += block.spacing_after;
        Ok(())
    }

    fn place_line(&mut self, cursor: &mut LayoutCursor, line: &Line) {
        let max_size = line
            .spans
            .iter()
            .chain(line.trailing.iter())
            .map(|s| s.font.size)
            .fold(0.0_f64, f64::max);
        let baseline = cursor.y + ASCENT_RATIO * max_size;

        let line_width: f64 = line
            .spans
            .iter()
            .map(|s| self.measurer.width(&s.text, s.font))
            .sum();
        let mut x = match line.align {
            Align::Left => cursor.x + line.indent,
            Align::Center => cursor.x + (cursor.width - line_width) / 2.0,
        };

        for span in &line.spans {
            let span_width = self.measurer.width(&span.text, span.font);
            if let Some(href) = &span.href {
                // Rectangle from the measured metrics of this exact anchor
                // text, so the region coincides with the visible span.
                self.links.register(
                    cursor.page,
                    x,
                    baseline - span.font.size,
                    span_width,
                    span.font.size * 1.25,
                    href,
                );
            }
            self.pages[cursor.page].commands.push(DrawCommand::Text {
                x,
                y: baseline,
                text: span.text.clone(),
                font: span.font,
                color: span.color,
            });
            x += span_width;
        }

        if let Some(trailing) = &line.trailing {
            let width = self.measurer.width(&trailing.text, trailing.font);
            self.pages[cursor.page].commands.push(DrawCommand::Text {
                x: cursor.x + cursor.width - width,
                y: baseline,
                text: trailing.text.clone(),
                font: trailing.font,
                color: trailing.color,
            });
        }

        if let Some(rule) = &line.rule_below {
            let y = baseline + RULE_GAP;
            self.pages[cursor.page].commands.push(DrawCommand::Rule {
                x0: cursor.x,
                y0: y,
                x1: cursor.x + cursor.width,
                y1: y,
                thickness: rule.thickness,
                color: rule.color,
            });
        }

        cursor.y += line.advance;
    }

    fn place_all(
        &mut self,
        cursor: &mut LayoutCursor,
        blocks: &[Block],
        cancel: &dyn Fn() -> bool,
    ) -> Result<(), GenerateError> {
        for block in blocks {
            if cancel() {
                return Err(GenerateError::Cancelled);
            }
            self.place_block(cursor, block)?;
        }
        Ok(())
    }

    /// Paginate a full section set and return the finished pages.
    ///
    /// Single-column mode places sections in document order. Column mode
    /// runs Education+Skills down the left column and Experience+Projects
    /// down the right, both starting at the post-header position, then
    /// draws the divider and resumes after whichever column ran longer.
    pub fn paginate(
        mut self,
        sections: &SectionSet,
        cancel: &dyn Fn() -> bool,
    ) -> Result<Vec<Page>, GenerateError> {
        let profile = self.profile;
        let mut main = self.cursor(profile.margins.left, profile.content_width());
        self.place_all(&mut main, &sections.header, cancel)?;

        if profile.column_layout {
            let left_width = profile.left_column_width();
            let mut left = LayoutCursor {
                x: profile.margins.left,
                width: left_width,
                y: main.y,
                page: main.page,
            };
            let mut right = LayoutCursor {
                x: profile.margins.left + left_width + COLUMN_GUTTER,
                width: profile.right_column_width(),
                y: main.y,
                page: main.page,
            };
            let start = (main.page, main.y);

            self.place_all(&mut left, &sections.education, cancel)?;
            self.place_all(&mut left, &sections.skills, cancel)?;
            self.place_all(&mut right, &sections.experience, cancel)?;
            self.place_all(&mut right, &sections.projects, cancel)?;

            let end = if (left.page, left.y) >= (right.page, right.y) {
                (left.page, left.y)
            } else {
                (right.page, right.y)
            };
            self.draw_column_divider(start, end);
        } else {
            self.place_all(&mut main, &sections.education, cancel)?;
            self.place_all(&mut main, &sections.skills, cancel)?;
            self.place_all(&mut main, &sections.experience, cancel)?;
            self.place_all(&mut main, &sections.projects, cancel)?;
        }

        let mut pages = self.pages;
        for (page, rect) in self.links.drain() {
            pages[page].links.push(rect);
        }
        Ok(pages)
    }

    /// Vertical divider between the columns, spanning from the shared
    /// start position down to the taller column's final position.
    fn draw_column_divider(&mut self, start: (usize, f64), end: (usize, f64)) {
        let profile = self.profile;
        let x = profile.margins.left + profile.left_column_width() + COLUMN_GUTTER / 2.0;
        for page in start.0..=end.0 {
            let y0 = if page == start.0 {
                start.1
            } else {
                profile.margins.top
            };
            let y1 = if page == end.0 {
                end.1
            } else {
                self.bottom_limit()
            };
            if y1 <= y0 {
                continue;
            }
            self.pages[page].commands.push(DrawCommand::Rule {
                x0: x,
                y0,
                x1: x,
                y1,
                thickness: 0.2,
                color: Rgb(200, 200, 200),
            });
        }
    }
}
