//! # Text Measurement & Wrapping
//!
//! Width measurement against the real AFM metrics plus a greedy word-wrap:
//! words accumulate onto a line while `width(line + " " + word)` stays
//! within the limit, then a new line starts. Free-form description text
//! containing explicit bullet markers or newlines is split into bullet
//! items, each wrapped independently with a hanging indent equal to the
//! measured width of the bullet marker so continuation lines align under
//! the first character of the item rather than under the marker.

use crate::font::FontSpec;

/// The bullet marker prefixed to exploded description items.
pub const BULLET: &str = "\u{2022} ";

/// Pure, stateless text measurement. One instance per generation call;
/// safe to use from concurrent calls since all lookups are const tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMeasurer;

/// A wrapped bullet item: the first line carries the marker, continuation
/// lines are indented by `indent` points.
#[derive(Debug, Clone)]
pub struct WrappedBullet {
    pub lines: Vec<String>,
    pub indent: f64,
}

impl TextMeasurer {
    pub fn new() -> Self {
        Self
    }

    /// Measure the width of `text` in points under `font`.
    pub fn width(&self, text: &str, font: FontSpec) -> f64 {
        font.standard_font().string_width(text, font.size)
    }

    /// Greedy word wrap of `text` into lines no wider than `max_width`.
    ///
    /// A single word wider than `max_width` is emitted on its own line
    /// rather than split mid-word; overlong tokens overflow visually but
    /// never wedge the layout.
    pub fn wrap(&self, text: &str, max_width: f64, font: FontSpec) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate_width =
                self.width(&current, font) + self.width(" ", font) + self.width(word, font);
            if candidate_width <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    /// Wrap one bullet item. The marker is measured under the same font so
    /// the hanging indent matches the rendered marker exactly.
    pub fn wrap_bullet(&self, item: &str, max_width: f64, font: FontSpec) -> WrappedBullet {
        let indent = self.width(BULLET, font);
        let first = format!("{}{}", BULLET, item);
        let mut lines = self.wrap(&first, max_width, font);

        // Continuation lines wrap against the narrower indented width.
        if lines.len() > 1 {
            let rest = lines.split_off(1).join(" ");
            let mut continuation = self.wrap(&rest, max_width - indent, font);
            lines.append(&mut continuation);
        }

        WrappedBullet { lines, indent }
    }
}

/// Split free-form description text into bullet items when it contains
/// explicit markers or newlines. Returns `None` for plain prose.
pub fn split_bullets(text: &str) -> Option<Vec<String>> {
    if !text.contains('\u{2022}') && !text.contains('\n') {
        return None;
    }
    let items: Vec<String> = text
        .split(['\n', '\u{2022}'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    Some(items)
}
