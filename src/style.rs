//! # Style System
//!
//! Partial overrides in, fully resolved profile out. The `StyleOverrides`
//! struct is the caller-facing configuration surface: every field optional,
//! every value validated or clamped during resolution. The `StyleProfile`
//! is what the rest of the engine works with — concrete, immutable, one per
//! generation call.

use serde::{Deserialize, Serialize};

/// Points per millimetre. The engine works in PDF points (1/72 inch);
/// margin defaults are specified in millimetres for A4 familiarity.
pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// A4 page dimensions in points.
pub const PAGE_WIDTH: f64 = 595.28;
pub const PAGE_HEIGHT: f64 = 841.89;

/// An RGB color with 0-255 components, matching the caller-facing triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Components scaled to 0.0-1.0 for PDF color operators.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            self.0 as f64 / 255.0,
            self.1 as f64 / 255.0,
            self.2 as f64 / 255.0,
        )
    }
}

/// The three supported font families, mapping onto the standard PDF fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Sans,
    #[default]
    Serif,
    Mono,
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 15.0 * MM_TO_PT,
            left: 20.0 * MM_TO_PT,
            right: 20.0 * MM_TO_PT,
            bottom: 20.0 * MM_TO_PT,
        }
    }
}

/// Partial style configuration. Any subset of fields may be set; the rest
/// fall back to defaults during [`StyleOverrides::resolve`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverrides {
    /// Font family name. Accepts "sans"/"serif"/"mono" and the concrete
    /// names "helvetica"/"times"/"courier". Unknown values fall back to
    /// sans with a warning, never an error.
    pub font_family: Option<String>,
    pub primary_color: Option<Rgb>,
    pub secondary_color: Option<Rgb>,
    pub hyperlink_color: Option<Rgb>,
    pub name_font_size: Option<f64>,
    pub section_title_font_size: Option<f64>,
    pub sub_header_font_size: Option<f64>,
    pub body_font_size: Option<f64>,
    /// Line spacing multiplier, clamped into [1.0, 2.0].
    pub line_spacing: Option<f64>,
    pub margins: Option<Margins>,
    pub column_layout: Option<bool>,
    pub enable_hyperlinks: Option<bool>,
    /// Cosmetic template tag. Carried through, never interpreted.
    pub template: Option<String>,
}

/// Fully resolved, immutable style configuration. One per generation call.
#[derive(Debug, Clone)]
pub struct StyleProfile {
    pub font_family: FontFamily,
    pub primary_color: Rgb,
    pub secondary_color: Rgb,
    pub hyperlink_color: Rgb,
    pub name_font_size: f64,
    pub section_title_font_size: f64,
    pub sub_header_font_size: f64,
    pub body_font_size: f64,
    pub line_spacing: f64,
    pub margins: Margins,
    pub column_layout: bool,
    pub enable_hyperlinks: bool,
    pub template: String,
    /// Vertical gap after each section, points.
    pub section_spacing: f64,
    /// Vertical gap between entries inside a section, points.
    pub paragraph_spacing: f64,
}

impl StyleOverrides {
    /// Merge these overrides onto the defaults, clamping and validating.
    pub fn resolve(&self) -> StyleProfile {
        let font_family = match self.font_family.as_deref() {
            None => FontFamily::Serif,
            Some(raw) => match raw.to_lowercase().as_str() {
                "sans" | "helvetica" => FontFamily::Sans,
                "serif" | "times" => FontFamily::Serif,
                "mono" | "courier" => FontFamily::Mono,
                other => {
                    log::warn!("unsupported font family {:?}, falling back to sans", other);
                    FontFamily::Sans
                }
            },
        };

        StyleProfile {
            font_family,
            primary_color: self.primary_color.unwrap_or(Rgb(0, 83, 155)),
            secondary_color: self.secondary_color.unwrap_or(Rgb(80, 80, 80)),
            hyperlink_color: self.hyperlink_color.unwrap_or(Rgb(0, 0, 238)),
            name_font_size: self.name_font_size.unwrap_or(18.0),
            section_title_font_size: self.section_title_font_size.unwrap_or(14.0),
            sub_header_font_size: self.sub_header_font_size.unwrap_or(12.0),
            body_font_size: self.body_font_size.unwrap_or(10.0),
            line_spacing: self.line_spacing.unwrap_or(1.15).clamp(1.0, 2.0),
            margins: self.margins.unwrap_or_default(),
            column_layout: self.column_layout.unwrap_or(false),
            enable_hyperlinks: self.enable_hyperlinks.unwrap_or(true),
            template: self
                .template
                .clone()
                .unwrap_or_else(|| "professional".to_string()),
            section_spacing: 10.0,
            paragraph_spacing: 6.0,
        }
    }
}

/// Horizontal gap between the two columns in column mode (5mm in points).
pub const COLUMN_GUTTER: f64 = 5.0 * MM_TO_PT;

impl StyleProfile {
    /// Width of the content area between the left and right margins.
    pub fn content_width(&self) -> f64 {
        PAGE_WIDTH - self.margins.left - self.margins.right
    }

    /// Width of the left (Education + Skills) column in column mode.
    pub fn left_column_width(&self) -> f64 {
        self.content_width() * 0.35
    }

    /// Width of the right (Experience + Projects) column in column mode.
    pub fn right_column_width(&self) -> f64 {
        self.content_width() - self.left_column_width() - COLUMN_GUTTER
    }

    /// Height available for block placement on a fresh page.
    pub fn usable_height(&self) -> f64 {
        PAGE_HEIGHT - self.margins.top - self.margins.bottom
    }

    /// Vertical advance for one line at the given font size.
    pub fn line_advance(&self, font_size: f64) -> f64 {
        font_size * self.line_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_professional_profile() {
        let profile = StyleOverrides::default().resolve();
        assert_eq!(profile.font_family, FontFamily::Serif);
        assert_eq!(profile.primary_color, Rgb(0, 83, 155));
        assert_eq!(profile.hyperlink_color, Rgb(0, 0, 238));
        assert!((profile.line_spacing - 1.15).abs() < 1e-9);
        assert!(!profile.column_layout);
        assert!(profile.enable_hyperlinks);
        assert_eq!(profile.template, "professional");
    }

    #[test]
    fn line_spacing_is_clamped() {
        let low = StyleOverrides {
            line_spacing: Some(0.2),
            ..Default::default()
        };
        assert!((low.resolve().line_spacing - 1.0).abs() < 1e-9);

        let high = StyleOverrides {
            line_spacing: Some(9.0),
            ..Default::default()
        };
        assert!((high.resolve().line_spacing - 2.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_font_family_falls_back_to_sans() {
        let overrides = StyleOverrides {
            font_family: Some("comic-sans".to_string()),
            ..Default::default()
        };
        assert_eq!(overrides.resolve().font_family, FontFamily::Sans);
    }

    #[test]
    fn concrete_font_names_are_accepted() {
        for (name, family) in [
            ("helvetica", FontFamily::Sans),
            ("Times", FontFamily::Serif),
            ("courier", FontFamily::Mono),
        ] {
            let overrides = StyleOverrides {
                font_family: Some(name.to_string()),
                ..Default::default()
            };
            assert_eq!(overrides.resolve().font_family, family);
        }
    }

    #[test]
    fn default_margins_are_a4_appropriate() {
        let margins = Margins::default();
        assert!((margins.top - 42.52).abs() < 0.01);
        assert!((margins.left - 56.69).abs() < 0.01);
    }
}
