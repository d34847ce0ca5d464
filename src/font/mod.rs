//! # Font Management
//!
//! The engine targets the standard PDF fonts (Helvetica, Times, Courier
//! families), which never need embedding: each configured font family maps
//! onto one of them, with bold/italic variants selected per text span.
//! Measurement uses the real AFM advance widths from [`metrics`].

pub mod metrics;

use crate::style::FontFamily;

/// The standard PDF fonts the engine can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl StandardFont {
    /// The PDF BaseFont name.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
            Self::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Self::TimesRoman => "Times-Roman",
            Self::TimesBold => "Times-Bold",
            Self::TimesItalic => "Times-Italic",
            Self::TimesBoldItalic => "Times-BoldItalic",
            Self::Courier => "Courier",
            Self::CourierBold => "Courier-Bold",
            Self::CourierOblique => "Courier-Oblique",
            Self::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    /// Advance width of `ch` in 1/1000 em units. The oblique variants share
    /// their upright counterpart's AFM widths.
    fn unit_width(&self, ch: char) -> u16 {
        match self {
            Self::Helvetica | Self::HelveticaOblique => metrics::lookup(&metrics::HELVETICA, ch),
            Self::HelveticaBold | Self::HelveticaBoldOblique => {
                metrics::lookup(&metrics::HELVETICA_BOLD, ch)
            }
            Self::TimesRoman => metrics::lookup(&metrics::TIMES_ROMAN, ch),
            Self::TimesBold => metrics::lookup(&metrics::TIMES_BOLD, ch),
            Self::TimesItalic => metrics::lookup(&metrics::TIMES_ITALIC, ch),
            Self::TimesBoldItalic => metrics::lookup(&metrics::TIMES_BOLD_ITALIC, ch),
            Self::Courier
            | Self::CourierBold
            | Self::CourierOblique
            | Self::CourierBoldOblique => metrics::COURIER_WIDTH,
        }
    }

    /// Advance width of a single character in points at `font_size`.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        self.unit_width(ch) as f64 / 1000.0 * font_size
    }

    /// Width of a string in points at `font_size`.
    pub fn string_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars()
            .map(|ch| self.unit_width(ch) as f64)
            .sum::<f64>()
            / 1000.0
            * font_size
    }
}

/// A concrete font selection for one text span: family variant plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    pub fn new(family: FontFamily, size: f64) -> Self {
        Self {
            family,
            size,
            bold: false,
            italic: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Resolve to the standard PDF font for this family/weight/slant.
    pub fn standard_font(&self) -> StandardFont {
        match (self.family, self.bold, self.italic) {
            (FontFamily::Sans, false, false) => StandardFont::Helvetica,
            (FontFamily::Sans, true, false) => StandardFont::HelveticaBold,
            (FontFamily::Sans, false, true) => StandardFont::HelveticaOblique,
            (FontFamily::Sans, true, true) => StandardFont::HelveticaBoldOblique,
            (FontFamily::Serif, false, false) => StandardFont::TimesRoman,
            (FontFamily::Serif, true, false) => StandardFont::TimesBold,
            (FontFamily::Serif, false, true) => StandardFont::TimesItalic,
            (FontFamily::Serif, true, true) => StandardFont::TimesBoldItalic,
            (FontFamily::Mono, false, false) => StandardFont::Courier,
            (FontFamily::Mono, true, false) => StandardFont::CourierBold,
            (FontFamily::Mono, false, true) => StandardFont::CourierOblique,
            (FontFamily::Mono, true, true) => StandardFont::CourierBoldOblique,
        }
    }
}
