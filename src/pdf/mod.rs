//! # PDF Serializer
//!
//! Serializes laid-out pages into PDF 1.7 bytes, writing the raw object
//! syntax directly rather than going through a PDF crate. Resume output
//! needs only a small slice of the format: Type1 standard fonts with
//! WinAnsi encoding (nothing embedded), Flate-compressed content streams
//! of text and line operators, `/Link` annotations for the clickable
//! regions, and an Info dictionary for the ATS metadata. Keeping the
//! writer in-tree means the byte layout is ours end to end.
//!
//! A file comes out as a header, a flat run of numbered objects (catalog,
//! page tree, fonts, then per page: annotations, content stream, page
//! dict), and a cross-reference table whose offsets are recorded while
//! the objects are written out. One coordinate quirk runs through the
//! whole module: layout works top-left-down, PDF bottom-left-up, so every
//! y is flipped against the page height on the way in.

use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use crate::font::StandardFont;
use crate::layout::{DrawCommand, LinkRect, Page};
use miniz_oxide::deflate::compress_to_vec_zlib;

/// Document information dictionary fields.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub creator: Option<String>,
}

pub struct PdfWriter;

/// Tracks allocated PDF objects during writing.
struct PdfBuilder {
    objects: Vec<PdfObject>,
    /// Fonts actually used, in /F0, /F1, ... order, with their object ids.
    font_objects: Vec<(StandardFont, usize)>,
}

struct PdfObject {
    #[allow(dead_code)]
    id: usize,
    data: Vec<u8>,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write laid-out pages to a PDF byte vector.
    pub fn write(&self, pages: &[Page], metadata: &Metadata) -> Vec<u8> {
        let mut builder = PdfBuilder {
            objects: Vec::new(),
            font_objects: Vec::new(),
        };

        // Reserve object IDs:
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        // 3+ = fonts, then per page: annotations, content stream, page object
        builder.objects.push(PdfObject { id: 0, data: vec![] });
        builder.objects.push(PdfObject { id: 1, data: vec![] });
        builder.objects.push(PdfObject { id: 2, data: vec![] });

        self.register_fonts(&mut builder, pages);

        let mut page_obj_ids: Vec<usize> = Vec::new();

        for page in pages {
            let annot_ids: Vec<usize> = page
                .links
                .iter()
                .map(|link| self.push_link_annotation(&mut builder, link, page.height()))
                .collect();

            let content = self.build_content_stream(page, &builder.font_objects);
            let compressed = compress_to_vec_zlib(content.as_bytes(), 6);

            let content_obj_id = builder.objects.len();
            let mut content_data: Vec<u8> = Vec::new();
            let _ = write!(
                content_data,
                "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                compressed.len()
            );
            content_data.extend_from_slice(&compressed);
            content_data.extend_from_slice(b"\nendstream");
            builder.objects.push(PdfObject {
                id: content_obj_id,
                data: content_data,
            });

            let page_obj_id = builder.objects.len();
            let font_resources = self.build_font_resource_dict(&builder.font_objects);
            let annots = if annot_ids.is_empty() {
                String::new()
            } else {
                let refs: Vec<String> = annot_ids.iter().map(|id| format!("{} 0 R", id)).collect();
                format!(" /Annots [{}]", refs.join(" "))
            };
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << /Font << {} >> >>{} >>",
                page.width(),
                page.height(),
                content_obj_id,
                font_resources,
                annots
            );
            builder.objects.push(PdfObject {
                id: page_obj_id,
                data: page_dict.into_bytes(),
            });
            page_obj_ids.push(page_obj_id);
        }

        builder.objects[1].data = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();

        let kids: String = page_obj_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");
        builder.objects[2].data = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_obj_ids.len()
        )
        .into_bytes();

        let info_obj_id = self.push_info_dict(&mut builder, metadata);

        self.serialize(&builder, info_obj_id)
    }

    fn push_info_dict(&self, builder: &mut PdfBuilder, metadata: &Metadata) -> Option<usize> {
        let fields = [
            ("/Title", &metadata.title),
            ("/Author", &metadata.author),
            ("/Subject", &metadata.subject),
            ("/Keywords", &metadata.keywords),
            ("/Creator", &metadata.creator),
        ];
        if fields.iter().all(|(_, v)| v.is_none()) {
            return None;
        }

        let id = builder.objects.len();
        let mut info = String::from("<< ");
        for (key, value) in fields {
            if let Some(value) = value {
                let _ = write!(info, "{} ({}) ", key, Self::escape_pdf_string(value));
            }
        }
        let _ = write!(info, "/Producer (vitae {}) >>", env!("CARGO_PKG_VERSION"));
        builder.objects.push(PdfObject {
            id,
            data: info.into_bytes(),
        });
        Some(id)
    }

    /// A /Link annotation over the given rectangle. Layout coordinates are
    /// top-left origin; PDF rects are bottom-left.
    fn push_link_annotation(
        &self,
        builder: &mut PdfBuilder,
        link: &LinkRect,
        page_height: f64,
    ) -> usize {
        let x0 = link.x;
        let x1 = link.x + link.width;
        let y1 = page_height - link.y;
        let y0 = page_height - (link.y + link.height);

        let id = builder.objects.len();
        let dict = format!(
            "<< /Type /Annot /Subtype /Link /Rect [{:.2} {:.2} {:.2} {:.2}] \
             /Border [0 0 0] /A << /S /URI /URI ({}) >> >>",
            x0,
            y0,
            x1,
            y1,
            Self::escape_pdf_string(&link.url)
        );
        builder.objects.push(PdfObject {
            id,
            data: dict.into_bytes(),
        });
        id
    }

    /// Build the PDF content stream for a single page.
    fn build_content_stream(
        &self,
        page: &Page,
        font_objects: &[(StandardFont, usize)],
    ) -> String {
        let mut stream = String::new();
        let page_height = page.height();

        for command in &page.commands {
            match command {
                DrawCommand::Text {
                    x,
                    y,
                    text,
                    font,
                    color,
                } => {
                    let index = self.font_index(font.standard_font(), font_objects);
                    let (r, g, b) = color.to_unit();
                    let pdf_y = page_height - y;
                    let _ = write!(
                        stream,
                        "BT\n{:.3} {:.3} {:.3} rg\n/F{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
                        r,
                        g,
                        b,
                        index,
                        font.size,
                        x,
                        pdf_y,
                        Self::escape_pdf_string(text)
                    );
                }
                DrawCommand::Rule {
                    x0,
                    y0,
                    x1,
                    y1,
                    thickness,
                    color,
                } => {
                    let (r, g, b) = color.to_unit();
                    let _ = write!(
                        stream,
                        "q\n{:.3} {:.3} {:.3} RG\n{:.2} w\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\nQ\n",
                        r,
                        g,
                        b,
                        thickness,
                        x0,
                        page_height - y0,
                        x1,
                        page_height - y1
                    );
                }
            }
        }

        stream
    }

    /// Register the standard fonts actually used across all pages. Each
    /// unique font gets its own Type1 object; order is deterministic.
    fn register_fonts(&self, builder: &mut PdfBuilder, pages: &[Page]) {
        let mut fonts: Vec<StandardFont> = Vec::new();
        for page in pages {
            for command in &page.commands {
                if let DrawCommand::Text { font, .. } = command {
                    let standard = font.standard_font();
                    if !fonts.contains(&standard) {
                        fonts.push(standard);
                    }
                }
            }
        }
        fonts.sort_by_key(|f| f.pdf_name());

        // Always have at least one font resource
        if fonts.is_empty() {
            fonts.push(StandardFont::Helvetica);
        }

        for font in fonts {
            let obj_id = builder.objects.len();
            let dict = format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                 /Encoding /WinAnsiEncoding >>",
                font.pdf_name()
            );
            builder.objects.push(PdfObject {
                id: obj_id,
                data: dict.into_bytes(),
            });
            builder.font_objects.push((font, obj_id));
        }
    }

    fn build_font_resource_dict(&self, font_objects: &[(StandardFont, usize)]) -> String {
        font_objects
            .iter()
            .enumerate()
            .map(|(i, (_, obj_id))| format!("/F{} {} 0 R", i, obj_id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn font_index(&self, font: StandardFont, font_objects: &[(StandardFont, usize)]) -> usize {
        font_objects
            .iter()
            .position(|(f, _)| *f == font)
            .unwrap_or(0)
    }

    /// Escape a string for a PDF literal. The content streams use
    /// WinAnsiEncoding, so the bullet glyph maps to its 0x95 code point and
    /// anything else outside ASCII degrades to '?'.
    fn escape_pdf_string(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for ch in s.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '(' => out.push_str("\\("),
                ')' => out.push_str("\\)"),
                '\u{2022}' => out.push_str("\\225"),
                c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
                _ => out.push('?'),
            }
        }
        out
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(&self, builder: &PdfBuilder, info_obj_id: Option<usize>) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        // Header
        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let header = format!("{} 0 obj\n", i);
            output.extend_from_slice(header.as_bytes());
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for i in 1..builder.objects.len() {
            let _ = write!(output, "{:010} 00000 n \n", offsets[i]);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R",
            builder.objects.len()
        );
        if let Some(info_id) = info_obj_id {
            let _ = write!(output, " /Info {} 0 R", info_id);
        }
        let _ = write!(output, " >>\nstartxref\n{}\n%%EOF\n", xref_offset);

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontSpec;
    use crate::style::{FontFamily, Rgb};

    fn text_page(spans: &[(&str, FontSpec)]) -> Page {
        let mut page = Page::default();
        for (i, (text, font)) in spans.iter().enumerate() {
            page.commands.push(DrawCommand::Text {
                x: 56.0,
                y: 60.0 + 14.0 * i as f64,
                text: text.to_string(),
                font: *font,
                color: Rgb::BLACK,
            });
        }
        page
    }

    #[test]
    fn escape_pdf_string_handles_delimiters() {
        assert_eq!(
            PdfWriter::escape_pdf_string("Hello (World)"),
            "Hello \\(World\\)"
        );
        assert_eq!(PdfWriter::escape_pdf_string("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn escape_pdf_string_maps_bullet_to_winansi() {
        assert_eq!(PdfWriter::escape_pdf_string("\u{2022} item"), "\\225 item");
        assert_eq!(PdfWriter::escape_pdf_string("caf\u{e9}"), "caf?");
    }

    #[test]
    fn empty_document_produces_valid_pdf() {
        let writer = PdfWriter::new();
        let bytes = writer.write(&[Page::default()], &Metadata::default());

        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
        assert!(bytes.windows(4).any(|w| w == b"xref"));
        assert!(bytes.windows(7).any(|w| w == b"trailer"));
    }

    #[test]
    fn metadata_lands_in_info_dict() {
        let writer = PdfWriter::new();
        let metadata = Metadata {
            title: Some("Jane Doe - Professional Resume".to_string()),
            author: Some("Jane Doe".to_string()),
            keywords: Some("React | SQL".to_string()),
            ..Default::default()
        };
        let bytes = writer.write(&[Page::default()], &metadata);
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("/Title (Jane Doe - Professional Resume)"));
        assert!(text.contains("/Author (Jane Doe)"));
        assert!(text.contains("/Keywords (React | SQL)"));
    }

    #[test]
    fn bold_font_registered_separately() {
        let writer = PdfWriter::new();
        let regular = FontSpec::new(FontFamily::Sans, 12.0);
        let page = text_page(&[("plain", regular), ("strong", regular.bold())]);
        let bytes = writer.write(&[page], &Metadata::default());
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("/BaseFont /Helvetica "));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
    }

    #[test]
    fn link_annotation_is_emitted_with_flipped_rect() {
        let writer = PdfWriter::new();
        let mut page = Page::default();
        page.links.push(LinkRect {
            x: 100.0,
            y: 200.0,
            width: 50.0,
            height: 12.5,
            url: "https://example.com".to_string(),
        });
        let bytes = writer.write(&[page], &Metadata::default());
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("/Subtype /Link"));
        assert!(text.contains("/URI (https://example.com)"));
        // y0 = 841.89 - 212.5, y1 = 841.89 - 200
        assert!(text.contains("/Rect [100.00 629.39 150.00 641.89]"));
    }

    #[test]
    fn pages_without_links_carry_no_annots() {
        let writer = PdfWriter::new();
        let font = FontSpec::new(FontFamily::Serif, 10.0);
        let bytes = writer.write(&[text_page(&[("hello", font)])], &Metadata::default());
        let text = String::from_utf8_lossy(&bytes);
        assert!(!text.contains("/Annots"));
    }
}
