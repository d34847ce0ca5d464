//! # Document Assembly
//!
//! The last stage before serialization: stamps the ATS keyword footer onto
//! the final page, builds the PDF information dictionary, and packages the
//! bytes together with a date-stamped suggested filename.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::font::FontSpec;
use crate::keywords::KeywordSet;
use crate::layout::{DrawCommand, Page};
use crate::model::ResumeData;
use crate::pdf::Metadata;
use crate::style::{Rgb, StyleProfile, PAGE_HEIGHT};
use crate::text::TextMeasurer;

/// Footer font size, points. Small enough to be unobtrusive, still
/// machine-readable by ATS text extraction.
const FOOTER_FONT_SIZE: f64 = 6.0;

/// Near-white gray used for the footer text.
const FOOTER_COLOR: Rgb = Rgb(200, 200, 200);

/// A finished document: the PDF bytes plus the derived artifacts callers
/// usually want alongside them.
#[derive(Debug, Clone)]
pub struct DocumentResult {
    pub bytes: Vec<u8>,
    /// Suggested filename, `<name>_resume_<yyyy-mm-dd>.pdf`.
    pub filename: String,
    pub keywords: Vec<String>,
    pub page_count: usize,
}

impl DocumentResult {
    /// Write the bytes under the suggested filename in `dir`.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Stamp the keyword footer onto the last page. Lines stack upward from
/// the bottom margin so the final baseline sits exactly on it; the footer
/// may overprint content on a completely full page, which is acceptable
/// for 6pt near-white text.
pub fn stamp_keyword_footer(pages: &mut [Page], profile: &StyleProfile, keywords: &KeywordSet) {
    if keywords.is_empty() {
        return;
    }
    let Some(last) = pages.last_mut() else {
        return;
    };

    let measurer = TextMeasurer::new();
    let font = FontSpec::new(profile.font_family, FOOTER_FONT_SIZE);
    let text = format!("ATS-KEYWORDS: {}", keywords.joined());
    let lines = measurer.wrap(&text, profile.content_width(), font);

    let advance = profile.line_advance(FOOTER_FONT_SIZE);
    let last_baseline = PAGE_HEIGHT - profile.margins.bottom;
    for (i, line) in lines.iter().enumerate() {
        let from_end = (lines.len() - 1 - i) as f64;
        last.commands.push(DrawCommand::Text {
            x: profile.margins.left,
            y: last_baseline - from_end * advance,
            text: line.clone(),
            font,
            color: FOOTER_COLOR,
        });
    }
}

/// Information dictionary fields derived from the resume content.
pub fn build_metadata(resume: &ResumeData, keywords: &KeywordSet) -> Metadata {
    let name = resume.personal_details.name.trim();
    let top_skills = resume
        .skills
        .iter()
        .take(5)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let subject = if top_skills.is_empty() {
        format!("Resume for {}", name)
    } else {
        format!("Resume for {} - {}", name, top_skills)
    };

    Metadata {
        title: Some(format!("{} - Professional Resume", name)),
        author: Some(name.to_string()),
        subject: Some(subject),
        keywords: Some(keywords.joined()),
        creator: Some("Vitae Resume Engine".to_string()),
    }
}

/// Suggested filename for a generated document, date-stamped with the
/// local date.
pub fn suggest_filename(name: &str) -> String {
    format!(
        "{}_resume_{}.pdf",
        sanitize_filename(name),
        Local::now().format("%Y-%m-%d")
    )
}

/// Lowercase the name and collapse every non-alphanumeric run into a
/// single underscore.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    if out.ends_with('_') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("resume");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonalDetails;
    use crate::style::StyleOverrides;

    fn resume() -> ResumeData {
        ResumeData {
            personal_details: PersonalDetails {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                ..Default::default()
            },
            skills: vec!["React".into(), "SQL".into()],
            ..Default::default()
        }
    }

    #[test]
    fn sanitize_collapses_and_lowercases() {
        assert_eq!(sanitize_filename("Jane Doe"), "jane_doe");
        assert_eq!(sanitize_filename("  Mr. O'Brien-Smith "), "mr_o_brien_smith");
        assert_eq!(sanitize_filename("!!!"), "resume");
    }

    #[test]
    fn filename_carries_date_suffix() {
        let filename = suggest_filename("Jane Doe");
        assert!(filename.starts_with("jane_doe_resume_"));
        assert!(filename.ends_with(".pdf"));
    }

    #[test]
    fn metadata_derives_title_and_subject() {
        let r = resume();
        let keywords = KeywordSet::extract(&r);
        let metadata = build_metadata(&r, &keywords);
        assert_eq!(
            metadata.title.as_deref(),
            Some("Jane Doe - Professional Resume")
        );
        assert_eq!(
            metadata.subject.as_deref(),
            Some("Resume for Jane Doe - React, SQL")
        );
        assert_eq!(metadata.keywords.as_deref(), Some("React | SQL"));
    }

    #[test]
    fn footer_baseline_sits_on_bottom_margin() {
        let r = resume();
        let profile = StyleOverrides::default().resolve();
        let keywords = KeywordSet::extract(&r);
        let mut pages = vec![Page::default()];
        stamp_keyword_footer(&mut pages, &profile, &keywords);

        let baselines: Vec<f64> = pages[0]
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { y, text, .. } if text.contains("ATS-KEYWORDS") => Some(*y),
                _ => None,
            })
            .collect();
        assert!(!baselines.is_empty());
        let expected = PAGE_HEIGHT - profile.margins.bottom;
        assert!(baselines.iter().any(|y| (y - expected).abs() < 1e-9));
    }

    #[test]
    fn empty_keywords_leave_pages_untouched() {
        let profile = StyleOverrides::default().resolve();
        let keywords = KeywordSet::extract(&ResumeData {
            personal_details: PersonalDetails {
                name: "J".into(),
                email: "j@e.com".into(),
                ..Default::default()
            },
            ..Default::default()
        });
        let mut pages = vec![Page::default()];
        stamp_keyword_footer(&mut pages, &profile, &keywords);
        assert!(pages[0].commands.is_empty());
    }
}
