//! # Vitae
//!
//! A resume-to-PDF generation engine. One call takes structured resume
//! data plus optional style overrides and produces finished PDF bytes,
//! a suggested filename, and the extracted ATS keyword list.
//!
//! ## Pipeline
//!
//! ```text
//! ResumeData + StyleOverrides
//!        |
//!        v
//!   [style]      resolve overrides into an immutable StyleProfile
//!        |
//!        v
//!   [keywords]   extract the ATS keyword list
//!        |
//!        v
//!   [sections]   render header/education/skills/experience/projects
//!                into blocks (text pre-wrapped with real AFM metrics)
//!        |
//!        v
//!   [layout]     flow blocks onto pages, cursor threading, page breaks,
//!                optional two-column mode, hyperlink regions
//!        |
//!        v
//!   [assemble]   keyword footer on the last page, Info metadata,
//!                date-stamped filename
//!        |
//!        v
//!   [pdf]        serialize to PDF 1.7 bytes (FlateDecode streams,
//!                standard Type1 fonts, /Link annotations)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use vitae::model::{PersonalDetails, ResumeData};
//! use vitae::style::StyleOverrides;
//!
//! let resume = ResumeData {
//!     personal_details: PersonalDetails {
//!         name: "Jane Doe".into(),
//!         email: "jane@example.com".into(),
//!         ..Default::default()
//!     },
//!     skills: vec!["Rust".into(), "SQL".into()],
//!     ..Default::default()
//! };
//!
//! let result = vitae::generate(&resume, &StyleOverrides::default())?;
//! result.save_to(".")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemble;
pub mod error;
pub mod font;
pub mod keywords;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod sections;
pub mod style;
pub mod text;

use serde::Deserialize;

pub use crate::assemble::DocumentResult;
pub use crate::error::GenerateError;
pub use crate::keywords::KeywordSet;
pub use crate::model::ResumeData;
pub use crate::style::{StyleOverrides, StyleProfile};

/// A JSON generation request: the resume plus optional style overrides.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub resume: ResumeData,
    #[serde(default)]
    pub style: StyleOverrides,
}

/// Generate a resume PDF. Runs the whole pipeline synchronously on the
/// calling thread.
pub fn generate(
    resume: &ResumeData,
    overrides: &StyleOverrides,
) -> Result<DocumentResult, GenerateError> {
    generate_with_cancel(resume, overrides, || false)
}

/// Like [`generate`], but polls `cancel` between block placements and
/// aborts with [`GenerateError::Cancelled`] when it returns true. No
/// partial document is returned.
pub fn generate_with_cancel<F>(
    resume: &ResumeData,
    overrides: &StyleOverrides,
    cancel: F,
) -> Result<DocumentResult, GenerateError>
where
    F: Fn() -> bool,
{
    resume.validate()?;
    let profile = overrides.resolve();

    let keywords = KeywordSet::extract(resume);
    let sections = sections::render_all(resume, &profile);

    let engine = layout::FlowEngine::new(&profile);
    let mut pages = engine.paginate(&sections, &cancel)?;
    assemble::stamp_keyword_footer(&mut pages, &profile, &keywords);

    let metadata = assemble::build_metadata(resume, &keywords);
    let bytes = pdf::PdfWriter::new().write(&pages, &metadata);

    log::debug!(
        "generated {} page(s), {} bytes, {} keyword(s)",
        pages.len(),
        bytes.len(),
        keywords.as_slice().len()
    );

    Ok(DocumentResult {
        bytes,
        filename: assemble::suggest_filename(&resume.personal_details.name),
        keywords: keywords.as_slice().to_vec(),
        page_count: pages.len(),
    })
}

/// Generate from a JSON request of the form
/// `{"resume": {...}, "style": {...}}` (the `style` key is optional).
pub fn generate_json(json: &str) -> Result<DocumentResult, GenerateError> {
    let request: GenerateRequest = serde_json::from_str(json)?;
    generate(&request.resume, &request.style)
}
