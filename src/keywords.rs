//! # ATS Keyword Extraction
//!
//! Derives the applicant-tracking keyword list embedded in the document
//! metadata and printed (near-invisibly) in the page footer. Sources, in
//! order: skills, project technologies, experience title words, education
//! degree words, then institution and company names. Deduplication is
//! case-insensitive with first-seen casing preserved, and the list is
//! capped so pathological inputs cannot bloat the footer.

use crate::model::ResumeData;
use std::collections::HashSet;

/// Hard cap on the number of extracted keywords.
pub const MAX_KEYWORDS: usize = 30;

/// Words too generic to be useful keywords.
const STOPWORDS: [&str; 5] = ["and", "the", "for", "with", "of"];

/// Delimiter used in the footer line and metadata string.
const DELIMITER: &str = " | ";

/// The ordered, deduplicated keyword list for one resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Extract keywords from `resume`. Deterministic: extracting twice from
    /// the same data yields an identical ordered list.
    pub fn extract(resume: &ResumeData) -> Self {
        let mut keywords: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        let mut push = |candidate: &str| {
            let trimmed = candidate.trim();
            if trimmed.is_empty() || keywords.len() >= MAX_KEYWORDS {
                return;
            }
            let lower = trimmed.to_lowercase();
            if seen.insert(lower) {
                keywords.push(trimmed.to_string());
            }
        };

        for skill in &resume.skills {
            push(skill);
        }

        for project in &resume.projects {
            for tech in project.technologies.split([',', '|']) {
                push(tech);
            }
        }

        for exp in &resume.experience {
            for word in meaningful_words(&exp.title) {
                push(word);
            }
        }

        for edu in &resume.education {
            for word in meaningful_words(&edu.degree) {
                push(word);
            }
        }

        for edu in &resume.education {
            push(&edu.institution);
        }
        for exp in &resume.experience {
            push(&exp.company);
        }

        Self { keywords }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    /// The single delimiter-joined string used for both the PDF /Keywords
    /// metadata field and the visible footer line.
    pub fn joined(&self) -> String {
        self.keywords.join(DELIMITER)
    }
}

/// Words from a free-text field that are worth indexing: longer than three
/// characters and not a stopword.
fn meaningful_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|word| word.len() > 3 && !STOPWORDS.contains(&word.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Education, Experience, PersonalDetails, Project};

    fn resume() -> ResumeData {
        ResumeData {
            personal_details: PersonalDetails {
                name: "Jane".into(),
                email: "j@e.com".into(),
                ..Default::default()
            },
            education: vec![Education {
                degree: "Bachelor of Science".into(),
                institution: "State University".into(),
                year: "2024".into(),
                grade: None,
            }],
            skills: vec!["React".into(), "react".into(), "SQL".into()],
            projects: vec![Project {
                title: "P".into(),
                description: String::new(),
                technologies: "Rust, React | Postgres".into(),
                link: None,
            }],
            experience: vec![Experience {
                title: "Senior Engineer for the Platform".into(),
                company: "Acme".into(),
                duration: "2020-2024".into(),
                description: String::new(),
            }],
        }
    }

    #[test]
    fn dedup_is_case_insensitive_first_seen_wins() {
        let set = KeywordSet::extract(&resume());
        let reacts: Vec<_> = set
            .as_slice()
            .iter()
            .filter(|k| k.eq_ignore_ascii_case("react"))
            .collect();
        assert_eq!(reacts.len(), 1);
        assert_eq!(reacts[0], "React");
    }

    #[test]
    fn extraction_is_idempotent() {
        let r = resume();
        assert_eq!(KeywordSet::extract(&r), KeywordSet::extract(&r));
    }

    #[test]
    fn technologies_split_on_comma_and_pipe() {
        let set = KeywordSet::extract(&resume());
        let slice = set.as_slice();
        assert!(slice.iter().any(|k| k == "Rust"));
        assert!(slice.iter().any(|k| k == "Postgres"));
    }

    #[test]
    fn stopwords_and_short_words_are_dropped() {
        let set = KeywordSet::extract(&resume());
        let slice = set.as_slice();
        assert!(slice.iter().any(|k| k == "Senior"));
        assert!(slice.iter().any(|k| k == "Platform"));
        assert!(!slice.iter().any(|k| k.eq_ignore_ascii_case("the")));
        assert!(!slice.iter().any(|k| k.eq_ignore_ascii_case("for")));
    }

    #[test]
    fn institutions_and_companies_are_included() {
        let set = KeywordSet::extract(&resume());
        assert!(set.as_slice().iter().any(|k| k == "State University"));
        assert!(set.as_slice().iter().any(|k| k == "Acme"));
    }

    #[test]
    fn list_is_capped() {
        let mut r = resume();
        r.skills = (0..100).map(|i| format!("Skill{i}")).collect();
        let set = KeywordSet::extract(&r);
        assert_eq!(set.as_slice().len(), MAX_KEYWORDS);
    }
}
