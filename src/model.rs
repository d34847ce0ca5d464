//! # Resume Data Model
//!
//! The input representation for the generation pipeline: one immutable
//! `ResumeData` value per call, owned by the caller. Designed to be easily
//! produced from JSON (camelCase keys) or constructed directly.

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};

/// A complete resume ready for layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_details: PersonalDetails,

    #[serde(default)]
    pub education: Vec<Education>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub experience: Vec<Experience>,
}

/// Identity and contact fields. Only `name` and `email` are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

impl ResumeData {
    /// Check the fields that must be present before any layout work begins.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.personal_details.name.trim().is_empty() {
            return Err(GenerateError::InvalidInput(
                "personalDetails.name is required".to_string(),
            ));
        }
        if self.personal_details.email.trim().is_empty() {
            return Err(GenerateError::InvalidInput(
                "personalDetails.email is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ResumeData {
        ResumeData {
            personal_details: PersonalDetails {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                ..Default::default()
            },
            education: vec![],
            skills: vec![],
            projects: vec![],
            experience: vec![],
        }
    }

    #[test]
    fn minimal_resume_validates() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn missing_name_is_invalid() {
        let mut resume = minimal();
        resume.personal_details.name = "   ".to_string();
        assert!(matches!(
            resume.validate(),
            Err(GenerateError::InvalidInput(_))
        ));
    }

    #[test]
    fn missing_email_is_invalid() {
        let mut resume = minimal();
        resume.personal_details.email = String::new();
        assert!(matches!(
            resume.validate(),
            Err(GenerateError::InvalidInput(_))
        ));
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "personalDetails": { "name": "A", "email": "a@b.c", "github": "octocat" },
            "skills": ["React"],
            "projects": [{ "title": "P", "description": "d", "technologies": "Rust" }]
        }"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(resume.personal_details.github.as_deref(), Some("octocat"));
        assert_eq!(resume.projects.len(), 1);
        assert!(resume.experience.is_empty());
    }
}
