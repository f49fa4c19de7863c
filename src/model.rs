//! Resume document and score structures
//!
//! The wire format uses camelCase field names. Every field is optional on
//! input: missing or `null` strings become empty, missing or `null` arrays
//! become empty.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A structured resume as produced by the resume builder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<SkillCategory>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub responsibilities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

/// Result of one scoring pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ATSScore {
    pub overall: u8,
    pub breakdown: ScoreBreakdown,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub formatting: u8,
    pub keywords: u8,
    pub content: u8,
    pub completeness: u8,
}

/// True when an optional field carries something other than whitespace
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |v| !v.trim().is_empty())
}

/// Whitespace-separated word count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

impl Experience {
    /// Responsibilities followed by achievements, blanks skipped
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.responsibilities
            .iter()
            .chain(self.achievements.iter())
            .map(|b| b.as_str())
            .filter(|b| !b.trim().is_empty())
    }

    pub fn has_achievements(&self) -> bool {
        self.achievements.iter().any(|a| !a.trim().is_empty())
    }

    pub fn has_responsibilities(&self) -> bool {
        self.responsibilities.iter().any(|r| !r.trim().is_empty())
    }
}

impl Project {
    pub fn has_link(&self) -> bool {
        is_present(&self.link) || is_present(&self.github)
    }

    pub fn highlight_count(&self) -> usize {
        self.highlights.iter().filter(|h| !h.trim().is_empty()).count()
    }
}

impl Education {
    pub fn is_complete(&self) -> bool {
        !self.institution.trim().is_empty()
            && !self.degree.trim().is_empty()
            && !self.end_date.trim().is_empty()
    }
}

impl ResumeData {
    /// Parse a resume from its JSON wire format
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Every bullet point in document order: experience responsibilities and
    /// achievements, then project highlights
    pub fn all_bullets(&self) -> Vec<&str> {
        self.experience
            .iter()
            .flat_map(|e| e.bullets())
            .chain(
                self.projects
                    .iter()
                    .flat_map(|p| p.highlights.iter())
                    .map(|h| h.as_str())
                    .filter(|h| !h.trim().is_empty()),
            )
            .collect()
    }

    pub fn experience_bullets(&self) -> Vec<&str> {
        self.experience.iter().flat_map(|e| e.bullets()).collect()
    }

    pub fn total_skill_items(&self) -> usize {
        self.skills
            .iter()
            .map(|s| s.items.iter().filter(|i| !i.trim().is_empty()).count())
            .sum()
    }

    /// Start and end dates of education and experience entries, blanks skipped
    pub fn all_dates(&self) -> Vec<&str> {
        self.education
            .iter()
            .flat_map(|e| [e.start_date.as_str(), e.end_date.as_str()])
            .chain(
                self.experience
                    .iter()
                    .flat_map(|e| [e.start_date.as_str(), e.end_date.as_str()]),
            )
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .collect()
    }

    /// No education, experience or projects at all
    pub fn has_no_entries(&self) -> bool {
        self.education.is_empty() && self.experience.is_empty() && self.projects.is_empty()
    }
}
