//! Enhancement tips: a table of field checks over the resume

use crate::model::{is_present, word_count, ResumeData};
use crate::scoring::formatting::is_valid_email;
use crate::scoring::lexicon::LEXICON;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Critical,
    Important,
    Recommended,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResumeSection {
    PersonalInfo,
    Education,
    Experience,
    Projects,
    Skills,
    Certifications,
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TipCategory::Critical => write!(f, "Critical"),
            TipCategory::Important => write!(f, "Important"),
            TipCategory::Recommended => write!(f, "Recommended"),
            TipCategory::Optional => write!(f, "Optional"),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Impact::High => write!(f, "High"),
            Impact::Medium => write!(f, "Medium"),
            Impact::Low => write!(f, "Low"),
        }
    }
}

impl fmt::Display for ResumeSection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResumeSection::PersonalInfo => write!(f, "Personal Info"),
            ResumeSection::Education => write!(f, "Education"),
            ResumeSection::Experience => write!(f, "Experience"),
            ResumeSection::Projects => write!(f, "Projects"),
            ResumeSection::Skills => write!(f, "Skills"),
            ResumeSection::Certifications => write!(f, "Certifications"),
        }
    }
}

/// One actionable improvement for a resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancementTip {
    pub category: TipCategory,
    pub section: ResumeSection,
    pub issue: String,
    pub tip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub impact: Impact,
}

fn tip(
    category: TipCategory,
    section: ResumeSection,
    impact: Impact,
    issue: impl Into<String>,
    advice: &str,
    example: Option<&str>,
) -> Option<EnhancementTip> {
    Some(EnhancementTip {
        category,
        section,
        issue: issue.into(),
        tip: advice.to_string(),
        example: example.map(|e| e.to_string()),
        impact,
    })
}

type TipCheck = fn(&ResumeData) -> Option<EnhancementTip>;

use Impact::*;
use ResumeSection::*;
use TipCategory::*;

const TIP_CHECKS: [TipCheck; 25] = [
    // Personal info
    |r| {
        if r.personal_info.full_name.trim().is_empty() {
            return tip(Critical, PersonalInfo, High, "Missing full name", "Put your full name at the top of the resume so recruiters and ATS systems can identify you.", None);
        }
        None
    },
    |r| {
        let email = r.personal_info.email.trim();
        if email.is_empty() {
            tip(Critical, PersonalInfo, High, "Missing email address", "Add a professional email address so recruiters can contact you.", Some("jane.doe@gmail.com"))
        } else if !is_valid_email(email) {
            tip(Critical, PersonalInfo, High, "Email address looks invalid", "Check your email address for typos; an unreachable address costs interviews.", Some("jane.doe@gmail.com"))
        } else {
            None
        }
    },
    |r| {
        let phone = r.personal_info.phone.trim();
        if phone.is_empty() {
            tip(Critical, PersonalInfo, High, "Missing phone number", "Add a phone number; many recruiters screen by phone first.", Some("+1 (555) 123-4567"))
        } else if phone.chars().count() < 10 {
            tip(Important, PersonalInfo, Medium, "Phone number looks incomplete", "Include the full phone number with area code.", Some("+1 (555) 123-4567"))
        } else {
            None
        }
    },
    |r| {
        if !is_present(&r.personal_info.linkedin) {
            return tip(Important, PersonalInfo, Medium, "Missing LinkedIn profile", "Add your LinkedIn URL; most recruiters check it before reaching out.", Some("linkedin.com/in/jane-doe"));
        }
        None
    },
    |r| {
        if !is_present(&r.personal_info.github) && !is_present(&r.personal_info.website) {
            return tip(Recommended, PersonalInfo, Medium, "No GitHub or portfolio link", "Link to a GitHub profile or portfolio that shows your work.", Some("github.com/janedoe"));
        }
        None
    },
    |r| {
        if !is_present(&r.personal_info.location) {
            return tip(Optional, PersonalInfo, Low, "Missing location", "Add your city and country; some ATS filters search by location.", Some("Austin, TX"));
        }
        None
    },
    // Education
    |r| {
        if r.education.is_empty() {
            return tip(Important, Education, High, "No education listed", "Add your highest degree or relevant training, even if it is still in progress.", None);
        }
        None
    },
    |r| {
        let incomplete = r.education.iter().filter(|e| !e.is_complete()).count();
        if incomplete > 0 {
            return tip(Important, Education, Medium, format!("{} education entr{} missing institution, degree or end date", incomplete, if incomplete == 1 { "y" } else { "ies" }), "Fill in the institution, degree and graduation date (or expected date) for every entry.", Some("B.S. Computer Science, University of Texas, May 2022"));
        }
        None
    },
    |r| {
        if r.education.iter().any(|e| !is_present(&e.gpa)) {
            return tip(Optional, Education, Low, "GPA not listed", "Consider adding your GPA if it is 3.5 or higher, especially for early-career roles.", Some("GPA: 3.8/4.0"));
        }
        None
    },
    // Experience
    |r| {
        if r.experience.is_empty() {
            return tip(Critical, Experience, High, "No work experience listed", "Add work experience, including internships, freelance or volunteer roles.", None);
        }
        None
    },
    |r| {
        let roles = r.experience.iter().filter(|e| !e.has_achievements()).count();
        if roles > 0 {
            return tip(Important, Experience, High, format!("{} role(s) without achievements", roles), "List at least one concrete achievement per role, separate from day-to-day duties.", Some("Increased checkout conversion by 12% by redesigning the payment flow"));
        }
        None
    },
    |r| {
        let short = r.experience_bullets().iter().filter(|b| word_count(b) < 8).count();
        if short > 0 {
            return tip(Important, Experience, Medium, format!("{} bullet point(s) under 8 words", short), "Expand short bullets to describe the action, its scope and the outcome.", Some("Built an internal analytics dashboard used by 40 account managers to track renewals"));
        }
        None
    },
    |r| {
        let weak = r.experience_bullets().iter().filter(|b| LEXICON.starts_with_weak_phrase(b)).count();
        if weak > 0 {
            return tip(Important, Experience, Medium, format!("{} bullet point(s) open with weak phrases", weak), "Start bullets with strong action verbs instead of \"Responsible for\" or \"Helped\".", Some("Led the on-call rotation for 6 payment services"));
        }
        None
    },
    |r| {
        let bullets = r.experience_bullets();
        if !bullets.is_empty() && !bullets.iter().any(|b| b.chars().any(|c| c.is_ascii_digit())) {
            return tip(Important, Experience, High, "No quantified results in experience", "Add numbers that show impact: percentages, revenue, users, time saved or team size.", Some("Cut report generation time from 2 hours to 10 minutes"));
        }
        None
    },
    |r| {
        let thin = r.experience.iter().filter(|e| e.bullets().count() < 3).count();
        if thin > 0 {
            return tip(Recommended, Experience, Medium, format!("{} role(s) with fewer than 3 bullet points", thin), "Aim for 3-6 bullet points per role to show the breadth of your work.", None);
        }
        None
    },
    // Projects
    |r| {
        if r.projects.is_empty() {
            return tip(Recommended, Projects, Medium, "No projects listed", "Add one or two projects that show your skills in practice.", None);
        }
        None
    },
    |r| {
        let bare = r.projects.iter().filter(|p| p.technologies.iter().all(|t| t.trim().is_empty())).count();
        if bare > 0 {
            return tip(Recommended, Projects, Medium, format!("{} project(s) without technologies", bare), "List the languages, frameworks and services each project uses; they are searchable keywords.", Some("Rust, Axum, PostgreSQL, Docker"));
        }
        None
    },
    |r| {
        let short = r.projects.iter().filter(|p| word_count(&p.description) < 10).count();
        if short > 0 {
            return tip(Recommended, Projects, Low, format!("{} project(s) with a very short description", short), "Describe what each project does and who it is for in one or two sentences.", None);
        }
        None
    },
    |r| {
        let unlinked = r.projects.iter().filter(|p| !p.has_link()).count();
        if unlinked > 0 {
            return tip(Optional, Projects, Low, format!("{} project(s) without a link", unlinked), "Link to a live demo or the source repository so reviewers can see the work.", None);
        }
        None
    },
    // Skills
    |r| {
        if r.skills.is_empty() {
            return tip(Critical, Skills, High, "No skills section", "Add a skills section; ATS keyword searches rely heavily on it.", Some("Languages: Rust, Python, SQL"));
        }
        None
    },
    |r| {
        let items = r.total_skill_items();
        if !r.skills.is_empty() && items < 5 {
            return tip(Important, Skills, High, format!("Only {} skill(s) listed", items), "List at least 5 relevant skills, including tools and platforms.", None);
        }
        None
    },
    |r| {
        if r.skills.len() == 1 && r.total_skill_items() >= 5 {
            return tip(Optional, Skills, Low, "Skills are not grouped", "Group skills into categories such as Languages, Frameworks and Tools.", Some("Frameworks: React, Django"));
        }
        None
    },
    |r| {
        if r.total_skill_items() > 30 {
            return tip(Recommended, Skills, Low, "Very long skills list", "Trim the list to the 15-25 skills most relevant to the roles you target.", None);
        }
        None
    },
    // Certifications
    |r| {
        if r.certifications.is_empty() {
            return tip(Optional, Certifications, Low, "No certifications", "Relevant certifications can help you pass keyword filters.", Some("AWS Certified Solutions Architect - Associate"));
        }
        None
    },
    |r| {
        let missing = r.certifications.iter().filter(|c| !is_present(&c.credential_id)).count();
        if missing > 0 {
            return tip(Optional, Certifications, Low, format!("{} certification(s) without a credential ID", missing), "Add credential IDs so employers can verify your certifications.", None);
        }
        None
    },
];

/// Evaluate every check and sort by category severity, then impact
pub fn generate_enhancement_tips(resume: &ResumeData) -> Vec<EnhancementTip> {
    let mut tips: Vec<EnhancementTip> = TIP_CHECKS.iter().filter_map(|check| check(resume)).collect();
    tips.sort_by_key(|t| (t.category, t.impact));
    tips
}
