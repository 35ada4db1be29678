//! Portfolio document types and the portfolio query layer.
//!
//! The portfolio document holds everything on the page except the blog:
//! profile, skills, projects, work experience, education, certifications,
//! and contact details. Every top-level key is optional; a missing section
//! reads as empty.
//!
//! ```json
//! {
//!   "personal": { "name": "Alex Morgan", "title": "Full-Stack Developer", "bio": "..." },
//!   "skills": { "frontend": ["React", "TypeScript"], "backend": ["Rust", "Node.js"] },
//!   "projects": [{ "id": 1, "title": "...", "category": "frontend", "technologies": ["React"] }],
//!   "experience": [{ "id": 1, "position": "...", "company": "...", "startDate": "2022-03" }],
//!   "education": [{ "id": 1, "degree": "...", "institution": "...", "startDate": "2016-09" }]
//! }
//! ```

use crate::text;
use crate::types::DateRange;
use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown project category: {0} (expected website, frontend, backend, fullstack or mobile)")]
pub struct UnknownCategory(pub String);

/// Closed set of project categories. Unrecognized values read as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Website,
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    #[serde(other)]
    Other,
}

impl ProjectCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
            Self::Mobile => "mobile",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "website" => Ok(Self::Website),
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "fullstack" => Ok(Self::Fullstack),
            "mobile" => Ok(Self::Mobile),
            "other" => Ok(Self::Other),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Personal {
    /// Avatar placeholder text when no avatar image is set.
    pub fn initials(&self) -> String {
        text::initials(&self.name)
    }
}

/// One named group of skills ("frontend", "tools", ...).
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// Skill groups in document order.
///
/// Written as a JSON object (`{"frontend": [...], "backend": [...]}`), but
/// kept as an ordered list so flattening follows the author's ordering
/// rather than key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skills {
    pub groups: Vec<SkillGroup>,
}

impl Skills {
    pub fn new(groups: Vec<SkillGroup>) -> Self {
        Self { groups }
    }
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.category, &group.skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = Skills;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of skill category to a list of skills")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Skills, A::Error> {
                let mut groups = Vec::new();
                while let Some((category, skills)) =
                    map.next_entry::<String, Option<Vec<String>>>()?
                {
                    groups.push(SkillGroup {
                        category,
                        skills: skills.unwrap_or_default(),
                    });
                }
                Ok(Skills { groups })
            }

            fn visit_unit<E>(self) -> Result<Skills, E> {
                Ok(Skills::default())
            }
        }

        deserializer.deserialize_any(SkillsVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::dates::option_date_format"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::dates::option_date_format"
    )]
    pub end_date: Option<NaiveDate>,
}

impl Project {
    /// The project's time span, when it has a start date.
    pub fn date_range(&self) -> Option<DateRange> {
        self.start_date
            .map(|start| DateRange::new(start, self.end_date))
    }

    fn uses_technology(&self, needle: &str) -> bool {
        self.technologies
            .iter()
            .any(|t| text::contains_folded(t, needle))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: u64,
    pub position: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub dates: DateRange,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: u64,
    pub degree: String,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub dates: DateRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::dates::option_date_format"
    )]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Social {
    /// Configured profiles as `(label, url)` pairs, in display order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", &self.github),
            ("LinkedIn", &self.linkedin),
            ("Twitter", &self.twitter),
            ("Website", &self.website),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

/// The portfolio document and its queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub personal: Personal,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub interests: Vec<String>,
    pub languages: Vec<Language>,
    pub social: Social,
    pub contact: Contact,
}

impl Portfolio {
    /// Projects flagged as featured, in document order.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Projects with any technology containing `technology` (case-insensitive).
    pub fn projects_by_technology(&self, technology: &str) -> Vec<&Project> {
        let needle = technology.to_lowercase();
        self.projects
            .iter()
            .filter(|p| p.uses_technology(&needle))
            .collect()
    }

    pub fn projects_by_category(&self, category: ProjectCategory) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Experience entries, newest start first. On equal starts an ongoing
    /// role comes before one that has ended.
    pub fn experience_by_date(&self) -> Vec<&Experience> {
        let mut entries: Vec<&Experience> = self.experience.iter().collect();
        entries.sort_by(|a, b| a.dates.newest_first(&b.dates));
        entries
    }

    /// Roles without an end date.
    pub fn ongoing_experience(&self) -> Vec<&Experience> {
        self.experience
            .iter()
            .filter(|e| e.dates.is_ongoing())
            .collect()
    }

    /// Education entries, newest start first.
    pub fn education_by_date(&self) -> Vec<&Education> {
        let mut entries: Vec<&Education> = self.education.iter().collect();
        entries.sort_by(|a, b| a.dates.newest_first(&b.dates));
        entries
    }

    /// Every skill of every group, concatenated in document order.
    /// Duplicates across groups are kept.
    pub fn all_skills(&self) -> Vec<&str> {
        self.skills
            .groups
            .iter()
            .flat_map(|g| g.skills.iter().map(String::as_str))
            .collect()
    }

    /// Skills of one group; empty when the group doesn't exist.
    pub fn skills_by_category(&self, category: &str) -> &[String] {
        self.skills
            .groups
            .iter()
            .find(|g| g.category.eq_ignore_ascii_case(category))
            .map(|g| g.skills.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn titles<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
        projects.iter().map(|p| p.title.as_str()).collect()
    }

    fn sample() -> Portfolio {
        Portfolio {
            projects: vec![
                Project {
                    featured: true,
                    category: ProjectCategory::Frontend,
                    ..project(1, "Dashboard", &["React", "TypeScript"])
                },
                project(2, "API", &["Rust", "PostgreSQL"]),
                Project {
                    featured: true,
                    category: ProjectCategory::Website,
                    ..project(3, "Landing", &["Next.js", "React Native"])
                },
            ],
            experience: vec![
                experience(1, "Junior", "2018-01-01", Some("2020-01-01")),
                experience(2, "Lead", "2022-03-01", None),
                experience(3, "Senior", "2020-02-01", Some("2022-02-28")),
            ],
            ..Portfolio::default()
        }
    }

    // =========================================================================
    // Projects
    // =========================================================================

    #[test]
    fn featured_projects_keep_order() {
        let portfolio = sample();
        assert_eq!(
            titles(&portfolio.featured_projects()),
            vec!["Dashboard", "Landing"]
        );
    }

    #[test]
    fn projects_by_technology_substring_any_case() {
        let portfolio = sample();
        assert_eq!(
            titles(&portfolio.projects_by_technology("REACT")),
            vec!["Dashboard", "Landing"]
        );
        assert_eq!(
            titles(&portfolio.projects_by_technology("gres")),
            vec!["API"]
        );
        assert!(portfolio.projects_by_technology("cobol").is_empty());
    }

    #[test]
    fn projects_by_category() {
        let portfolio = sample();
        assert_eq!(
            titles(&portfolio.projects_by_category(ProjectCategory::Website)),
            vec!["Landing"]
        );
        assert!(
            portfolio
                .projects_by_category(ProjectCategory::Mobile)
                .is_empty()
        );
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Frontend".parse::<ProjectCategory>(), Ok(ProjectCategory::Frontend));
        assert!("desktop".parse::<ProjectCategory>().is_err());
    }

    #[test]
    fn unknown_category_in_document_reads_as_other() {
        let p: Project =
            serde_json::from_str(r#"{"id": 1, "title": "Game", "category": "game"}"#).unwrap();
        assert_eq!(p.category, ProjectCategory::Other);
        assert!(p.technologies.is_empty());
        assert!(p.date_range().is_none());
    }

    // =========================================================================
    // Experience
    // =========================================================================

    #[test]
    fn experience_newest_start_first() {
        let portfolio = sample();
        let positions: Vec<&str> = portfolio
            .experience_by_date()
            .iter()
            .map(|e| e.position.as_str())
            .collect();
        assert_eq!(positions, vec!["Lead", "Senior", "Junior"]);
    }

    #[test]
    fn experience_sort_does_not_mutate_document() {
        let portfolio = sample();
        let _ = portfolio.experience_by_date();
        assert_eq!(portfolio.experience[0].position, "Junior");
    }

    #[test]
    fn ongoing_role_wins_equal_start() {
        let portfolio = Portfolio {
            experience: vec![
                experience(1, "Contract", "2022-01-01", Some("2022-06-01")),
                experience(2, "Current", "2022-01-01", None),
            ],
            ..Portfolio::default()
        };
        assert_eq!(portfolio.experience_by_date()[0].position, "Current");
        assert_eq!(portfolio.ongoing_experience().len(), 1);
    }

    #[test]
    fn experience_deserializes_flattened_dates() {
        let e: Experience = serde_json::from_str(
            r#"{
                "id": 4,
                "position": "Engineer",
                "company": "Acme",
                "startDate": "2021-05",
                "endDate": null
            }"#,
        )
        .unwrap();
        assert!(e.dates.is_ongoing());
        assert!(e.achievements.is_empty());
    }

    // =========================================================================
    // Skills
    // =========================================================================

    #[test]
    fn skills_keep_document_order() {
        let portfolio: Portfolio = serde_json::from_str(
            r#"{
                "skills": {
                    "tools": ["Git", "Docker"],
                    "backend": ["Rust", "Git"],
                    "database": null
                }
            }"#,
        )
        .unwrap();
        assert_eq!(portfolio.all_skills(), vec!["Git", "Docker", "Rust", "Git"]);
        assert_eq!(portfolio.skills.groups[2].category, "database");
        assert!(portfolio.skills_by_category("database").is_empty());
    }

    #[test]
    fn skills_by_category_lookup() {
        let portfolio = Portfolio {
            skills: Skills::new(vec![SkillGroup {
                category: "frontend".into(),
                skills: vec!["React".into()],
            }]),
            ..Portfolio::default()
        };
        assert_eq!(portfolio.skills_by_category("Frontend").to_vec(), vec!["React".to_string()]);
        assert!(portfolio.skills_by_category("mobile").is_empty());
    }

    #[test]
    fn skills_serialize_as_object_in_order() {
        let skills = Skills::new(vec![
            SkillGroup {
                category: "z".into(),
                skills: vec!["one".into()],
            },
            SkillGroup {
                category: "a".into(),
                skills: vec![],
            },
        ]);
        assert_eq!(
            serde_json::to_string(&skills).unwrap(),
            r#"{"z":["one"],"a":[]}"#
        );
    }

    // =========================================================================
    // Empty document
    // =========================================================================

    #[test]
    fn empty_document_yields_empty_results() {
        let portfolio: Portfolio = serde_json::from_str("{}").unwrap();
        assert!(portfolio.featured_projects().is_empty());
        assert!(portfolio.projects_by_technology("rust").is_empty());
        assert!(portfolio.experience_by_date().is_empty());
        assert!(portfolio.all_skills().is_empty());
    }

    #[test]
    fn social_links_skip_missing_profiles() {
        let social = Social {
            github: Some("https://github.com/example".into()),
            twitter: Some("https://twitter.com/example".into()),
            ..Social::default()
        };
        let labels: Vec<&str> = social.links().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["GitHub", "Twitter"]);
    }

    #[test]
    fn personal_initials() {
        let personal = Personal {
            name: "Alex Morgan".into(),
            ..Personal::default()
        };
        assert_eq!(personal.initials(), "AM");
    }
}
