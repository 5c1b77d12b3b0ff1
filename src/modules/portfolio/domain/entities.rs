use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Where a read result came from. Carried explicitly instead of being
/// inferred from the presence of an `id` field: a store row with a null id
/// must still count as store data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Store,
    Fallback,
}

/// A read result tagged with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct DataResult<T> {
    pub value: T,
    pub source: DataSource,
}

impl<T> DataResult<T> {
    pub fn from_store(value: T) -> Self {
        Self {
            value,
            source: DataSource::Store,
        }
    }

    pub fn from_fallback(value: T) -> Self {
        Self {
            value,
            source: DataSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

/// The singleton personal-info record. The authoritative row always has
/// id = 1; fallback copies carry `id: None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub telegram_username: Option<String>,
    pub personal_statement: Option<String>,
    pub profile_picture_url: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    /// Free-text periods ("2021", "Nov 2021"), not parsed dates.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub certificate_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A single skill row as stored; callers receive skills grouped by
/// category, see [`SkillsByCategory`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub category: String,
    pub skill_name: String,
    pub proficiency_level: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillEntry {
    pub name: String,
    pub proficiency: i16,
}

/// Category name mapped to its skills, proficiency descending within a
/// category. The canonical read sorts by category, so ordered-map
/// iteration matches first-appearance order.
pub type SkillsByCategory = BTreeMap<String, Vec<SkillEntry>>;

pub fn group_skills_by_category(skills: Vec<Skill>) -> SkillsByCategory {
    let mut grouped: SkillsByCategory = BTreeMap::new();
    for skill in skills {
        grouped.entry(skill.category).or_default().push(SkillEntry {
            name: skill.skill_name,
            proficiency: skill.proficiency_level,
        });
    }
    grouped
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Certificates are fully store-managed (the fallback collection is empty
/// by design), so the id is never absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Certificate {
    pub id: i32,
    pub title: String,
    pub issuing_organization: String,
    pub issue_date: NaiveDate,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
