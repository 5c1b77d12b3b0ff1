use chrono::{NaiveDate, Utc};

use crate::portfolio::application::ports::outgoing::CertificateDraft;
use crate::portfolio::domain::entities::{
    Certificate, EducationEntry, PersonalInfo, Project, Skill,
};

pub fn sample_personal_info() -> PersonalInfo {
    let now = Utc::now();

    PersonalInfo {
        id: Some(1),
        phone: Some("+1 555 010 0100".to_string()),
        email: Some("dev@example.com".to_string()),
        location: Some("Berlin, Germany".to_string()),
        linkedin_url: Some("https://www.linkedin.com/in/dev".to_string()),
        github_url: Some("https://github.com/dev".to_string()),
        telegram_username: None,
        personal_statement: Some("Backend engineer.".to_string()),
        profile_picture_url: None,
        resume_url: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_education_entry(id: i32, institution: &str, end_date: &str) -> EducationEntry {
    EducationEntry {
        id: Some(id),
        institution: Some(institution.to_string()),
        degree: Some("Bachelor of Science".to_string()),
        field_of_study: Some("Computer Science".to_string()),
        start_date: Some("2019".to_string()),
        end_date: Some(end_date.to_string()),
        location: Some("Berlin, Germany".to_string()),
        description: None,
        certificate_type: Some("Degree".to_string()),
        created_at: Utc::now(),
    }
}

pub fn sample_skill(category: &str, name: &str, proficiency: i16) -> Skill {
    Skill {
        id: Some(1),
        category: category.to_string(),
        skill_name: name.to_string(),
        proficiency_level: proficiency,
    }
}

pub fn sample_project(id: i32, title: &str, featured: bool) -> Project {
    Project {
        id: Some(id),
        title: title.to_string(),
        description: Some("A sample project".to_string()),
        technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        project_url: Some("https://demo.example.dev".to_string()),
        github_url: Some("https://github.com/dev/sample".to_string()),
        image_url: None,
        featured,
        created_at: Utc::now(),
    }
}

pub fn sample_certificate(id: i32) -> Certificate {
    let now = Utc::now();

    Certificate {
        id,
        title: "Cloud Practitioner".to_string(),
        issuing_organization: "Example Org".to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        credential_url: Some("https://credentials.example.org/123".to_string()),
        image_url: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_certificate_draft() -> CertificateDraft {
    CertificateDraft {
        title: "Cloud Practitioner".to_string(),
        issuing_organization: "Example Org".to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        credential_url: Some("https://credentials.example.org/123".to_string()),
        image_url: None,
    }
}
