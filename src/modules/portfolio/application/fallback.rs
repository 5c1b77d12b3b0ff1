use chrono::Utc;

use crate::portfolio::domain::entities::{
    Certificate, EducationEntry, PersonalInfo, Project, Skill,
};

/// Static substitute content served when the store is unavailable, so the
/// public API always answers with something displayable. Built once at
/// startup and shared read-only; fallback records carry no id.
#[derive(Debug, Clone)]
pub struct FallbackContent {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    /// Empty by design: certificates are store-managed only.
    pub certificates: Vec<Certificate>,
}

impl Default for FallbackContent {
    fn default() -> Self {
        let now = Utc::now();

        Self {
            personal_info: PersonalInfo {
                id: None,
                phone: Some("+1 555 010 0199".to_string()),
                email: Some("hello@example.dev".to_string()),
                location: Some("Berlin, Germany".to_string()),
                linkedin_url: Some("https://www.linkedin.com/in/example-dev".to_string()),
                github_url: Some("https://github.com/example-dev".to_string()),
                telegram_username: Some("@example_dev".to_string()),
                personal_statement: Some(
                    "Software engineer focused on web backends and developer tooling. \
                     I enjoy building small, reliable services and learning in public."
                        .to_string(),
                ),
                profile_picture_url: None,
                resume_url: None,
                created_at: now,
                updated_at: now,
            },
            education: vec![
                EducationEntry {
                    id: None,
                    institution: Some("Technical University".to_string()),
                    degree: Some("Bachelor of Science".to_string()),
                    field_of_study: Some("Computer Science".to_string()),
                    start_date: Some("2019".to_string()),
                    end_date: Some("2023".to_string()),
                    location: Some("Berlin, Germany".to_string()),
                    description: Some(
                        "Degree program focused on computer science fundamentals \
                         and practical applications"
                            .to_string(),
                    ),
                    certificate_type: Some("Degree".to_string()),
                    created_at: now,
                },
                EducationEntry {
                    id: None,
                    institution: Some("Design Academy".to_string()),
                    degree: Some("UI Design Coursework".to_string()),
                    field_of_study: Some("Interface Design".to_string()),
                    start_date: Some("Nov 2021".to_string()),
                    end_date: Some("April 2022".to_string()),
                    location: Some("Remote".to_string()),
                    description: Some(
                        "Completed coursework in interface design principles and tools"
                            .to_string(),
                    ),
                    certificate_type: Some("Certificate".to_string()),
                    created_at: now,
                },
            ],
            skills: vec![
                fallback_skill("Programming Languages", "JavaScript", 4),
                fallback_skill("Programming Languages", "Python", 4),
                fallback_skill("Programming Languages", "Rust", 3),
                fallback_skill("Web Development", "React", 4),
                fallback_skill("Web Development", "Actix Web", 4),
                fallback_skill("Web Development", "PostgreSQL", 3),
            ],
            projects: vec![Project {
                id: None,
                title: "Portfolio Backend".to_string(),
                description: Some(
                    "REST API serving portfolio content with database-backed reads \
                     and static fallback data"
                        .to_string(),
                ),
                technologies: vec![
                    "Rust".to_string(),
                    "Actix Web".to_string(),
                    "PostgreSQL".to_string(),
                ],
                project_url: Some("https://portfolio.example.dev".to_string()),
                github_url: Some("https://github.com/example-dev/portfolio-backend".to_string()),
                image_url: None,
                featured: true,
                created_at: now,
            }],
            certificates: vec![],
        }
    }
}

fn fallback_skill(category: &str, name: &str, proficiency: i16) -> Skill {
    Skill {
        id: None,
        category: category.to_string(),
        skill_name: name.to_string(),
        proficiency_level: proficiency,
    }
}
