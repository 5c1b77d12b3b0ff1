pub mod add_certificate;
pub mod delete_certificate;
pub mod get_certificates;
pub mod get_education;
pub mod get_personal_info;
pub mod get_projects;
pub mod get_skills;
pub mod update_certificate;
pub mod update_profile_picture;
pub mod update_resume;
