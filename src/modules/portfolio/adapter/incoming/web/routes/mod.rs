pub mod add_certificate;
mod delete_certificate;
mod get_certificates;
mod get_education;
mod get_personal_info;
mod get_projects;
mod get_skills;
mod update_certificate;
mod update_profile_picture;
mod update_resume;

pub use add_certificate::add_certificate_handler;
pub use delete_certificate::delete_certificate_handler;
pub use get_certificates::get_certificates_handler;
pub use get_education::get_education_handler;
pub use get_personal_info::get_personal_info_handler;
pub use get_projects::get_projects_handler;
pub use get_skills::get_skills_handler;
pub use update_certificate::update_certificate_handler;
pub use update_profile_picture::update_profile_picture_handler;
pub use update_resume::update_resume_handler;
