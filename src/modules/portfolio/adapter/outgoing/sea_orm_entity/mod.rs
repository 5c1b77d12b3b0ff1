pub mod certificates;
pub mod education;
pub mod personal_info;
pub mod projects;
pub mod skills;
