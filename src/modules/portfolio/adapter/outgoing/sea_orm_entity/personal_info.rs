use sea_orm::entity::prelude::*;

use crate::portfolio::domain::entities::PersonalInfo;

// The singleton personal-info table; the authoritative row has id = 1.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "personal_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub telegram_username: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub personal_statement: Option<String>,
    pub profile_picture_url: Option<String>,
    pub resume_url: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> PersonalInfo {
        PersonalInfo {
            id: Some(self.id),
            phone: self.phone.clone(),
            email: self.email.clone(),
            location: self.location.clone(),
            linkedin_url: self.linkedin_url.clone(),
            github_url: self.github_url.clone(),
            telegram_username: self.telegram_username.clone(),
            personal_statement: self.personal_statement.clone(),
            profile_picture_url: self.profile_picture_url.clone(),
            resume_url: self.resume_url.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
