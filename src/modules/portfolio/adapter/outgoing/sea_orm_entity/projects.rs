use sea_orm::entity::prelude::*;
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::portfolio::domain::entities::Project;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    // JSONB array of technology names
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: JsonValue,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Project {
        Project {
            id: Some(self.id),
            title: self.title.clone(),
            description: self.description.clone(),
            technologies: match serde_json::from_value(self.technologies.clone()) {
                Ok(list) => list,
                Err(err) => {
                    warn!("Project {} has malformed technologies value: {}", self.id, err);
                    Vec::new()
                }
            },
            project_url: self.project_url.clone(),
            github_url: self.github_url.clone(),
            image_url: self.image_url.clone(),
            featured: self.featured,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
