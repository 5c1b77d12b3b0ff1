use sea_orm::entity::prelude::*;

use crate::portfolio::domain::entities::Certificate;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certificates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    pub issuing_organization: String,
    pub issue_date: Date,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Certificate {
        Certificate {
            id: self.id,
            title: self.title.clone(),
            issuing_organization: self.issuing_organization.clone(),
            issue_date: self.issue_date,
            credential_url: self.credential_url.clone(),
            image_url: self.image_url.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
