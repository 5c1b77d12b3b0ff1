use sea_orm::entity::prelude::*;

use crate::portfolio::domain::entities::EducationEntry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    // Free-text periods, compared lexically by the canonical read.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub certificate_type: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> EducationEntry {
        EducationEntry {
            id: Some(self.id),
            institution: self.institution.clone(),
            degree: self.degree.clone(),
            field_of_study: self.field_of_study.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            certificate_type: self.certificate_type.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
