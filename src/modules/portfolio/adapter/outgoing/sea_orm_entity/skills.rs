use sea_orm::entity::prelude::*;

use crate::portfolio::domain::entities::Skill;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub category: String,
    pub skill_name: String,
    pub proficiency_level: i16,
}

impl Model {
    pub fn to_domain(&self) -> Skill {
        Skill {
            id: Some(self.id),
            category: self.category.clone(),
            skill_name: self.skill_name.clone(),
            proficiency_level: self.proficiency_level,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
