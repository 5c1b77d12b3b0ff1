use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::portfolio::adapter::outgoing::sea_orm_entity::{
    certificates, education, personal_info, projects, skills,
};
use crate::portfolio::application::ports::outgoing::{
    CertificateDraft, PortfolioStore, PortfolioStoreError, PERSONAL_INFO_ID,
};
use crate::portfolio::domain::entities::{
    Certificate, EducationEntry, PersonalInfo, Project, Skill,
};

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioStore for PortfolioStorePostgres {
    async fn find_personal_info(&self) -> Result<Option<PersonalInfo>, PortfolioStoreError> {
        let row = personal_info::Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|model| model.to_domain()))
    }

    async fn list_education(&self) -> Result<Vec<EducationEntry>, PortfolioStoreError> {
        let rows = education::Entity::find()
            .order_by_desc(education::Column::EndDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(education::Model::to_domain).collect())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, PortfolioStoreError> {
        let rows = skills::Entity::find()
            .order_by_asc(skills::Column::Category)
            .order_by_desc(skills::Column::ProficiencyLevel)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(skills::Model::to_domain).collect())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, PortfolioStoreError> {
        let rows = projects::Entity::find()
            .order_by_desc(projects::Column::Featured)
            .order_by_desc(projects::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(projects::Model::to_domain).collect())
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, PortfolioStoreError> {
        let rows = certificates::Entity::find()
            .order_by_desc(certificates::Column::IssueDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(certificates::Model::to_domain).collect())
    }

    async fn set_profile_picture(
        &self,
        url: &str,
    ) -> Result<Option<PersonalInfo>, PortfolioStoreError> {
        let mut model = <personal_info::ActiveModel as Default>::default();
        model.profile_picture_url = Set(Some(url.to_string()));
        model.updated_at = Set(Utc::now().fixed_offset());

        self.update_singleton(model).await
    }

    async fn set_resume_url(
        &self,
        url: &str,
    ) -> Result<Option<PersonalInfo>, PortfolioStoreError> {
        let mut model = <personal_info::ActiveModel as Default>::default();
        model.resume_url = Set(Some(url.to_string()));
        model.updated_at = Set(Utc::now().fixed_offset());

        self.update_singleton(model).await
    }

    async fn insert_certificate(
        &self,
        draft: CertificateDraft,
    ) -> Result<Certificate, PortfolioStoreError> {
        let now = Utc::now().fixed_offset();

        let model = certificates::ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            issuing_organization: Set(draft.issuing_organization),
            issue_date: Set(draft.issue_date),
            credential_url: Set(draft.credential_url),
            image_url: Set(draft.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(row.to_domain())
    }

    async fn update_certificate(
        &self,
        id: i32,
        draft: CertificateDraft,
    ) -> Result<Option<Certificate>, PortfolioStoreError> {
        let mut model = <certificates::ActiveModel as Default>::default();
        model.title = Set(draft.title);
        model.issuing_organization = Set(draft.issuing_organization);
        model.issue_date = Set(draft.issue_date);
        model.credential_url = Set(draft.credential_url);
        model.image_url = Set(draft.image_url);
        model.updated_at = Set(Utc::now().fixed_offset());

        let rows = certificates::Entity::update_many()
            .set(model)
            .filter(certificates::Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().next().map(|row| row.to_domain()))
    }

    async fn delete_certificate(&self, id: i32) -> Result<bool, PortfolioStoreError> {
        let result = certificates::Entity::delete_many()
            .filter(certificates::Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

impl PortfolioStorePostgres {
    // Updates are pinned to the singleton row; an empty returning set means
    // the row is missing, never that a new one should be created.
    async fn update_singleton(
        &self,
        model: personal_info::ActiveModel,
    ) -> Result<Option<PersonalInfo>, PortfolioStoreError> {
        let rows = personal_info::Entity::update_many()
            .set(model)
            .filter(personal_info::Column::Id.eq(PERSONAL_INFO_ID))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().next().map(|row| row.to_domain()))
    }
}

fn map_db_err(e: DbErr) -> PortfolioStoreError {
    PortfolioStoreError::Database(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
