use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::portfolio::domain::entities::{
    Certificate, EducationEntry, PersonalInfo, Project, Skill,
};

/// The authoritative personal-info row. Writes target this id and never
/// insert.
pub const PERSONAL_INFO_ID: i32 = 1;

#[derive(Debug, Clone, Error)]
pub enum PortfolioStoreError {
    #[error("database error: {0}")]
    Database(String),
}

/// Certificate fields as accepted on create and full-replace update.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateDraft {
    pub title: String,
    pub issuing_organization: String,
    pub issue_date: NaiveDate,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
}

/// One round-trip per operation against the backing store. Every error is
/// surfaced to the caller; the fallback policy lives in the use cases, not
/// here.
#[async_trait]
pub trait PortfolioStore {
    /// The singleton row, `None` when the table is empty.
    async fn find_personal_info(&self) -> Result<Option<PersonalInfo>, PortfolioStoreError>;

    /// All education entries, end period descending.
    async fn list_education(&self) -> Result<Vec<EducationEntry>, PortfolioStoreError>;

    /// All skills, by category then proficiency descending.
    async fn list_skills(&self) -> Result<Vec<Skill>, PortfolioStoreError>;

    /// All projects, featured first then newest.
    async fn list_projects(&self) -> Result<Vec<Project>, PortfolioStoreError>;

    /// All certificates, issue date descending.
    async fn list_certificates(&self) -> Result<Vec<Certificate>, PortfolioStoreError>;

    /// Updates the picture reference on row [`PERSONAL_INFO_ID`] and
    /// refreshes updated_at. `None` when the singleton row is missing.
    async fn set_profile_picture(
        &self,
        url: &str,
    ) -> Result<Option<PersonalInfo>, PortfolioStoreError>;

    /// Symmetric to [`PortfolioStore::set_profile_picture`] for the resume
    /// reference.
    async fn set_resume_url(&self, url: &str)
        -> Result<Option<PersonalInfo>, PortfolioStoreError>;

    /// Inserts a new certificate and returns it with its assigned id.
    async fn insert_certificate(
        &self,
        draft: CertificateDraft,
    ) -> Result<Certificate, PortfolioStoreError>;

    /// Full replace of the draft fields for the row matching `id`,
    /// refreshing updated_at. `None` when no row matches; nothing is
    /// mutated in that case.
    async fn update_certificate(
        &self,
        id: i32,
        draft: CertificateDraft,
    ) -> Result<Option<Certificate>, PortfolioStoreError>;

    /// True iff a row was removed.
    async fn delete_certificate(&self, id: i32) -> Result<bool, PortfolioStoreError>;
}
