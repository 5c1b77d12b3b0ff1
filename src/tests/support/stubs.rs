use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::portfolio::application::ports::outgoing::{
    CertificateDraft, PortfolioStore, PortfolioStoreError,
};
use crate::portfolio::domain::entities::{
    Certificate, EducationEntry, PersonalInfo, Project, Skill,
};

/// Configurable in-memory stand-in for the Postgres store. Reads serve the
/// configured rows; writes echo their input back the way RETURNING would.
/// `write_calls` is shared across clones so tests can assert that a
/// rejected request never reached the store.
#[derive(Clone, Default)]
pub struct StubPortfolioStore {
    pub personal_info: Option<PersonalInfo>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    /// Id assigned to an inserted certificate.
    pub next_certificate_id: i32,
    /// Whether certificate update/delete find a matching row.
    pub certificate_exists: bool,
    pub write_calls: Arc<AtomicUsize>,
}

impl StubPortfolioStore {
    fn record_write(&self) -> Result<(), PortfolioStoreError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            Err(PortfolioStoreError::Database(
                "connection refused".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn check_read(&self) -> Result<(), PortfolioStoreError> {
        if self.fail_reads {
            Err(PortfolioStoreError::Database(
                "connection refused".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

fn certificate_from_draft(id: i32, draft: CertificateDraft) -> Certificate {
    let now = Utc::now();

    Certificate {
        id,
        title: draft.title,
        issuing_organization: draft.issuing_organization,
        issue_date: draft.issue_date,
        credential_url: draft.credential_url,
        image_url: draft.image_url,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl PortfolioStore for StubPortfolioStore {
    async fn find_personal_info(&self) -> Result<Option<PersonalInfo>, PortfolioStoreError> {
        self.check_read()?;
        Ok(self.personal_info.clone())
    }

    async fn list_education(&self) -> Result<Vec<EducationEntry>, PortfolioStoreError> {
        self.check_read()?;
        Ok(self.education.clone())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, PortfolioStoreError> {
        self.check_read()?;
        Ok(self.skills.clone())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, PortfolioStoreError> {
        self.check_read()?;
        Ok(self.projects.clone())
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, PortfolioStoreError> {
        self.check_read()?;
        Ok(self.certificates.clone())
    }

    async fn set_profile_picture(
        &self,
        url: &str,
    ) -> Result<Option<PersonalInfo>, PortfolioStoreError> {
        self.record_write()?;
        Ok(self.personal_info.clone().map(|mut info| {
            info.profile_picture_url = Some(url.to_string());
            info.updated_at = Utc::now();
            info
        }))
    }

    async fn set_resume_url(
        &self,
        url: &str,
    ) -> Result<Option<PersonalInfo>, PortfolioStoreError> {
        self.record_write()?;
        Ok(self.personal_info.clone().map(|mut info| {
            info.resume_url = Some(url.to_string());
            info.updated_at = Utc::now();
            info
        }))
    }

    async fn insert_certificate(
        &self,
        draft: CertificateDraft,
    ) -> Result<Certificate, PortfolioStoreError> {
        self.record_write()?;
        Ok(certificate_from_draft(self.next_certificate_id, draft))
    }

    async fn update_certificate(
        &self,
        id: i32,
        draft: CertificateDraft,
    ) -> Result<Option<Certificate>, PortfolioStoreError> {
        self.record_write()?;
        if self.certificate_exists {
            Ok(Some(certificate_from_draft(id, draft)))
        } else {
            Ok(None)
        }
    }

    async fn delete_certificate(&self, _id: i32) -> Result<bool, PortfolioStoreError> {
        self.record_write()?;
        Ok(self.certificate_exists)
    }
}
