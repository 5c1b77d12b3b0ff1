use crate::portfolio::application::ports::outgoing::{PortfolioStore, PortfolioStoreError};
use crate::portfolio::application::use_cases::update_profile_picture::UpdatePersonalInfoError;
use crate::portfolio::domain::entities::PersonalInfo;

#[derive(Debug, Clone)]
pub struct UpdateResumeUrlUseCase<S: PortfolioStore> {
    store: S,
}

impl<S: PortfolioStore> UpdateResumeUrlUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
pub trait IUpdateResumeUrlUseCase: Send + Sync {
    async fn execute(&self, url: &str) -> Result<PersonalInfo, UpdatePersonalInfoError>;
}

#[async_trait::async_trait]
impl<S> IUpdateResumeUrlUseCase for UpdateResumeUrlUseCase<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self, url: &str) -> Result<PersonalInfo, UpdatePersonalInfoError> {
        self.store
            .set_resume_url(url)
            .await
            .map_err(|PortfolioStoreError::Database(msg)| {
                UpdatePersonalInfoError::StoreError(msg)
            })?
            .ok_or(UpdatePersonalInfoError::RecordMissing)
    }
}
