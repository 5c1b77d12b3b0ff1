use std::sync::Arc;

use tracing::warn;

use crate::portfolio::application::fallback::FallbackContent;
use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::portfolio::domain::entities::{DataResult, EducationEntry};

#[derive(Debug, Clone)]
pub struct GetEducationUseCase<S: PortfolioStore> {
    store: S,
    fallback: Arc<FallbackContent>,
}

impl<S: PortfolioStore> GetEducationUseCase<S> {
    pub fn new(store: S, fallback: Arc<FallbackContent>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait::async_trait]
pub trait IGetEducationUseCase: Send + Sync {
    async fn execute(&self) -> DataResult<Vec<EducationEntry>>;
}

#[async_trait::async_trait]
impl<S> IGetEducationUseCase for GetEducationUseCase<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self) -> DataResult<Vec<EducationEntry>> {
        match self.store.list_education().await {
            Ok(entries) if !entries.is_empty() => DataResult::from_store(entries),
            Ok(_) => {
                warn!("education table is empty, serving fallback data");
                DataResult::from_fallback(self.fallback.education.clone())
            }
            Err(err) => {
                warn!("store unavailable, serving fallback education: {err}");
                DataResult::from_fallback(self.fallback.education.clone())
            }
        }
    }
}
