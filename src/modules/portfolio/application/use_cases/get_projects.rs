use std::sync::Arc;

use tracing::warn;

use crate::portfolio::application::fallback::FallbackContent;
use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::portfolio::domain::entities::{DataResult, Project};

#[derive(Debug, Clone)]
pub struct GetProjectsUseCase<S: PortfolioStore> {
    store: S,
    fallback: Arc<FallbackContent>,
}

impl<S: PortfolioStore> GetProjectsUseCase<S> {
    pub fn new(store: S, fallback: Arc<FallbackContent>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait::async_trait]
pub trait IGetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> DataResult<Vec<Project>>;
}

#[async_trait::async_trait]
impl<S> IGetProjectsUseCase for GetProjectsUseCase<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self) -> DataResult<Vec<Project>> {
        match self.store.list_projects().await {
            Ok(projects) if !projects.is_empty() => DataResult::from_store(projects),
            Ok(_) => {
                warn!("projects table is empty, serving fallback data");
                DataResult::from_fallback(self.fallback.projects.clone())
            }
            Err(err) => {
                warn!("store unavailable, serving fallback projects: {err}");
                DataResult::from_fallback(self.fallback.projects.clone())
            }
        }
    }
}
