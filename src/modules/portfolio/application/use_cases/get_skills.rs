use std::sync::Arc;

use tracing::warn;

use crate::portfolio::application::fallback::FallbackContent;
use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::portfolio::domain::entities::{group_skills_by_category, DataResult, SkillsByCategory};

/// Reads skill rows and groups them into category -> [{name, proficiency}]
/// before returning. The source tag is resolved on the raw rows, then the
/// grouping is applied to whichever set won.
#[derive(Debug, Clone)]
pub struct GetSkillsUseCase<S: PortfolioStore> {
    store: S,
    fallback: Arc<FallbackContent>,
}

impl<S: PortfolioStore> GetSkillsUseCase<S> {
    pub fn new(store: S, fallback: Arc<FallbackContent>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait::async_trait]
pub trait IGetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> DataResult<SkillsByCategory>;
}

#[async_trait::async_trait]
impl<S> IGetSkillsUseCase for GetSkillsUseCase<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self) -> DataResult<SkillsByCategory> {
        let rows = match self.store.list_skills().await {
            Ok(rows) if !rows.is_empty() => {
                return DataResult::from_store(group_skills_by_category(rows));
            }
            Ok(_) => {
                warn!("skills table is empty, serving fallback data");
                self.fallback.skills.clone()
            }
            Err(err) => {
                warn!("store unavailable, serving fallback skills: {err}");
                self.fallback.skills.clone()
            }
        };

        DataResult::from_fallback(group_skills_by_category(rows))
    }
}
