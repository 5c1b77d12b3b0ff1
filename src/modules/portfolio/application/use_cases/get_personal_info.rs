use std::sync::Arc;

use tracing::warn;

use crate::portfolio::application::fallback::FallbackContent;
use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::portfolio::domain::entities::{DataResult, PersonalInfo};

/// Read side of the singleton personal-info record. Reads favor
/// availability: any store failure, and an empty table, degrade to the
/// fallback record instead of surfacing an error.
#[derive(Debug, Clone)]
pub struct GetPersonalInfoUseCase<S: PortfolioStore> {
    store: S,
    fallback: Arc<FallbackContent>,
}

impl<S: PortfolioStore> GetPersonalInfoUseCase<S> {
    pub fn new(store: S, fallback: Arc<FallbackContent>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait::async_trait]
pub trait IGetPersonalInfoUseCase: Send + Sync {
    async fn execute(&self) -> DataResult<PersonalInfo>;
}

#[async_trait::async_trait]
impl<S> IGetPersonalInfoUseCase for GetPersonalInfoUseCase<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self) -> DataResult<PersonalInfo> {
        match self.store.find_personal_info().await {
            Ok(Some(info)) => DataResult::from_store(info),
            Ok(None) => {
                warn!("personal info table is empty, serving fallback data");
                DataResult::from_fallback(self.fallback.personal_info.clone())
            }
            Err(err) => {
                warn!("store unavailable, serving fallback personal info: {err}");
                DataResult::from_fallback(self.fallback.personal_info.clone())
            }
        }
    }
}
