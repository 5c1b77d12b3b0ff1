use tracing::warn;

use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::portfolio::domain::entities::Certificate;

/// Certificates intentionally degrade to an empty list rather than a
/// nonempty fallback: the fallback certificate collection is defined empty,
/// so a store failure and an empty table are indistinguishable to callers.
#[derive(Debug, Clone)]
pub struct GetCertificatesUseCase<S: PortfolioStore> {
    store: S,
}

impl<S: PortfolioStore> GetCertificatesUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
pub trait IGetCertificatesUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Certificate>;
}

#[async_trait::async_trait]
impl<S> IGetCertificatesUseCase for GetCertificatesUseCase<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self) -> Vec<Certificate> {
        match self.store.list_certificates().await {
            Ok(certificates) => certificates,
            Err(err) => {
                warn!("store unavailable, serving empty certificate list: {err}");
                vec![]
            }
        }
    }
}
