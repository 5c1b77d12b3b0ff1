use crate::portfolio::application::ports::outgoing::{CertificateDraft, PortfolioStore};
use crate::portfolio::application::use_cases::add_certificate::CertificateWriteError;
use crate::portfolio::domain::entities::Certificate;

#[derive(Debug, Clone)]
pub struct UpdateCertificateUseCase<S: PortfolioStore> {
    store: S,
}

impl<S: PortfolioStore> UpdateCertificateUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
pub trait IUpdateCertificateUseCase: Send + Sync {
    /// `Ok(None)` when no row matches `id`; nothing is mutated in that
    /// case.
    async fn execute(
        &self,
        id: i32,
        draft: CertificateDraft,
    ) -> Result<Option<Certificate>, CertificateWriteError>;
}

#[async_trait::async_trait]
impl<S> IUpdateCertificateUseCase for UpdateCertificateUseCase<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(
        &self,
        id: i32,
        draft: CertificateDraft,
    ) -> Result<Option<Certificate>, CertificateWriteError> {
        Ok(self.store.update_certificate(id, draft).await?)
    }
}
