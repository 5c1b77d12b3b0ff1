use crate::portfolio::application::ports::outgoing::{
    CertificateDraft, PortfolioStore, PortfolioStoreError,
};
use crate::portfolio::domain::entities::Certificate;

#[derive(Debug, Clone, PartialEq)]
pub enum CertificateWriteError {
    StoreError(String),
}

impl From<PortfolioStoreError> for CertificateWriteError {
    fn from(err: PortfolioStoreError) -> Self {
        let PortfolioStoreError::Database(msg) = err;
        CertificateWriteError::StoreError(msg)
    }
}

#[derive(Debug, Clone)]
pub struct AddCertificateUseCase<S: PortfolioStore> {
    store: S,
}

impl<S: PortfolioStore> AddCertificateUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
pub trait IAddCertificateUseCase: Send + Sync {
    async fn execute(&self, draft: CertificateDraft) -> Result<Certificate, CertificateWriteError>;
}

#[async_trait::async_trait]
impl<S> IAddCertificateUseCase for AddCertificateUseCase<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self, draft: CertificateDraft) -> Result<Certificate, CertificateWriteError> {
        Ok(self.store.insert_certificate(draft).await?)
    }
}
