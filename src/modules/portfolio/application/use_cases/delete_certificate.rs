use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::portfolio::application::use_cases::add_certificate::CertificateWriteError;

#[derive(Debug, Clone)]
pub struct DeleteCertificateUseCase<S: PortfolioStore> {
    store: S,
}

impl<S: PortfolioStore> DeleteCertificateUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
pub trait IDeleteCertificateUseCase: Send + Sync {
    /// True iff a row was removed.
    async fn execute(&self, id: i32) -> Result<bool, CertificateWriteError>;
}

#[async_trait::async_trait]
impl<S> IDeleteCertificateUseCase for DeleteCertificateUseCase<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<bool, CertificateWriteError> {
        Ok(self.store.delete_certificate(id).await?)
    }
}
