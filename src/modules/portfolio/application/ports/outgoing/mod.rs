mod portfolio_store;

pub use portfolio_store::{
    CertificateDraft, PortfolioStore, PortfolioStoreError, PERSONAL_INFO_ID,
};
