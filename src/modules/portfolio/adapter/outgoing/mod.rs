mod portfolio_store_postgres;
pub mod sea_orm_entity;

pub use portfolio_store_postgres::PortfolioStorePostgres;
