pub mod app_config;
pub mod catalog_repo;
pub mod database;
pub mod expense_repo;
pub mod memory_repo;

pub use catalog_repo::StoreProductFeed;
pub use database::DbClient;
pub use expense_repo::StoreExpenseRepository;
pub use memory_repo::{InMemoryExpenseRepository, InMemoryProductFeed};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
