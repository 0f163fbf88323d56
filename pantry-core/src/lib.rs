pub mod clock;
pub mod expense;
pub mod repository;
pub mod service;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use expense::{ExpenseDetail, ExpenseRecord, ExpenseSummary, NewExpense, Owner};
pub use repository::{ExpenseRepository, RepoResult};
pub use service::ExpenseService;
pub use window::ExpenseWindow;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    /// Store rejected a write. Carries the store's message unchanged.
    #[error("{0}")]
    CreationError(String),
    /// Store failed a read. Carries the store's message unchanged.
    #[error("{0}")]
    QueryError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
