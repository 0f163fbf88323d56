use async_trait::async_trait;
use pantry_shared::BudgetId;

use crate::expense::{ExpenseRecord, NewExpense};
use crate::window::ExpenseWindow;

pub type RepoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Repository trait for expense data access
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Insert a row; the store assigns `id` and `created_at`.
    async fn insert_expense(
        &self,
        expense: &NewExpense,
    ) -> RepoResult<ExpenseRecord>;

    /// Rows created inside `window`, optionally restricted to one budget,
    /// in insertion order.
    async fn find_expenses(
        &self,
        window: &ExpenseWindow,
        budget_id: Option<BudgetId>,
    ) -> RepoResult<Vec<ExpenseRecord>>;
}
