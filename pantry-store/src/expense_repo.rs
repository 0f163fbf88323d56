use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pantry_core::{ExpenseRecord, ExpenseRepository, ExpenseWindow, NewExpense, RepoResult};
use pantry_shared::BudgetId;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct StoreExpenseRepository {
    pool: PgPool,
}

impl StoreExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ExpenseRow {
    id: i64,
    description: String,
    total_expenses: Decimal,
    budget_id: i64,
    created_at: DateTime<Utc>,
}

impl From<ExpenseRow> for ExpenseRecord {
    fn from(row: ExpenseRow) -> Self {
        ExpenseRecord {
            id: row.id,
            description: row.description,
            total_expenses: row.total_expenses,
            budget_id: BudgetId(row.budget_id),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ExpenseRepository for StoreExpenseRepository {
    async fn insert_expense(
        &self,
        expense: &NewExpense,
    ) -> RepoResult<ExpenseRecord> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            INSERT INTO expenses_total (description, total_expenses, budget_id)
            VALUES ($1, $2, $3)
            RETURNING id, description, total_expenses, budget_id, created_at
            "#,
        )
        .bind(expense.description.as_str())
        .bind(expense.total_expenses)
        .bind(expense.budget_id.0)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_expenses(
        &self,
        window: &ExpenseWindow,
        budget_id: Option<BudgetId>,
    ) -> RepoResult<Vec<ExpenseRecord>> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, description, total_expenses, budget_id, created_at
            FROM expenses_total
            WHERE created_at >= $1
              AND created_at < $2
              AND ($3::BIGINT IS NULL OR budget_id = $3)
            ORDER BY created_at, id
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .bind(budget_id.map(|b| b.0))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ExpenseRecord::from).collect())
    }
}
