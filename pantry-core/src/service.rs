use std::sync::Arc;

use pantry_shared::BudgetId;
use rust_decimal::Decimal;
use tracing::{debug, error, info};

use crate::clock::Clock;
use crate::expense::{ExpenseRecord, ExpenseSummary, NewExpense, Owner};
use crate::repository::ExpenseRepository;
use crate::window::ExpenseWindow;
use crate::{CoreError, CoreResult};

pub const DEFAULT_RANGE_DAYS: u32 = 10;

/// Amounts are stored as `NUMERIC(12, 2)`.
pub const AMOUNT_SCALE: u32 = 2;

/// Records expenses and totals them over time windows.
#[derive(Clone)]
pub struct ExpenseService {
    repo: Arc<dyn ExpenseRepository>,
    clock: Arc<dyn Clock>,
    range_days: u32,
}

impl ExpenseService {
    pub fn new(repo: Arc<dyn ExpenseRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            clock,
            range_days: DEFAULT_RANGE_DAYS,
        }
    }

    pub fn with_range_days(mut self, days: u32) -> Self {
        self.range_days = days;
        self
    }

    pub fn range_days(&self) -> u32 {
        self.range_days
    }

    pub async fn create_expense(
        &self,
        description: String,
        total_expenses: Decimal,
        budget_id: BudgetId,
    ) -> CoreResult<ExpenseRecord> {
        self.create(NewExpense {
            description,
            total_expenses,
            budget_id,
        })
        .await
    }

    pub async fn create(&self, expense: NewExpense) -> CoreResult<ExpenseRecord> {
        debug!(
            description = %expense.description,
            amount = %expense.total_expenses,
            budget_id = %expense.budget_id,
            "Creating expense"
        );

        if expense.total_expenses < Decimal::ZERO {
            return Err(CoreError::ValidationError(format!(
                "totalExpenses must not be negative, got {}",
                expense.total_expenses
            )));
        }
        if expense.total_expenses.normalize().scale() > AMOUNT_SCALE {
            return Err(CoreError::ValidationError(format!(
                "totalExpenses must have at most {} decimal places, got {}",
                AMOUNT_SCALE, expense.total_expenses
            )));
        }

        let record = self.repo.insert_expense(&expense).await.map_err(|e| {
            error!("Failed to create expense: {}", e);
            CoreError::CreationError(e.to_string())
        })?;

        info!("Created expense {} for budget {}", record.id, record.budget_id);
        Ok(record)
    }

    /// Expenses created during the day that starts at `date`.
    pub async fn expenses_for_date(&self, date: &str) -> CoreResult<ExpenseSummary> {
        let window = ExpenseWindow::for_date(date)?;
        let records = self.query(&window, None).await?;

        Ok(ExpenseSummary::summarize(format!("Expenses for {}", date), &records))
    }

    /// Expenses for the owner's budget over the trailing `range_days` days.
    pub async fn expenses_for_recent_days(&self, owner: &Owner) -> CoreResult<ExpenseSummary> {
        let window = ExpenseWindow::trailing_days(self.clock.now(), self.range_days)
            .ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "a range of {} days is out of bounds",
                    self.range_days
                ))
            })?;
        debug!(
            user_id = %owner.user_id,
            budget_id = %owner.budget_id,
            start = %window.start,
            end = %window.end,
            "Querying recent expenses"
        );

        let records = self.query(&window, Some(owner.budget_id)).await?;

        Ok(ExpenseSummary::summarize(
            format!("Expenses for the last {} days", self.range_days),
            &records,
        ))
    }

    async fn query(
        &self,
        window: &ExpenseWindow,
        budget_id: Option<BudgetId>,
    ) -> CoreResult<Vec<ExpenseRecord>> {
        self.repo.find_expenses(window, budget_id).await.map_err(|e| {
            error!("Expense query failed: {}", e);
            CoreError::QueryError(e.to_string())
        })
    }
}
