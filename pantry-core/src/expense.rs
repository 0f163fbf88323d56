use chrono::{DateTime, Utc};
use pantry_shared::{BudgetId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stored expense. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: i64,
    pub description: String,
    pub total_expenses: Decimal,
    pub budget_id: BudgetId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub description: String,
    pub total_expenses: Decimal,
    pub budget_id: BudgetId,
}

/// The authenticated caller of a budget-scoped query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner {
    pub user_id: UserId,
    pub budget_id: BudgetId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDetail {
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub description: String,
    pub expenses_details: Vec<ExpenseDetail>,
    pub total_expenses: Decimal,
}

impl ExpenseSummary {
    /// Itemize `records` in the order given and sum their amounts left to right.
    pub fn summarize(description: impl Into<String>, records: &[ExpenseRecord]) -> Self {
        let mut total_expenses = Decimal::ZERO;
        let expenses_details = records
            .iter()
            .map(|record| {
                total_expenses += record.total_expenses;
                ExpenseDetail {
                    description: record.description.clone(),
                    amount: record.total_expenses,
                }
            })
            .collect();

        Self {
            description: description.into(),
            expenses_details,
            total_expenses,
        }
    }
}
