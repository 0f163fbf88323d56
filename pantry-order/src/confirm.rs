use pantry_catalog::{CatalogError, Category, Product};
use pantry_core::{ExpenseRecord, ExpenseService, NewExpense};
use pantry_shared::BudgetId;
use tracing::info;

use crate::models::{OrderLine, Quantity};
use crate::OrderError;

/// Turns a confirmed order line into the expense it records.
pub trait ConfirmHandler: Send + Sync {
    fn category(&self) -> Category;

    fn describe(&self, line: &OrderLine) -> String;

    fn to_expense(&self, line: &OrderLine, budget_id: BudgetId) -> NewExpense {
        NewExpense {
            description: self.describe(line),
            total_expenses: line.total.to_decimal(),
            budget_id,
        }
    }
}

pub struct VegetablesHandler;

impl ConfirmHandler for VegetablesHandler {
    fn category(&self) -> Category {
        Category::Vegetables
    }

    fn describe(&self, line: &OrderLine) -> String {
        format!("Vegetables: {} x {}", line.product.name, line.quantity)
    }
}

pub struct MeatHandler;

impl ConfirmHandler for MeatHandler {
    fn category(&self) -> Category {
        Category::Meat
    }

    fn describe(&self, line: &OrderLine) -> String {
        format!("Meat: {} x {}", line.product.name, line.quantity)
    }
}

static VEGETABLES: VegetablesHandler = VegetablesHandler;
static MEAT: MeatHandler = MeatHandler;

pub fn handler_for(category: Category) -> &'static dyn ConfirmHandler {
    match category {
        Category::Vegetables => &VEGETABLES,
        Category::Meat => &MEAT,
    }
}

/// Resolve a handler from a category name.
pub fn handler_named(name: &str) -> Result<&'static dyn ConfirmHandler, CatalogError> {
    Ok(handler_for(name.parse()?))
}

/// Price `product` at the typed quantity and record it against `budget_id`.
pub async fn confirm_order(
    service: &ExpenseService,
    product: Product,
    quantity: &str,
    budget_id: BudgetId,
) -> Result<(OrderLine, ExpenseRecord), OrderError> {
    let quantity = Quantity::parse(quantity)?;
    let handler = handler_for(product.category);
    let line = OrderLine::new(product, quantity)?;

    let expense = service.create(handler.to_expense(&line, budget_id)).await?;
    info!(
        "Confirmed {} x {} ({}) as expense {}",
        line.quantity, line.product.name, line.total, expense.id
    );

    Ok((line, expense))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use pantry_core::{ExpenseRepository, ExpenseWindow, FixedClock, RepoResult};
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingRepo {
        rows: Mutex<Vec<ExpenseRecord>>,
    }

    #[async_trait]
    impl ExpenseRepository for RecordingRepo {
        async fn insert_expense(&self, expense: &NewExpense) -> RepoResult<ExpenseRecord> {
            let mut rows = self.rows.lock().unwrap();
            let record = ExpenseRecord {
                id: rows.len() as i64 + 1,
                description: expense.description.clone(),
                total_expenses: expense.total_expenses,
                budget_id: expense.budget_id,
                created_at: Utc.with_ymd_and_hms(2024, 8, 1, 10, 0, 0).unwrap(),
            };
            rows.push(record.clone());
            Ok(record)
        }

        async fn find_expenses(
            &self,
            _window: &ExpenseWindow,
            _budget_id: Option<BudgetId>,
        ) -> RepoResult<Vec<ExpenseRecord>> {
            Ok(self.rows.lock().unwrap().clone())
        }
    }

    fn product(category: Category, name: &str, price: &str) -> Product {
        Product {
            id: Uuid::new_v4(),
            category,
            name: name.to_string(),
            price: price.to_string(),
            image: None,
        }
    }

    fn service(repo: Arc<RecordingRepo>) -> ExpenseService {
        let now = Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap();
        ExpenseService::new(repo, Arc::new(FixedClock(now)))
    }

    #[test]
    fn test_named_handlers_are_distinct() {
        let veg = handler_named("vegetables").unwrap();
        let meat = handler_named("meat").unwrap();

        assert_eq!(veg.category(), Category::Vegetables);
        assert_eq!(meat.category(), Category::Meat);

        let mutton = product(Category::Meat, "Mutton", "Rs. 10.00");
        let line = OrderLine::new(mutton, Quantity::new(1).unwrap()).unwrap();
        assert_ne!(veg.describe(&line), meat.describe(&line));
    }

    #[test]
    fn test_unknown_category_fails() {
        let result = handler_named("fruit");
        assert!(matches!(result, Err(CatalogError::UnknownCategory(ref c)) if c == "fruit"));
    }

    #[test]
    fn test_handler_for_matches_category() {
        for category in Category::ALL {
            assert_eq!(handler_for(category).category(), category);
        }
    }

    #[tokio::test]
    async fn test_confirm_records_expense() {
        let repo = Arc::new(RecordingRepo::default());
        let service = service(repo.clone());

        let (line, expense) = confirm_order(
            &service,
            product(Category::Vegetables, "Carrot", "Rs. 120.50"),
            "3",
            BudgetId(9),
        )
        .await
        .unwrap();

        assert_eq!(line.total.minor(), 36150);
        assert_eq!(expense.description, "Vegetables: Carrot x 3");
        assert_eq!(expense.total_expenses, Decimal::new(36150, 2));
        assert_eq!(expense.budget_id, BudgetId(9));
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_confirm_rejects_bad_quantity_before_writing() {
        let repo = Arc::new(RecordingRepo::default());
        let service = service(repo.clone());

        let result = confirm_order(
            &service,
            product(Category::Meat, "Chicken", "Rs. 900.00"),
            "two",
            BudgetId(1),
        )
        .await;

        assert!(matches!(result, Err(OrderError::InvalidQuantity(_))));
        assert!(repo.rows.lock().unwrap().is_empty());
    }
}
