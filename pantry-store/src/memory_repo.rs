use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pantry_catalog::{CatalogError, Category, Product, ProductFeed};
use pantry_core::{Clock, ExpenseRecord, ExpenseRepository, ExpenseWindow, NewExpense, RepoResult};
use pantry_shared::BudgetId;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::StoreError;

/// Process-local expense table. Rows are kept in insertion order.
pub struct InMemoryExpenseRepository {
    clock: Arc<dyn Clock>,
    rows: RwLock<Vec<ExpenseRecord>>,
}

impl InMemoryExpenseRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Insert with an explicit creation time, for backfills and tests.
    pub async fn insert_at(
        &self,
        expense: &NewExpense,
        created_at: DateTime<Utc>,
    ) -> ExpenseRecord {
        let mut rows = self.rows.write().await;
        let record = ExpenseRecord {
            id: rows.len() as i64 + 1,
            description: expense.description.clone(),
            total_expenses: expense.total_expenses,
            budget_id: expense.budget_id,
            created_at,
        };
        rows.push(record.clone());
        record
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn insert_expense(
        &self,
        expense: &NewExpense,
    ) -> RepoResult<ExpenseRecord> {
        Ok(self.insert_at(expense, self.clock.now()).await)
    }

    async fn find_expenses(
        &self,
        window: &ExpenseWindow,
        budget_id: Option<BudgetId>,
    ) -> RepoResult<Vec<ExpenseRecord>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|r| window.contains(r.created_at))
            .filter(|r| budget_id.map_or(true, |b| r.budget_id == b))
            .cloned()
            .collect())
    }
}

/// Fixed product lists held in memory.
#[derive(Default)]
pub struct InMemoryProductFeed {
    products: HashMap<Category, Vec<Product>>,
}

impl InMemoryProductFeed {
    pub fn new(products: Vec<Product>) -> Self {
        let mut by_category: HashMap<Category, Vec<Product>> = HashMap::new();
        for product in products {
            by_category.entry(product.category).or_default().push(product);
        }
        Self { products: by_category }
    }

    /// Load a JSON array of products.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: shown.clone(),
            source,
        })?;
        let products: Vec<Product> = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: shown.clone(),
            source,
        })?;

        info!("Loaded {} products from {}", products.len(), shown);
        Ok(Self::new(products))
    }
}

#[async_trait]
impl ProductFeed for InMemoryProductFeed {
    async fn fetch(&self, category: Category) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.get(&category).cloned().unwrap_or_default())
    }
}
