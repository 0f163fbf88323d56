use async_trait::async_trait;
use pantry_catalog::{CatalogError, Category, Product, ProductFeed};
use sqlx::PgPool;
use uuid::Uuid;

pub struct StoreProductFeed {
    pool: PgPool,
}

impl StoreProductFeed {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price: String,
    image: Option<String>,
}

impl ProductRow {
    fn into_product(self, category: Category) -> Product {
        Product {
            id: self.id,
            category,
            name: self.name,
            price: self.price,
            image: self.image,
        }
    }
}

fn feed_error(e: sqlx::Error) -> CatalogError {
    tracing::error!("Product query failed: {}", e);
    CatalogError::FeedError(e.to_string())
}

#[async_trait]
impl ProductFeed for StoreProductFeed {
    async fn fetch(&self, category: Category) -> Result<Vec<Product>, CatalogError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, image FROM products WHERE category = $1 ORDER BY sort_order, name",
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(feed_error)?;

        Ok(rows.into_iter().map(|row| row.into_product(category)).collect())
    }

    async fn find(&self, category: Category, id: Uuid) -> Result<Option<Product>, CatalogError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, image FROM products WHERE category = $1 AND id = $2",
        )
        .bind(category.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(feed_error)?;

        Ok(row.map(|row| row.into_product(category)))
    }
}
