use async_trait::async_trait;
use pantry_shared::{Money, PriceError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Product categories with a confirmation flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetables,
    Meat,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Vegetables, Category::Meat];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetables => "vegetables",
            Category::Meat => "meat",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vegetables" => Ok(Category::Vegetables),
            "meat" => Ok(Category::Meat),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

/// A product as listed in the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub category: Category,
    pub name: String,
    /// Display price, e.g. `"Rs. 250.00"`.
    pub price: String,
    pub image: Option<String>,
}

impl Product {
    pub fn unit_price(&self) -> Result<Money, PriceError> {
        Money::parse_price(&self.price)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Product feed failed: {0}")]
    FeedError(String),
}

/// Source of a category's full, unpaginated product list.
#[async_trait]
pub trait ProductFeed: Send + Sync {
    async fn fetch(&self, category: Category) -> Result<Vec<Product>, CatalogError>;

    async fn find(&self, category: Category, id: Uuid) -> Result<Option<Product>, CatalogError> {
        Ok(self.fetch(category).await?.into_iter().find(|p| p.id == id))
    }
}
