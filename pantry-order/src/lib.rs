pub mod confirm;
pub mod models;

pub use confirm::{
    confirm_order, handler_for, handler_named, ConfirmHandler, MeatHandler, VegetablesHandler,
};
pub use models::{OrderLine, Quantity};

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] pantry_shared::PriceError),

    #[error("Order total overflows for {0}")]
    TotalOverflow(String),

    #[error(transparent)]
    Catalog(#[from] pantry_catalog::CatalogError),

    #[error(transparent)]
    Expense(#[from] pantry_core::CoreError),
}
