pub mod ids;
pub mod money;

pub use ids::{BudgetId, UserId};
pub use money::{Money, PriceError};
