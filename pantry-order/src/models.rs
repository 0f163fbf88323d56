use pantry_catalog::Product;
use pantry_shared::Money;
use serde::Serialize;
use std::fmt;

use crate::OrderError;

/// A positive whole number of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(units: u32) -> Result<Self, OrderError> {
        if units == 0 {
            return Err(OrderError::InvalidQuantity(units.to_string()));
        }
        Ok(Self(units))
    }

    /// Parse the quantity typed into the overlay.
    pub fn parse(text: &str) -> Result<Self, OrderError> {
        let units = text
            .trim()
            .parse::<u32>()
            .map_err(|_| OrderError::InvalidQuantity(text.to_string()))?;
        Self::new(units).map_err(|_| OrderError::InvalidQuantity(text.to_string()))
    }

    pub fn units(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One confirmed product selection with its price worked out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product: Product,
    pub quantity: Quantity,
    pub unit_price: Money,
    pub total: Money,
}

impl OrderLine {
    pub fn new(product: Product, quantity: Quantity) -> Result<Self, OrderError> {
        let unit_price = product.unit_price()?;
        let total = unit_price
            .times(quantity.units())
            .ok_or_else(|| OrderError::TotalOverflow(product.name.clone()))?;

        Ok(Self {
            product,
            quantity,
            unit_price,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_catalog::Category;
    use uuid::Uuid;

    fn carrot(price: &str) -> Product {
        Product {
            id: Uuid::new_v4(),
            category: Category::Vegetables,
            name: "Carrot".to_string(),
            price: price.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_quantity_parse() {
        assert_eq!(Quantity::parse(" 3 ").unwrap().units(), 3);
        assert!(matches!(Quantity::parse(""), Err(OrderError::InvalidQuantity(_))));
        assert!(matches!(Quantity::parse("0"), Err(OrderError::InvalidQuantity(_))));
        assert!(matches!(Quantity::parse("-2"), Err(OrderError::InvalidQuantity(_))));
        assert!(matches!(Quantity::parse("1.5"), Err(OrderError::InvalidQuantity(_))));
    }

    #[test]
    fn test_line_total() {
        let line = OrderLine::new(carrot("Rs. 120.50"), Quantity::new(4).unwrap()).unwrap();
        assert_eq!(line.unit_price, Money::from_minor(12050));
        assert_eq!(line.total, Money::from_minor(48200));
        assert_eq!(line.total.to_string(), "482.00");
    }

    #[test]
    fn test_line_rejects_unpriced_product() {
        let result = OrderLine::new(carrot("ask at counter"), Quantity::new(1).unwrap());
        assert!(matches!(result, Err(OrderError::InvalidPrice(_))));
    }

    #[test]
    fn test_line_overflow() {
        let result = OrderLine::new(carrot("9223372036854775807"), Quantity::new(2).unwrap());
        assert!(matches!(result, Err(OrderError::TotalOverflow(_))));
    }
}
