//! Basket line records.

use serde::{Deserialize, Serialize};

/// A single line in the user's basket.
///
/// Lines are keyed by product: adding the same product again merges
/// quantities instead of duplicating the line. Basket lines are owned
/// exclusively by the resource store and only created through its
/// [`add_to_basket`](crate::ResourceStore::add_to_basket) operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BasketLine {
    /// The product this line refers to.
    pub product_id: u64,

    /// How many units of the product are in the basket.
    pub quantity: u32,
}

impl BasketLine {
    /// Creates a new basket line.
    #[must_use]
    pub const fn new(product_id: u64, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basket_line_serialization_round_trip() {
        let line = BasketLine::new(42, 3);
        let json = serde_json::to_string(&line).unwrap();
        let restored: BasketLine = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, line);
    }

    #[test]
    fn test_basket_line_deserializes_from_backend_shape() {
        let line: BasketLine =
            serde_json::from_str(r#"{"product_id": 42, "quantity": 2}"#).unwrap();
        assert_eq!(line.product_id, 42);
        assert_eq!(line.quantity, 2);
    }
}
