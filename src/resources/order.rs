//! Order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed but not yet confirmed.
    #[default]
    Pending,
    /// Confirmed by the seller.
    Confirmed,
    /// Handed to the carrier.
    Shipped,
    /// Delivered to the customer.
    Delivered,
    /// Cancelled before fulfillment.
    Cancelled,
}

/// An order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// The unique identifier of the order.
    pub id: u64,

    /// Human-facing order number.
    pub order_number: String,

    /// Total amount charged for the order.
    pub total_amount: f64,

    /// Current lifecycle status.
    #[serde(default)]
    pub status: OrderStatus,

    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes_from_backend_shape() {
        let json = r#"{
            "id": 301,
            "order_number": "ORD-000301",
            "total_amount": 149.5,
            "status": "shipped",
            "created_at": "2026-07-01T12:30:00Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 301);
        assert_eq!(order.order_number, "ORD-000301");
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_order_status_defaults_to_pending() {
        let json = r#"{
            "id": 302,
            "order_number": "ORD-000302",
            "total_amount": 10.0,
            "created_at": "2026-07-02T09:00:00Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_order_status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, r#""delivered""#);
    }
}
