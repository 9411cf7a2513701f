//! Catalog product records and fetch filters.

use serde::{Deserialize, Serialize};

/// A catalog product as returned by the backend.
///
/// # Example
///
/// ```rust
/// use accountrix_client::resources::Product;
///
/// let product = Product {
///     id: 1,
///     name: "Chair".to_string(),
///     unit_price: 49.0,
///     stock_quantity: 12,
///     ..Default::default()
/// };
///
/// assert!(product.in_stock());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The unique identifier of the product.
    pub id: u64,

    /// The product name.
    pub name: String,

    /// The product description.
    #[serde(default)]
    pub description: String,

    /// Stock keeping unit.
    #[serde(default)]
    pub sku: String,

    /// Unit price in the backend's currency.
    #[serde(default)]
    pub unit_price: f64,

    /// Units currently in stock.
    #[serde(default)]
    pub stock_quantity: u32,

    /// The category this product belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,

    /// The manufacturer name, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}

impl Product {
    /// Returns `true` if the product has stock available.
    ///
    /// Stock is advisory at the client layer: the backend remains the
    /// authority at mutation time.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

/// Filter applied to a catalog fetch.
///
/// Maps to the backend's `search` and `category` query parameters.
///
/// # Example
///
/// ```rust
/// use accountrix_client::resources::ProductFilter;
///
/// let filter = ProductFilter::new().search("chair").category(7);
/// assert_eq!(filter.search.as_deref(), Some("chair"));
/// assert_eq!(filter.category, Some(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Free-text search over product names.
    pub search: Option<String>,
    /// Restrict results to a category.
    pub category: Option<u64>,
}

impl ProductFilter {
    /// Creates an empty filter (fetches the full catalog).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restricts results to a category.
    #[must_use]
    pub const fn category(mut self, category: u64) -> Self {
        self.category = Some(category);
        self
    }

    /// Renders the filter as query parameters, in a stable order.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            params.push(("search".to_string(), search.clone()));
        }
        if let Some(category) = self.category {
            params.push(("category".to_string(), category.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_from_backend_shape() {
        let json = r#"{
            "id": 1,
            "name": "Chair",
            "description": "A sturdy chair",
            "sku": "CH-001",
            "unit_price": 49.0,
            "stock_quantity": 12,
            "category": 7,
            "manufacturer": "Acme"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Chair");
        assert_eq!(product.category, Some(7));
        assert!(product.in_stock());
    }

    #[test]
    fn test_product_tolerates_sparse_records() {
        let product: Product = serde_json::from_str(r#"{"id": 2, "name": "Desk"}"#).unwrap();
        assert_eq!(product.stock_quantity, 0);
        assert!(!product.in_stock());
        assert!(product.category.is_none());
    }

    #[test]
    fn test_filter_to_query_includes_only_set_fields() {
        assert!(ProductFilter::new().to_query().is_empty());

        let query = ProductFilter::new().search("chair").to_query();
        assert_eq!(query, vec![("search".to_string(), "chair".to_string())]);

        let query = ProductFilter::new().search("chair").category(7).to_query();
        assert_eq!(
            query,
            vec![
                ("search".to_string(), "chair".to_string()),
                ("category".to_string(), "7".to_string()),
            ]
        );
    }
}
