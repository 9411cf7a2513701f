//! Product category records.

use serde::{Deserialize, Serialize};

/// A product category as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    /// The unique identifier of the category.
    pub id: u64,

    /// The category name.
    pub name: String,

    /// The category description.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserializes_from_backend_shape() {
        let json = r#"{"id": 7, "name": "Furniture", "description": "Desks and chairs"}"#;
        let category: Category = serde_json::from_str(json).unwrap();

        assert_eq!(category.id, 7);
        assert_eq!(category.name, "Furniture");
    }

    #[test]
    fn test_category_tolerates_missing_description() {
        let category: Category =
            serde_json::from_str(r#"{"id": 8, "name": "Lighting"}"#).unwrap();
        assert!(category.description.is_empty());
    }
}
