use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned item identifier. The first assigned id is 1.
pub type ItemId = i64;

/// Item payload as supplied by clients on create and update.
///
/// `name`, `price` and `quantity` are required. No bounds are enforced:
/// empty names, negative prices and negative quantities are all accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "Sample Item",
    "description": "A description",
    "price": 10.5,
    "quantity": 2
}))]
pub struct Item {
    /// Item name
    pub name: String,
    /// Optional free-form description; `null` when absent
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price, any JSON number
    pub price: f64,
    /// Quantity, must be a JSON integer
    pub quantity: i64,
}

/// An [`Item`] together with its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredItem {
    /// Unique identifier, never reused
    pub id: ItemId,
    #[serde(flatten)]
    pub item: Item,
}

impl StoredItem {
    pub fn new(id: ItemId, item: Item) -> Self {
        Self { id, item }
    }
}

/// Body returned after a successful delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "message": "Item 1 deleted successfully" }))]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn for_item(id: ItemId) -> Self {
        Self {
            message: format!("Item {} deleted successfully", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_description_defaults_to_none() {
        let item: Item =
            serde_json::from_value(json!({ "name": "x", "price": 1.0, "quantity": 1 })).unwrap();
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_integer_price_is_accepted() {
        let item: Item =
            serde_json::from_value(json!({ "name": "x", "price": 3, "quantity": 1 })).unwrap();
        assert_eq!(item.price, 3.0);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let item: Item =
            serde_json::from_value(json!({ "name": "", "price": -2.5, "quantity": -7 })).unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.price, -2.5);
        assert_eq!(item.quantity, -7);
    }

    #[test]
    fn test_fractional_quantity_is_rejected() {
        let result: Result<Item, _> =
            serde_json::from_value(json!({ "name": "x", "price": 1.0, "quantity": 1.5 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_fields_are_rejected() {
        for body in [
            json!({ "price": 1.0, "quantity": 1 }),
            json!({ "name": "x", "quantity": 1 }),
            json!({ "name": "x", "price": 1.0 }),
            json!({ "name": 5, "price": 1.0, "quantity": 1 }),
        ] {
            assert!(serde_json::from_value::<Item>(body).is_err());
        }
    }

    #[test]
    fn test_stored_item_shape() {
        let stored = StoredItem::new(
            7,
            Item {
                name: "Test Item".to_string(),
                description: None,
                price: 10.5,
                quantity: 5,
            },
        );
        assert_eq!(
            serde_json::to_value(&stored).unwrap(),
            json!({
                "id": 7,
                "name": "Test Item",
                "description": null,
                "price": 10.5,
                "quantity": 5
            })
        );
    }

    #[test]
    fn test_delete_response_message() {
        assert_eq!(
            DeleteResponse::for_item(3).message,
            "Item 3 deleted successfully"
        );
    }
}
