//! Order schema and validation.

use bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use crate::{
    entity::{self, Entity},
    error::{CatalogError, CatalogResult, Violation},
};

/// A single line item within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Title of the ordered product.
    pub title: String,
    /// Chosen size label.
    pub size: String,
    /// Number of units. Must be one or greater.
    pub quantity: i64,
    /// Price per unit at order time. Must be zero or greater.
    pub unit_price: f64,
}

impl OrderItem {
    fn validate(document: &Document) -> CatalogResult<Self> {
        let title = entity::require_non_empty_str(document, "title")?;
        let size = entity::require_str(document, "size")?;

        let quantity = entity::require_integer(document, "quantity")?;
        if quantity < 1 {
            return Err(CatalogError::validation(
                "quantity",
                Violation::Constraint("must be at least 1"),
            ));
        }

        Ok(Self {
            title,
            size,
            quantity,
            unit_price: entity::require_non_negative_number(document, "unit_price")?,
        })
    }
}

/// A customer order.
///
/// Like [`Product`](crate::product::Product), this is a transient validated
/// value; the store assigns the identifier on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Name of the ordering customer. Must contain non-whitespace text.
    pub customer_name: String,
    /// Contact email address.
    pub email: String,
    /// Ordered line items, in the order they were added. Must not be empty.
    pub items: Vec<OrderItem>,
    /// Order total in the shop currency. Must be zero or greater.
    pub total: f64,
}

impl Entity for Order {
    fn collection_name() -> &'static str {
        "order"
    }

    fn validate(document: &Document) -> CatalogResult<Self> {
        let customer_name = entity::require_non_empty_str(document, "customer_name")?;
        let email = entity::require_non_empty_str(document, "email")?;

        let raw_items = entity::require_array(document, "items")?;
        if raw_items.is_empty() {
            return Err(CatalogError::validation(
                "items",
                Violation::Constraint("must not be empty"),
            ));
        }

        let items = raw_items
            .iter()
            .map(|item| match item {
                Bson::Document(item) => OrderItem::validate(item),
                _ => Err(CatalogError::validation(
                    "items",
                    Violation::Constraint("every element must be a mapping"),
                )),
            })
            .collect::<CatalogResult<Vec<OrderItem>>>()?;

        Ok(Self {
            customer_name,
            email,
            items,
            total: entity::require_non_negative_number(document, "total")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    fn tee_order() -> Document {
        doc! {
            "customer_name": "Ada Lovelace",
            "email": "ada@example.com",
            "items": [
                { "title": "Classic Tee", "size": "M", "quantity": 2, "unit_price": 24.99 },
            ],
            "total": 49.98,
        }
    }

    #[test]
    fn valid_order_validates() {
        let order = Order::validate(&tee_order()).unwrap();

        assert_eq!(order.customer_name, "Ada Lovelace");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.total, 49.98);
    }

    #[test]
    fn empty_items_are_rejected() {
        let mut document = tee_order();
        document.insert("items", Vec::<Bson>::new());

        let err = Order::validate(&document).unwrap_err();
        match err {
            CatalogError::Validation { field, violation } => {
                assert_eq!(field, "items");
                assert_eq!(violation, Violation::Constraint("must not be empty"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut document = tee_order();
        document.insert(
            "items",
            vec![doc! { "title": "Classic Tee", "size": "M", "quantity": 0, "unit_price": 24.99 }],
        );

        let err = Order::validate(&document).unwrap_err();
        match err {
            CatalogError::Validation { field, .. } => assert_eq!(field, "quantity"),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn fractional_quantity_is_a_type_error() {
        let mut document = tee_order();
        document.insert(
            "items",
            vec![doc! { "title": "Classic Tee", "size": "M", "quantity": 1.5, "unit_price": 24.99 }],
        );

        let err = Order::validate(&document).unwrap_err();
        match err {
            CatalogError::Validation { field, violation } => {
                assert_eq!(field, "quantity");
                assert_eq!(violation, Violation::WrongType { expected: "integer" });
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_total_is_reported() {
        let mut document = tee_order();
        document.remove("total");

        let err = Order::validate(&document).unwrap_err();
        match err {
            CatalogError::Validation { field, violation } => {
                assert_eq!(field, "total");
                assert_eq!(violation, Violation::MissingField);
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }
}
