//! Product schema and validation.

use bson::Document;
use serde::{Deserialize, Serialize};

use crate::{
    entity::{self, Entity},
    error::CatalogResult,
};

/// A catalog product.
///
/// This is the validated value object accepted from and returned to callers.
/// The storage identifier is not part of it: the store assigns one on create,
/// and the typed query path strips it before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display title. Must contain non-whitespace text.
    pub title: String,
    /// Free-form description. May be empty.
    pub description: String,
    /// Price in the shop currency. Must be zero or greater.
    pub price: f64,
    /// Category label, used as an equality filter key.
    pub category: String,
    /// Whether the product is currently purchasable.
    pub in_stock: bool,
    /// Image URLs, in display order.
    pub images: Vec<String>,
    /// Offered size labels, in display order.
    pub sizes: Vec<String>,
    /// Whether the product is featured, used as an equality filter key.
    pub featured: bool,
}

impl Entity for Product {
    fn collection_name() -> &'static str {
        "product"
    }

    fn validate(document: &Document) -> CatalogResult<Self> {
        Ok(Self {
            title: entity::require_non_empty_str(document, "title")?,
            description: entity::require_str(document, "description")?,
            price: entity::require_non_negative_number(document, "price")?,
            category: entity::require_str(document, "category")?,
            in_stock: entity::require_bool(document, "in_stock")?,
            images: entity::require_str_array(document, "images")?,
            sizes: entity::require_str_array(document, "sizes")?,
            featured: entity::require_bool(document, "featured")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogError, Violation};
    use bson::{Bson, doc};

    fn tee_document() -> Document {
        doc! {
            "title": "Classic Tee",
            "description": "Premium cotton tee for everyday comfort.",
            "price": 24.99,
            "category": "Tops",
            "in_stock": true,
            "images": ["https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=800"],
            "sizes": ["S", "M", "L", "XL"],
            "featured": true,
        }
    }

    #[test]
    fn valid_document_validates_with_fields_intact() {
        let product = Product::validate(&tee_document()).unwrap();

        assert_eq!(product.title, "Classic Tee");
        assert_eq!(product.price, 24.99);
        assert_eq!(product.category, "Tops");
        assert!(product.in_stock);
        assert_eq!(product.sizes, vec!["S", "M", "L", "XL"]);
        assert!(product.featured);
    }

    #[test]
    fn missing_title_is_reported_on_that_field() {
        let mut document = tee_document();
        document.remove("title");

        let err = Product::validate(&document).unwrap_err();
        match err {
            CatalogError::Validation { field, violation } => {
                assert_eq!(field, "title");
                assert_eq!(violation, Violation::MissingField);
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let mut document = tee_document();
        document.insert("title", "   ");

        let err = Product::validate(&document).unwrap_err();
        match err {
            CatalogError::Validation { field, violation } => {
                assert_eq!(field, "title");
                assert_eq!(violation, Violation::Constraint("must not be empty"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut document = tee_document();
        document.insert("price", -1.0);

        let err = Product::validate(&document).unwrap_err();
        match err {
            CatalogError::Validation { field, violation } => {
                assert_eq!(field, "price");
                assert_eq!(violation, Violation::Constraint("must not be negative"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn integer_price_widens_to_f64() {
        let mut document = tee_document();
        document.insert("price", Bson::Int32(25));
        assert_eq!(Product::validate(&document).unwrap().price, 25.0);

        document.insert("price", Bson::Int64(54));
        assert_eq!(Product::validate(&document).unwrap().price, 54.0);
    }

    #[test]
    fn numeric_string_price_is_a_type_error() {
        let mut document = tee_document();
        document.insert("price", "24.99");

        let err = Product::validate(&document).unwrap_err();
        match err {
            CatalogError::Validation { field, violation } => {
                assert_eq!(field, "price");
                assert_eq!(violation, Violation::WrongType { expected: "number" });
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn non_string_image_element_is_rejected() {
        let mut document = tee_document();
        document.insert("images", vec![Bson::Int32(1)]);

        let err = Product::validate(&document).unwrap_err();
        match err {
            CatalogError::Validation { field, .. } => assert_eq!(field, "images"),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut document = tee_document();
        document.insert("warehouse_row", 14);

        assert!(Product::validate(&document).is_ok());
    }

    #[test]
    fn first_failing_field_follows_declaration_order() {
        let mut document = tee_document();
        document.remove("title");
        document.remove("price");

        // Both fields are invalid; title is declared first.
        let err = Product::validate(&document).unwrap_err();
        match err {
            CatalogError::Validation { field, .. } => assert_eq!(field, "title"),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }
}
