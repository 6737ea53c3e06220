//! Equality matching for in-memory document filtering.

use bson::{Bson, Document, datetime::DateTime};
use std::collections::HashMap;

use wardrobe_core::filter::Filter;

/// Type-erased, equality-comparable representation of BSON values.
///
/// Normalizes all numeric types to f64, so an `Int32` stored value matches
/// a `Double` filter constraint of the same magnitude.
#[derive(Debug)]
enum Comparable<'a> {
    Null,
    Bool(bool),
    Number(f64),
    DateTime(DateTime),
    String(&'a str),
    Array(Vec<Comparable<'a>>),
    Map(HashMap<&'a str, Comparable<'a>>),
}

impl<'a> From<&'a Bson> for Comparable<'a> {
    fn from(bson: &'a Bson) -> Self {
        match bson {
            Bson::Null => Comparable::Null,
            Bson::Boolean(value) => Comparable::Bool(*value),
            Bson::Int32(value) => Comparable::Number(*value as f64),
            Bson::Int64(value) => Comparable::Number(*value as f64),
            Bson::Double(value) => Comparable::Number(*value),
            Bson::DateTime(value) => Comparable::DateTime(*value),
            Bson::String(value) => Comparable::String(value),
            Bson::Array(arr) => Comparable::Array(
                arr.iter()
                    .map(Comparable::from)
                    .collect::<Vec<_>>(),
            ),
            Bson::Document(doc) => Comparable::Map(
                doc.iter()
                    .map(|(k, v)| (k.as_str(), Comparable::from(v)))
                    .collect::<HashMap<_, _>>(),
            ),
            _ => Comparable::Null, // Other types are not comparable
        }
    }
}

impl<'a> PartialEq for Comparable<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparable::Null, Comparable::Null) => true,
            (Comparable::Bool(a), Comparable::Bool(b)) => a == b,
            (Comparable::Number(a), Comparable::Number(b)) => a == b,
            (Comparable::DateTime(a), Comparable::DateTime(b)) => a == b,
            (Comparable::String(a), Comparable::String(b)) => a == b,
            (Comparable::Array(a), Comparable::Array(b)) => a == b,
            (Comparable::Map(a), Comparable::Map(b)) => a == b,
            _ => false,
        }
    }
}

/// Returns `true` if the document satisfies every constraint in the filter.
///
/// A constraint on a field the document lacks never matches. The empty
/// filter matches everything.
pub(crate) fn matches(document: &Document, filter: &Filter) -> bool {
    filter
        .fields()
        .iter()
        .all(|(field, expected)| {
            document
                .get(field)
                .is_some_and(|actual| Comparable::from(actual) == Comparable::from(expected))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn empty_filter_matches_any_document() {
        assert!(matches(&doc! { "category": "Tops" }, &Filter::new()));
        assert!(matches(&doc! {}, &Filter::new()));
    }

    #[test]
    fn equality_is_checked_per_field() {
        let document = doc! { "category": "Tops", "featured": true };

        assert!(matches(&document, &Filter::new().eq("category", "Tops")));
        assert!(!matches(&document, &Filter::new().eq("category", "Bottoms")));
        assert!(matches(
            &document,
            &Filter::new().eq("category", "Tops").eq("featured", true)
        ));
        assert!(!matches(
            &document,
            &Filter::new().eq("category", "Tops").eq("featured", false)
        ));
    }

    #[test]
    fn missing_field_never_matches() {
        assert!(!matches(&doc! { "category": "Tops" }, &Filter::new().eq("featured", true)));
    }

    #[test]
    fn numeric_comparison_widens_integer_types() {
        let document = doc! { "price": Bson::Int32(54) };

        assert!(matches(&document, &Filter::new().eq("price", 54.0)));
        assert!(matches(&document, &Filter::new().eq("price", Bson::Int64(54))));
        assert!(!matches(&document, &Filter::new().eq("price", 54.5)));
    }
}
