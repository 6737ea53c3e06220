//! Equality filter construction for catalog queries.
//!
//! Listing endpoints take optional parameters (a category, a featured flag)
//! and need a predicate containing only the parameters that were actually
//! supplied. [`Filter`] models exactly that: an ordered set of field
//! equality constraints, nothing more. There are no ranges, no partial
//! matches, and no boolean combinators.
//!
//! # Example
//!
//! ```ignore
//! use wardrobe::prelude::*;
//!
//! let filter = Filter::new()
//!     .maybe_eq("category", Some("Tops"))
//!     .maybe_eq("featured", None::<bool>);
//!
//! assert_eq!(filter.len(), 1);
//! ```

use bson::Bson;

/// An equality-only query predicate over document fields.
///
/// A document matches when every listed field equals its constraint value.
/// The empty filter matches every document. Construction is deterministic:
/// the same calls in the same order produce the same filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: Vec<(String, Bson)>,
}

impl Filter {
    /// Creates an empty filter, which matches every document.
    pub fn new() -> Self {
        Filter { fields: Vec::new() }
    }

    /// Adds an equality constraint on a field.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    /// Adds an equality constraint only if the value is present.
    ///
    /// This is the optional-request-parameter form: an absent parameter
    /// contributes nothing to the filter.
    pub fn maybe_eq<V: Into<Bson>>(self, field: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.eq(field, value),
            None => self,
        }
    }

    /// Returns `true` if this filter has no constraints.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of constraints.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the constraints in construction order.
    pub fn fields(&self) -> &[(String, Bson)] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_has_no_constraints() {
        let filter = Filter::new();

        assert!(filter.is_empty());
        assert_eq!(filter.len(), 0);
    }

    #[test]
    fn eq_records_constraints_in_order() {
        let filter = Filter::new()
            .eq("category", "Tops")
            .eq("featured", true);

        assert_eq!(filter.len(), 2);
        assert_eq!(
            filter.fields()[0],
            ("category".to_string(), Bson::String("Tops".to_string()))
        );
        assert_eq!(
            filter.fields()[1],
            ("featured".to_string(), Bson::Boolean(true))
        );
    }

    #[test]
    fn maybe_eq_skips_absent_parameters() {
        let filter = Filter::new()
            .maybe_eq("category", None::<&str>)
            .maybe_eq("featured", Some(false));

        assert_eq!(filter.len(), 1);
        assert_eq!(
            filter.fields()[0],
            ("featured".to_string(), Bson::Boolean(false))
        );
    }

    #[test]
    fn identical_inputs_build_identical_filters() {
        let build = || {
            Filter::new()
                .maybe_eq("category", Some("Outerwear"))
                .maybe_eq("featured", Some(true))
        };

        assert_eq!(build(), build());
    }
}
