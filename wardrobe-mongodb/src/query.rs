//! Filter translation to MongoDB query documents.
//!
//! An equality filter maps one-to-one onto MongoDB's implicit-equality
//! query form: `{ field: value, ... }`.

use bson::Document;

use wardrobe_core::filter::Filter;

/// Translates an equality [`Filter`] into a MongoDB filter document.
pub(crate) fn filter_document(filter: &Filter) -> Document {
    Document::from_iter(
        filter
            .fields()
            .iter()
            .map(|(field, value)| (field.clone(), value.clone())),
    )
}
