//! Idempotent sample-data seeding.

use tracing::info;

use crate::{
    backend::StoreBackend,
    entity::Entity,
    error::CatalogResult,
    filter::Filter,
    product::Product,
    store::CatalogStore,
};

/// The result of a [`seed`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Whether any entities were inserted.
    pub seeded: bool,
    /// How many entities were inserted.
    pub count: usize,
}

/// Seeds the entity's collection with sample data, once.
///
/// If the collection already contains at least one document, nothing is
/// written and `(seeded: false, count: 0)` is returned. Otherwise every
/// entity is inserted in the given order and `(true, N)` is returned.
///
/// Seeding is not atomic: a failure partway through leaves a partially
/// seeded collection. Two callers racing on the existence check can both
/// observe an empty collection and both insert; callers needing a hard
/// guarantee must enforce uniqueness in the store itself.
///
/// # Errors
///
/// Propagates any store error from the existence check or the inserts.
pub async fn seed<B, E>(store: &CatalogStore<B>, entities: Vec<E>) -> CatalogResult<SeedOutcome>
where
    B: StoreBackend,
    E: Entity,
{
    let existing = store
        .collection(E::collection_name())?
        .find(Filter::new(), Some(1))
        .await?;

    if !existing.is_empty() {
        info!(collection = E::collection_name(), "collection already seeded, skipping");

        return Ok(SeedOutcome { seeded: false, count: 0 });
    }

    let collection = store.typed::<E>()?;

    for entity in &entities {
        collection.create(entity).await?;
    }

    info!(
        collection = E::collection_name(),
        count = entities.len(),
        "seeded collection with sample data"
    );

    Ok(SeedOutcome { seeded: true, count: entities.len() })
}

/// The sample products used to bootstrap an empty catalog.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            title: "Classic Tee".to_string(),
            description: "Premium cotton tee for everyday comfort.".to_string(),
            price: 24.99,
            category: "Tops".to_string(),
            in_stock: true,
            images: vec![
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=800".to_string(),
            ],
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string(), "XL".to_string()],
            featured: true,
        },
        Product {
            title: "Vintage Denim Jacket".to_string(),
            description: "Timeless denim with a relaxed fit.".to_string(),
            price: 79.99,
            category: "Outerwear".to_string(),
            in_stock: true,
            images: vec![
                "https://images.unsplash.com/photo-1520975922284-71b3b4958b59?w=800".to_string(),
            ],
            sizes: vec!["M".to_string(), "L".to_string()],
            featured: true,
        },
        Product {
            title: "Athletic Joggers".to_string(),
            description: "Stretchy, breathable joggers for on-the-go.".to_string(),
            price: 49.99,
            category: "Bottoms".to_string(),
            in_stock: true,
            images: vec![
                "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?w=800".to_string(),
            ],
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
            featured: false,
        },
        Product {
            title: "Summer Dress".to_string(),
            description: "Lightweight flowy dress perfect for sunny days.".to_string(),
            price: 59.99,
            category: "Dresses".to_string(),
            in_stock: true,
            images: vec![
                "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?w=800".to_string(),
            ],
            sizes: vec!["XS".to_string(), "S".to_string(), "M".to_string(), "L".to_string()],
            featured: false,
        },
        Product {
            title: "Hoodie".to_string(),
            description: "Cozy fleece-lined hoodie with minimalist logo.".to_string(),
            price: 54.0,
            category: "Outerwear".to_string(),
            in_stock: true,
            images: vec![
                "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?w=800".to_string(),
            ],
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string(), "XL".to_string()],
            featured: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_products_are_five_valid_entities() {
        let products = sample_products();

        assert_eq!(products.len(), 5);
        assert_eq!(Product::collection_name(), "product");
        assert!(products.iter().all(|p| p.price >= 0.0));
        assert!(products.iter().all(|p| !p.title.trim().is_empty()));
    }

    #[test]
    fn two_sample_products_are_featured() {
        let featured = sample_products()
            .into_iter()
            .filter(|p| p.featured)
            .count();

        assert_eq!(featured, 2);
    }
}
