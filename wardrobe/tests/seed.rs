//! Seed policy behavior against the in-memory backend.

use wardrobe::{memory::MemoryStore, prelude::*};

#[tokio::test]
async fn seeding_an_empty_catalog_inserts_the_five_samples() {
    let store = CatalogStore::connect(MemoryStore::new());

    let outcome = seed(&store, sample_products()).await.unwrap();

    assert_eq!(outcome, SeedOutcome { seeded: true, count: 5 });

    let products = store
        .typed::<Product>()
        .unwrap()
        .find(Filter::new(), None)
        .await
        .unwrap();
    assert_eq!(products.len(), 5);
    assert_eq!(products[0].title, "Classic Tee");
}

#[tokio::test]
async fn seeding_again_is_a_no_op() {
    let store = CatalogStore::connect(MemoryStore::new());

    let first = seed(&store, sample_products()).await.unwrap();
    let second = seed(&store, sample_products()).await.unwrap();

    assert_eq!(first, SeedOutcome { seeded: true, count: 5 });
    assert_eq!(second, SeedOutcome { seeded: false, count: 0 });

    let count = store
        .typed::<Product>()
        .unwrap()
        .find(Filter::new(), None)
        .await
        .unwrap()
        .len();
    assert_eq!(count, 5);
}

#[tokio::test]
async fn a_single_existing_product_suppresses_seeding() {
    let store = CatalogStore::connect(MemoryStore::new());

    let existing = Product {
        title: "Hand-made Scarf".to_string(),
        description: String::new(),
        price: 19.0,
        category: "Accessories".to_string(),
        in_stock: true,
        images: vec![],
        sizes: vec![],
        featured: false,
    };
    store
        .typed::<Product>()
        .unwrap()
        .create(&existing)
        .await
        .unwrap();

    let outcome = seed(&store, sample_products()).await.unwrap();

    assert_eq!(outcome, SeedOutcome { seeded: false, count: 0 });

    let products = store
        .typed::<Product>()
        .unwrap()
        .find(Filter::new(), None)
        .await
        .unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Hand-made Scarf");
}

#[tokio::test]
async fn seeded_samples_answer_the_listing_filters() {
    let store = CatalogStore::connect(MemoryStore::new());
    seed(&store, sample_products()).await.unwrap();
    let products = store.typed::<Product>().unwrap();

    let outerwear = products
        .find(Filter::new().eq("category", "Outerwear"), None)
        .await
        .unwrap();
    assert_eq!(outerwear.len(), 2);

    let featured = products
        .find(Filter::new().eq("featured", true), None)
        .await
        .unwrap();
    assert_eq!(featured.len(), 2);

    let featured_outerwear = products
        .find(
            Filter::new()
                .eq("category", "Outerwear")
                .eq("featured", true),
            None,
        )
        .await
        .unwrap();
    assert_eq!(featured_outerwear.len(), 1);
    assert_eq!(featured_outerwear[0].title, "Vintage Denim Jacket");
}

#[tokio::test]
async fn seeding_on_a_disconnected_store_fails_without_writing() {
    let store = CatalogStore::<MemoryStore>::disconnected();

    let err = seed(&store, sample_products()).await.unwrap_err();
    assert!(matches!(err, CatalogError::StoreUnavailable));
}
