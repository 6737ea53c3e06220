use async_trait::async_trait;
use bson::{Document, Uuid};
use futures::TryStreamExt;
use mongodb::{
    Client, Collection as MongoCollection,
    options::{ClientOptions, FindOptions},
};
use std::env;
use tracing::debug;

use wardrobe_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::{CatalogError, CatalogResult},
    filter::Filter,
};

use crate::query::filter_document;

#[derive(Debug)]
pub struct MongoStore {
    client: Client,
    database: String,
}

impl MongoStore {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    pub fn builder(dsn: &str, database: &str) -> MongoStoreBuilder {
        MongoStoreBuilder::new(dsn, database)
    }

    fn get_collection(&self, collection_name: &str) -> MongoCollection<Document> {
        self.client
            .database(&self.database)
            .collection(collection_name)
    }

    async fn shutdown(self) -> CatalogResult<()> {
        self.client.shutdown().await;

        Ok(())
    }
}

#[async_trait]
impl StoreBackend for MongoStore {
    async fn insert_document(
        &self,
        document: Document,
        collection: &str,
    ) -> CatalogResult<Uuid> {
        let id = Uuid::new();

        let mut stored = document;
        stored.insert("_id", id);

        self.get_collection(collection)
            .insert_one(stored)
            .await
            .map_err(|e| CatalogError::Persistence(e.to_string()))?;

        debug!(collection, id = %id, database = %self.database, "inserted document");

        Ok(id)
    }

    async fn find_documents(
        &self,
        filter: Filter,
        limit: Option<usize>,
        collection: &str,
    ) -> CatalogResult<Vec<Document>> {
        let mut options = FindOptions::default();

        if let Some(limit) = limit {
            options.limit = Some(limit as i64);
        }

        Ok(self
            .get_collection(collection)
            .find(filter_document(&filter))
            .with_options(options)
            .await
            .map_err(|e| CatalogError::Persistence(e.to_string()))?
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|e| CatalogError::Persistence(e.to_string()))?)
    }

    async fn collection_names(&self) -> CatalogResult<Vec<String>> {
        Ok(self
            .client
            .database(&self.database)
            .list_collection_names()
            .await
            .map_err(|e| CatalogError::Persistence(e.to_string()))?)
    }

    fn name(&self) -> String {
        self.database.clone()
    }

    async fn shutdown(self) -> CatalogResult<()> {
        self.shutdown().await
    }
}

pub struct MongoStoreBuilder {
    dsn: String,
    database: String,
}

impl MongoStoreBuilder {
    pub fn new(dsn: &str, database: &str) -> Self {
        Self {
            dsn: dsn.to_string(),
            database: database.to_string(),
        }
    }

    /// Reads the connection string and database name from the `DATABASE_URL`
    /// and `DATABASE_NAME` environment variables.
    pub fn from_env() -> CatalogResult<Self> {
        let dsn = env::var("DATABASE_URL")
            .map_err(|_| CatalogError::Initialization("DATABASE_URL is not set".to_string()))?;
        let database = env::var("DATABASE_NAME")
            .map_err(|_| CatalogError::Initialization("DATABASE_NAME is not set".to_string()))?;

        Ok(Self::new(&dsn, &database))
    }
}

#[async_trait]
impl StoreBackendBuilder for MongoStoreBuilder {
    type Backend = MongoStore;

    async fn build(self) -> CatalogResult<Self::Backend> {
        Ok(MongoStore::new(
            Client::with_options(
                ClientOptions::parse(&self.dsn)
                    .await
                    .map_err(|e| CatalogError::Initialization(e.to_string()))?,
            )
            .map_err(|e| CatalogError::Initialization(e.to_string()))?,
            self.database,
        ))
    }
}
