use std::path::Path;

use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductId};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::json_store::{JsonStore, StoreError};

/// Product collection backed by a single JSON file.
///
/// Every mutation runs under the lock and rewrites the whole file before
/// returning.
pub struct ProductRepositoryJson {
    store: Mutex<JsonStore<ProductEntity>>,
}

impl ProductRepositoryJson {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = JsonStore::open(path).await?;
        Ok(Self {
            store: Mutex::new(store),
        })
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store
            .records()
            .iter()
            .cloned()
            .map(ProductEntity::into_domain)
            .collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let store = self.store.lock().await;
        store
            .records()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map(ProductEntity::into_domain)
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut store = self.store.lock().await;

        if store.records().iter().any(|p| p.code == product.code) {
            return Err(RepositoryError::Duplicated);
        }

        let created = product.into_product(store.next_id());
        let mut records = store.records().to_vec();
        records.push(ProductEntity::from_domain(&created));
        store.persist(records).await.map_err(persistence_error)?;

        Ok(created)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().await;

        let index = store
            .records()
            .iter()
            .position(|p| p.id == product.id)
            .ok_or(RepositoryError::NotFound)?;

        if store
            .records()
            .iter()
            .any(|p| p.code == product.code && p.id != product.id)
        {
            return Err(RepositoryError::Duplicated);
        }

        let mut records = store.records().to_vec();
        records[index] = ProductEntity::from_domain(product);
        store.persist(records).await.map_err(persistence_error)
    }

    async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let mut store = self.store.lock().await;

        let index = store
            .records()
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let mut records = store.records().to_vec();
        let removed = records.remove(index);
        store.persist(records).await.map_err(persistence_error)?;

        Ok(removed.into_domain())
    }
}

fn persistence_error(e: StoreError) -> RepositoryError {
    tracing::error!(error = %e, "Failed to save products");
    RepositoryError::Persistence
}
