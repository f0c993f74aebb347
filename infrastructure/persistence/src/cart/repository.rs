use std::path::Path;

use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::cart::model::{Cart, CartId};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartEntity;
use crate::json_store::{JsonStore, StoreError};

/// Cart collection backed by a single JSON file.
pub struct CartRepositoryJson {
    store: Mutex<JsonStore<CartEntity>>,
}

impl CartRepositoryJson {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = JsonStore::open(path).await?;
        Ok(Self {
            store: Mutex::new(store),
        })
    }
}

#[async_trait]
impl CartRepository for CartRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store
            .records()
            .iter()
            .cloned()
            .map(CartEntity::into_domain)
            .collect())
    }

    async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError> {
        let store = self.store.lock().await;
        store
            .records()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .map(CartEntity::into_domain)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self) -> Result<Cart, RepositoryError> {
        let mut store = self.store.lock().await;

        let cart = Cart::new(store.next_id());
        let mut records = store.records().to_vec();
        records.push(CartEntity::from_domain(&cart));
        store.persist(records).await.map_err(persistence_error)?;

        Ok(cart)
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().await;

        let index = store
            .records()
            .iter()
            .position(|c| c.id == cart.id)
            .ok_or(RepositoryError::NotFound)?;

        let mut records = store.records().to_vec();
        records[index] = CartEntity::from_domain(cart);
        store.persist(records).await.map_err(persistence_error)
    }

    async fn delete(&self, id: CartId) -> Result<Cart, RepositoryError> {
        let mut store = self.store.lock().await;

        let index = store
            .records()
            .iter()
            .position(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let mut records = store.records().to_vec();
        let removed = records.remove(index);
        store.persist(records).await.map_err(persistence_error)?;

        Ok(removed.into_domain())
    }
}

fn persistence_error(e: StoreError) -> RepositoryError {
    tracing::error!(error = %e, "Failed to save carts");
    RepositoryError::Persistence
}
