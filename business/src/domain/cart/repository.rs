use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Cart, CartId};

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError>;
    async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError>;
    /// Stores a new empty cart under the next free id.
    async fn create(&self) -> Result<Cart, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    async fn delete(&self, id: CartId) -> Result<Cart, RepositoryError>;
}
