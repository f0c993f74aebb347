use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartId};

pub struct DeleteCartParams {
    pub id: CartId,
}

#[async_trait]
pub trait DeleteCartUseCase: Send + Sync {
    /// Returns the removed cart.
    async fn execute(&self, params: DeleteCartParams) -> Result<Cart, CartError>;
}
