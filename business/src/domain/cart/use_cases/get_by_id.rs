use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartId};

pub struct GetCartByIdParams {
    pub id: CartId,
}

#[async_trait]
pub trait GetCartByIdUseCase: Send + Sync {
    /// Unlike product lookup, an unknown cart is an error.
    async fn execute(&self, params: GetCartByIdParams) -> Result<Cart, CartError>;
}
