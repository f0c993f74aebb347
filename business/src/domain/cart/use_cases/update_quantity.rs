use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartId};
use crate::domain::product::model::ProductId;

pub struct UpdateProductQuantityParams {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: Option<i64>,
}

#[async_trait]
pub trait UpdateProductQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductQuantityParams) -> Result<Cart, CartError>;
}
