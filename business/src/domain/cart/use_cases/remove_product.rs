use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartId};
use crate::domain::product::model::ProductId;

pub struct RemoveProductFromCartParams {
    pub cart_id: CartId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveProductFromCartUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductFromCartParams) -> Result<Cart, CartError>;
}
