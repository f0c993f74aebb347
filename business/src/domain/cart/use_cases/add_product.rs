use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartId};
use crate::domain::product::model::ProductId;

pub struct AddProductToCartParams {
    pub cart_id: CartId,
    pub product_id: ProductId,
    /// Defaults to 1 when absent.
    pub quantity: Option<i64>,
}

#[async_trait]
pub trait AddProductToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddProductToCartParams) -> Result<Cart, CartError>;
}
