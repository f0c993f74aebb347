use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateProductQuantityParams, UpdateProductQuantityUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateProductQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductQuantityUseCase for UpdateProductQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateProductQuantityParams) -> Result<Cart, CartError> {
        let quantity = params.quantity.ok_or(CartError::QuantityRequired)?;

        self.logger.info(&format!(
            "Setting quantity of product {} in cart {} to {}",
            params.product_id, params.cart_id, quantity
        ));

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        cart.set_quantity(params.product_id, quantity)?;

        self.repository.save(&cart).await.map_err(|e| match e {
            RepositoryError::NotFound => CartError::NotFound,
            other => CartError::Repository(other),
        })?;

        Ok(cart)
    }
}
