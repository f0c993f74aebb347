use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddProductToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(&self, params: AddProductToCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding product {} to cart {}",
            params.product_id, params.cart_id
        ));

        let quantity = match params.quantity {
            None => 1,
            Some(q) => u32::try_from(q)
                .ok()
                .filter(|q| *q > 0)
                .ok_or(CartError::InvalidQuantity)?,
        };

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(not_found_as_cart)?;

        // Product ids are not checked against the product collection.
        cart.add_product(params.product_id, quantity)?;

        self.repository
            .save(&cart)
            .await
            .map_err(not_found_as_cart)?;

        self.logger.info(&format!(
            "Cart {} now holds {} line(s)",
            cart.id,
            cart.products.len()
        ));
        Ok(cart)
    }
}

fn not_found_as_cart(e: RepositoryError) -> CartError {
    match e {
        RepositoryError::NotFound => CartError::NotFound,
        other => CartError::Repository(other),
    }
}
