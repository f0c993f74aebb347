use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RemoveProductFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductFromCartUseCase for RemoveProductFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveProductFromCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart {}",
            params.product_id, params.cart_id
        ));

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        cart.remove_product(params.product_id)?;

        self.repository.save(&cart).await.map_err(|e| match e {
            RepositoryError::NotFound => CartError::NotFound,
            other => CartError::Repository(other),
        })?;

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartId;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError>;
            async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError>;
            async fn create(&self) -> Result<Cart, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn delete(&self, id: CartId) -> Result<Cart, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_remove_existing_line() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            let mut cart = Cart::new(id);
            cart.add_product(1, 1).unwrap();
            cart.add_product(2, 5).unwrap();
            Ok(cart)
        });
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = RemoveProductFromCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveProductFromCartParams {
                cart_id: 1,
                product_id: 1,
            })
            .await
            .unwrap();

        assert!(cart.line(1).is_none());
        assert_eq!(cart.line(2).unwrap().quantity, 5);
    }

    #[tokio::test]
    async fn should_fail_when_line_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Cart::new(id)));
        mock_repo.expect_save().never();

        let use_case = RemoveProductFromCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductFromCartParams {
                cart_id: 1,
                product_id: 3,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::LineNotFound));
    }
}
