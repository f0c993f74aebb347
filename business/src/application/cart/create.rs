use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::create::CreateCartUseCase;
use crate::domain::logger::Logger;

pub struct CreateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartUseCase for CreateCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        self.logger.info("Creating cart");
        let cart = self.repository.create().await?;
        self.logger.info(&format!("Cart created with id: {}", cart.id));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartId;
    use crate::domain::errors::RepositoryError;
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
    async fn should_create_empty_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|| Ok(Cart::new(1)));

        let use_case = CreateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case.execute().await.unwrap();

        assert_eq!(cart.id, 1);
        assert!(cart.products.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_persistence_failure() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_create()
            .returning(|| Err(RepositoryError::Persistence));

        let use_case = CreateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), CartError::Repository(_)));
    }
}
