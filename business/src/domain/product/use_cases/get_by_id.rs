use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};

pub struct GetProductByIdParams {
    pub id: ProductId,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    /// An unknown id is not an error: it yields `Ok(None)`.
    async fn execute(&self, params: GetProductByIdParams) -> Result<Option<Product>, ProductError>;
}
