#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.line_not_found")]
    LineNotFound,
    #[error("cart.quantity_required")]
    QuantityRequired,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
