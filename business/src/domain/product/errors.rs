#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.missing_fields")]
    MissingFields,
    #[error("product.invalid_field.{0}")]
    InvalidField(&'static str),
    #[error("product.code_already_exists")]
    CodeAlreadyExists,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
