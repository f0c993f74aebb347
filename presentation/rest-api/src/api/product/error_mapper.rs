use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorKind, ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ProductError::MissingFields => {
                ErrorKind::Validation.response("Todos los campos son obligatorios")
            }
            ProductError::InvalidField(field) => {
                ErrorKind::Validation.response(format!("El campo {} no es válido", field))
            }
            ProductError::CodeAlreadyExists => {
                ErrorKind::Validation.response("El código del producto ya existe")
            }
            ProductError::NotFound => ErrorKind::NotFound.response("Producto no encontrado"),
            ProductError::Repository(_) => {
                ErrorKind::Internal.response("Error al guardar productos")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = ProductError::CodeAlreadyExists.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.error, "El código del producto ya existe");
    }

    #[test]
    fn should_map_not_found_and_storage_errors() {
        let (not_found, _) = ProductError::NotFound.into_error_response();
        let (internal, _) =
            ProductError::Repository(RepositoryError::Persistence).into_error_response();

        assert_eq!(not_found, StatusCode::NOT_FOUND);
        assert_eq!(internal, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
