use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorKind, ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (kind, message) = match &self {
            CartError::NotFound => (ErrorKind::NotFound, "Carrito no encontrado"),
            CartError::LineNotFound => {
                (ErrorKind::NotFound, "Producto no encontrado en el carrito")
            }
            CartError::QuantityRequired => (ErrorKind::Validation, "La cantidad es requerida"),
            CartError::InvalidQuantity => {
                (ErrorKind::Validation, "La cantidad debe ser mayor a cero")
            }
            CartError::Repository(_) => (ErrorKind::Internal, "Error al guardar carritos"),
        };

        kind.response(message)
    }
}
