use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Failure envelope shared by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human readable reason
    pub error: String,
}

/// The closed set of failure kinds the API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn response(self, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
        (
            self.status(),
            Json(ErrorResponse {
                success: false,
                error: message.into(),
            }),
        )
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
