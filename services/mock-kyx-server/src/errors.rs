use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::collections::BTreeMap;
use std::fmt;

pub type KyxResult<T> = Result<T, KyxError>;

/// Field name to message, keyed by the wire (camelCase) field name
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug)]
pub enum KyxError {
    ValidationError(FieldErrors),
    BadRequest(String),
    NotFound(String),
}

impl fmt::Display for KyxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KyxError::ValidationError(errors) => {
                write!(f, "Validation error: ")?;
                let mut first = true;
                for (field, message) in errors {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", field, message)?;
                    first = false;
                }
                Ok(())
            }
            KyxError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            KyxError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for KyxError {}

impl ResponseError for KyxError {
    fn status_code(&self) -> StatusCode {
        match self {
            KyxError::ValidationError(_) | KyxError::BadRequest(_) => StatusCode::BAD_REQUEST,
            KyxError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            KyxError::ValidationError(errors) => {
                tracing::error!("Validation error: {:?}", errors);
                HttpResponse::BadRequest().json(serde_json::json!({
                    "code": 400,
                    "message": "Validation error",
                    "errors": errors
                }))
            }
            KyxError::BadRequest(msg) => {
                tracing::error!("Bad request: {}", msg);
                HttpResponse::BadRequest().json(serde_json::json!({
                    "code": 400,
                    "message": "Bad request",
                    "error": msg
                }))
            }
            KyxError::NotFound(msg) => HttpResponse::NotFound().json(serde_json::json!({
                "code": 404,
                "message": "Not found",
                "error": msg
            })),
        }
    }
}
