use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Service-wide error taxonomy. Every handler returns `Result<_, ApiError>`
/// and the `ResponseError` impl shapes the `{ ok: false, message }` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    /// Deliberately generic: never reveals whether the identifier or the
    /// password was wrong.
    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn post_not_found() -> Self {
        ApiError::NotFound("Publicación no encontrada".to_string())
    }

    pub fn user_not_found() -> Self {
        ApiError::NotFound("Usuario no encontrado".to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Database(e) => {
                log::error!("Database error: {:?}", e);
                "Error interno del servidor".to_string()
            }
            ApiError::Internal(e) => {
                log::error!("Internal error: {:?}", e);
                "Error interno del servidor".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({
            "ok": false,
            "message": message
        }))
    }
}
