use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::models::{ApiResponse, AuthResponse, LoginRequest};
use crate::services;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted; returns token and profile", body = AuthResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    req: web::Json<LoginRequest>,
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    if req.identifier.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "El identificador y la contraseña son obligatorios".to_string(),
        ));
    }

    let result = services::auth::login(pool.get_ref(), config.get_ref(), &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(result)))
}
