use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::models::{ApiResponse, CreatePostRequest, PostResponse};
use crate::services;

pub const MAX_MESSAGE_CHARS: usize = 280;

fn validate_message(message: &str) -> Result<(), ApiError> {
    if message.trim().is_empty() {
        return Err(ApiError::Validation(
            "El mensaje no puede estar vacío".to_string(),
        ));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::Validation(format!(
            "El mensaje no puede superar los {} caracteres",
            MAX_MESSAGE_CHARS
        )));
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/posts",
    responses(
        (status = 200, description = "All posts, newest first, under the viewer's perspective", body = Vec<PostResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "posts"
)]
pub async fn get_feed(
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let feed = services::posts::get_feed(pool.get_ref(), user.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(feed)))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Empty or oversized message"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "posts"
)]
pub async fn create_post(
    user: AuthenticatedUser,
    req: web::Json<CreatePostRequest>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    validate_message(&req.message)?;

    let created = services::posts::create_post(pool.get_ref(), &user, &req.message).await?;
    Ok(HttpResponse::Created().json(ApiResponse::new(created)))
}

#[utoipa::path(
    post,
    path = "/api/posts/{id}/like",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Updated feed entry (idempotent)", body = PostResponse),
        (status = 400, description = "Malformed post id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    ),
    security(("bearer_auth" = [])),
    tag = "posts"
)]
pub async fn like_post(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let post_id = path.into_inner();
    let updated = services::posts::like_post(pool.get_ref(), post_id, user.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(updated)))
}

#[utoipa::path(
    post,
    path = "/api/posts/{id}/unlike",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Updated feed entry (idempotent)", body = PostResponse),
        (status = 400, description = "Malformed post id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    ),
    security(("bearer_auth" = [])),
    tag = "posts"
)]
pub async fn unlike_post(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let post_id = path.into_inner();
    let updated = services::posts::unlike_post(pool.get_ref(), post_id, user.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(updated)))
}
