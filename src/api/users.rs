use actix_web::{web, HttpResponse};

use crate::auth::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::models::{ApiResponse, UserProfile};
use crate::services;

/// The token only proves the user existed at issuance; the row may have
/// vanished since, hence the 404 arm.
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Current user profile", body = UserProfile),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User no longer exists")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn me(
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let Some(profile) = services::users::find_by_id(pool.get_ref(), user.id).await? else {
        return Err(ApiError::user_not_found());
    };

    Ok(HttpResponse::Ok().json(ApiResponse::new(UserProfile::from(profile))))
}
