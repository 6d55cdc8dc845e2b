use crate::auth::{create_token, verify_password, Claims};
use crate::config::Config;
use crate::db::DbPool;
use crate::entities::user;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, UserProfile};
use crate::services::users;

/// Look up the user by identifier and compare the password against the
/// stored bcrypt hash. Both failure modes collapse into the same
/// `InvalidCredentials` rejection so callers cannot probe which part was
/// wrong. Read-only.
pub async fn validate_credentials(
    db: &DbPool,
    identifier: &str,
    password: &str,
) -> Result<user::Model, ApiError> {
    let Some(user) = users::find_by_identifier(db, identifier).await? else {
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(user)
}

pub async fn login(
    db: &DbPool,
    config: &Config,
    req: &LoginRequest,
) -> Result<AuthResponse, ApiError> {
    let user = validate_credentials(db, &req.identifier, &req.password).await?;

    let claims = Claims::new(&user, config.jwt.expiration_hours);
    let token = create_token(&claims, &config.jwt.secret)?;

    log::info!("User logged in: {}", user.username);

    Ok(AuthResponse {
        token,
        user: UserProfile::from(user),
    })
}
