use actix_web::{web, Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::auth::{verify_token, Claims};
use crate::config::Config;
use crate::error::ApiError;

/// Identity reconstructed from a verified bearer token. Claims are taken
/// at face value; no database round trip happens here.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub alias: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        AuthenticatedUser {
            id: claims.sub,
            username: claims.username,
            alias: claims.alias,
            first_name: claims.first_name,
            last_name: claims.last_name,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let token = req
            .headers()
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        let Some(token) = token else {
            return ready(Err(ApiError::Unauthorized(
                "Falta el token de autenticación".to_string(),
            )
            .into()));
        };

        let Some(config) = req.app_data::<web::Data<Config>>() else {
            return ready(Err(
                ApiError::Internal(anyhow::anyhow!("missing app config")).into()
            ));
        };

        match verify_token(token, &config.jwt.secret) {
            Ok(claims) => ready(Ok(AuthenticatedUser::from(claims))),
            Err(_) => ready(Err(ApiError::Unauthorized(
                "Token inválido o expirado".to_string(),
            )
            .into())),
        }
    }
}
