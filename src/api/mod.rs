pub mod auth;
pub mod health;
pub mod posts;
pub mod users;

use crate::models::{
    AuthResponse, CreatePostRequest, HealthResponse, LoginRequest, PostAuthor, PostResponse,
    UserProfile,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::get_health,
        auth::login,
        users::me,
        posts::get_feed,
        posts::create_post,
        posts::like_post,
        posts::unlike_post,
    ),
    components(schemas(
        LoginRequest,
        AuthResponse,
        UserProfile,
        CreatePostRequest,
        PostAuthor,
        PostResponse,
        HealthResponse,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User profile endpoints"),
        (name = "posts", description = "Feed and post endpoints"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

use utoipa::Modify;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
