pub mod post;
pub mod user;

pub use post::*;
pub use user::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform success envelope: every endpoint answers `{ ok: true, data }`.
/// Errors answer `{ ok: false, message }` (see `crate::error`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        ApiResponse { ok: true, data }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
    pub message: String,
}
