use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::user;

/// Login input. The identifier may be an email, a username, or an alias.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "aromero")]
    pub identifier: String,
    #[schema(example = "Periferia123!")]
    pub password: String,
}

/// Public projection of a user row. The password hash never leaves the
/// persistence layer through this type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub alias: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<user::Model> for UserProfile {
    fn from(user: user::Model) -> Self {
        UserProfile {
            id: user.id,
            email: user.email,
            username: user.username,
            alias: user.alias,
            first_name: user.first_name,
            last_name: user.last_name,
            birth_date: user.birth_date,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}
