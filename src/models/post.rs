use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::user;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[schema(example = "¡Hola equipo! Hoy lanzamos la nueva funcionalidad.", max_length = 280)]
    pub message: String,
}

/// Author identity as embedded in a feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostAuthor {
    pub id: Uuid,
    pub alias: String,
    pub name: String,
}

impl From<&user::Model> for PostAuthor {
    fn from(user: &user::Model) -> Self {
        PostAuthor {
            id: user.id,
            alias: user.alias.clone(),
            name: format!("{} {}", user.first_name, user.last_name)
                .trim()
                .to_string(),
        }
    }
}

/// Feed entry: a post enriched with its author identity, the total like
/// count, and whether the current viewer has liked it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub message: String,
    pub published_at: chrono::DateTime<chrono::Utc>,
    pub author: PostAuthor,
    pub likes: i64,
    pub liked_by_me: bool,
}
