use chrono::Utc;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::db::DbPool;
use crate::entities::{like, post, user};
use crate::error::ApiError;
use crate::models::{PostAuthor, PostResponse};

/// Like count and viewer flag are always recomputed from the likes
/// relation, never cached or tracked incrementally.
async fn like_stats(
    db: &DbPool,
    post_id: Uuid,
    viewer_id: Uuid,
) -> Result<(i64, bool), sea_orm::DbErr> {
    let likes = like::Entity::find()
        .filter(like::Column::PostId.eq(post_id))
        .count(db)
        .await?;

    let liked_by_me = like::Entity::find()
        .filter(
            Condition::all()
                .add(like::Column::PostId.eq(post_id))
                .add(like::Column::UserId.eq(viewer_id)),
        )
        .one(db)
        .await?
        .is_some();

    Ok((likes as i64, liked_by_me))
}

fn to_response(
    post: post::Model,
    author: &user::Model,
    likes: i64,
    liked_by_me: bool,
) -> PostResponse {
    PostResponse {
        id: post.id,
        message: post.message,
        published_at: post.published_at,
        author: PostAuthor::from(author),
        likes,
        liked_by_me,
    }
}

/// Refetch a single post with its author and current like state under the
/// viewer's perspective.
async fn summarize_post(
    db: &DbPool,
    post_id: Uuid,
    viewer_id: Uuid,
) -> Result<PostResponse, ApiError> {
    let Some((post, author)) = post::Entity::find_by_id(post_id)
        .find_also_related(user::Entity)
        .one(db)
        .await?
    else {
        return Err(ApiError::post_not_found());
    };

    let author = author
        .ok_or_else(|| anyhow::anyhow!("post {} has no author row", post_id))
        .map_err(ApiError::Internal)?;

    let (likes, liked_by_me) = like_stats(db, post_id, viewer_id).await?;
    Ok(to_response(post, &author, likes, liked_by_me))
}

/// Every post, newest first, enriched for the given viewer. No pagination:
/// the feed is demo-scale by design.
pub async fn get_feed(db: &DbPool, viewer_id: Uuid) -> Result<Vec<PostResponse>, ApiError> {
    let posts = post::Entity::find()
        .find_also_related(user::Entity)
        .order_by_desc(post::Column::PublishedAt)
        .all(db)
        .await?;

    let mut entries = Vec::with_capacity(posts.len());
    for (post, author) in posts {
        let author = author
            .ok_or_else(|| anyhow::anyhow!("post {} has no author row", post.id))
            .map_err(ApiError::Internal)?;

        let (likes, liked_by_me) = like_stats(db, post.id, viewer_id).await?;
        entries.push(to_response(post, &author, likes, liked_by_me));
    }

    Ok(entries)
}

/// Persist a post owned by the authenticated author. Message validation
/// (non-empty, ≤280 chars) is the HTTP boundary's job; this function
/// stores whatever it is given.
pub async fn create_post(
    db: &DbPool,
    author: &AuthenticatedUser,
    message: &str,
) -> Result<PostResponse, ApiError> {
    let post_id = Uuid::new_v4();

    post::Entity::insert(post::ActiveModel {
        id: Set(post_id),
        author_id: Set(author.id),
        message: Set(message.to_string()),
        published_at: Set(Utc::now()),
    })
    .exec(db)
    .await?;

    log::info!("Post {} created by user {}", post_id, author.username);

    summarize_post(db, post_id, author.id).await
}

/// Idempotent like: the UNIQUE(post_id, user_id) constraint is the only
/// serialization point, and a violation means the like already exists,
/// which is success. Only a missing post is an error.
pub async fn like_post(
    db: &DbPool,
    post_id: Uuid,
    viewer_id: Uuid,
) -> Result<PostResponse, ApiError> {
    if post::Entity::find_by_id(post_id).one(db).await?.is_none() {
        return Err(ApiError::post_not_found());
    }

    let insert = like::Entity::insert(like::ActiveModel {
        id: Set(Uuid::new_v4()),
        post_id: Set(post_id),
        user_id: Set(viewer_id),
        created_at: Set(Utc::now()),
    })
    .exec(db)
    .await;

    match insert {
        Ok(_) => {}
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            log::debug!("User {} already liked post {}", viewer_id, post_id);
        }
        Err(e) => return Err(e.into()),
    }

    summarize_post(db, post_id, viewer_id).await
}

/// Idempotent unlike: deleting zero rows is fine, only a missing post is
/// an error.
pub async fn unlike_post(
    db: &DbPool,
    post_id: Uuid,
    viewer_id: Uuid,
) -> Result<PostResponse, ApiError> {
    if post::Entity::find_by_id(post_id).one(db).await?.is_none() {
        return Err(ApiError::post_not_found());
    }

    like::Entity::delete_many()
        .filter(
            Condition::all()
                .add(like::Column::PostId.eq(post_id))
                .add(like::Column::UserId.eq(viewer_id)),
        )
        .exec(db)
        .await?;

    summarize_post(db, post_id, viewer_id).await
}
