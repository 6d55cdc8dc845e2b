use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::user;

/// Resolve a login identifier against email, username, or alias. All three
/// columns are unique, so at most one row can match.
pub async fn find_by_identifier(
    db: &DbPool,
    identifier: &str,
) -> Result<Option<user::Model>, sea_orm::DbErr> {
    user::Entity::find()
        .filter(
            Condition::any()
                .add(user::Column::Email.eq(identifier))
                .add(user::Column::Username.eq(identifier))
                .add(user::Column::Alias.eq(identifier)),
        )
        .one(db)
        .await
}

pub async fn find_by_id(db: &DbPool, id: Uuid) -> Result<Option<user::Model>, sea_orm::DbErr> {
    user::Entity::find_by_id(id).one(db).await
}
