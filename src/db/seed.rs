use chrono::{NaiveDate, Utc};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, Set, SqlErr};
use uuid::{uuid, Uuid};

use crate::auth::hash_password;
use crate::db::DbPool;
use crate::entities::{like, post, user};

/// Every seeded account shares this password. There is no registration
/// endpoint, so these accounts are the only way into the demo.
pub const DEMO_PASSWORD: &str = "Periferia123!";

struct SeedPost {
    id: Uuid,
    message: &'static str,
}

struct SeedUser {
    id: Uuid,
    email: &'static str,
    username: &'static str,
    alias: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    birth_date: (i32, u32, u32),
    posts: &'static [SeedPost],
}

const USERS: &[SeedUser] = &[
    SeedUser {
        id: uuid!("c35c21f4-6790-4f66-a282-5ce3561c6920"),
        email: "ana.romero@periferia.it",
        username: "aromero",
        alias: "anar",
        first_name: "Ana",
        last_name: "Romero",
        birth_date: (1995, 3, 21),
        posts: &[SeedPost {
            id: uuid!("a0d258c7-d471-4c7e-8828-1bdea5076a5f"),
            message: "¡Hola Periferia! Emocionada de estrenar nuestra red social interna ✨",
        }],
    },
    SeedUser {
        id: uuid!("84a08381-3a58-4b3c-8d62-16ec3e6762d4"),
        email: "carlos.mendez@periferia.it",
        username: "cmendez",
        alias: "carlitos",
        first_name: "Carlos",
        last_name: "Méndez",
        birth_date: (1992, 8, 14),
        posts: &[SeedPost {
            id: uuid!("f12be7ed-01ea-4594-951f-530d6ea09147"),
            message: "¿Quién se apunta a una sesión de pair programming esta tarde?",
        }],
    },
    SeedUser {
        id: uuid!("5d7b3f54-6cd0-498b-9c59-089e35d3a1d7"),
        email: "laura.castillo@periferia.it",
        username: "lcastillo",
        alias: "lauca",
        first_name: "Laura",
        last_name: "Castillo",
        birth_date: (1998, 1, 5),
        posts: &[SeedPost {
            id: uuid!("aaed0ef1-0a40-4a4a-a68b-0d08a93fd0e3"),
            message: "Tip del día: documenta antes de desplegar 🚀",
        }],
    },
];

// (post, user) pairs liked out of the box.
const LIKES: &[(Uuid, Uuid)] = &[
    (
        uuid!("f12be7ed-01ea-4594-951f-530d6ea09147"),
        uuid!("c35c21f4-6790-4f66-a282-5ce3561c6920"),
    ),
    (
        uuid!("aaed0ef1-0a40-4a4a-a68b-0d08a93fd0e3"),
        uuid!("84a08381-3a58-4b3c-8d62-16ec3e6762d4"),
    ),
];

/// Two processes seeding at once can both pass the existence check; the
/// loser's insert hits a unique constraint and that is fine.
fn ignore_unique<T>(result: Result<T, sea_orm::DbErr>) -> Result<(), sea_orm::DbErr> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Idempotent demo seed: re-running leaves exactly one row per user, post,
/// and like. Existing rows are left untouched.
pub async fn seed_demo_data(db: &DbPool) -> Result<(), anyhow::Error> {
    for seed in USERS {
        let existing = user::Entity::find()
            .filter(user::Column::Email.eq(seed.email))
            .one(db)
            .await?;

        if existing.is_none() {
            let now = Utc::now();
            let birth_date = NaiveDate::from_ymd_opt(
                seed.birth_date.0,
                seed.birth_date.1,
                seed.birth_date.2,
            )
            .ok_or_else(|| anyhow::anyhow!("invalid seed birth date for {}", seed.username))?;

            let password_hash = hash_password(DEMO_PASSWORD)?;

            ignore_unique(
                user::Entity::insert(user::ActiveModel {
                    id: Set(seed.id),
                    email: Set(seed.email.to_string()),
                    username: Set(seed.username.to_string()),
                    alias: Set(seed.alias.to_string()),
                    first_name: Set(seed.first_name.to_string()),
                    last_name: Set(seed.last_name.to_string()),
                    birth_date: Set(birth_date),
                    password_hash: Set(password_hash),
                    created_at: Set(now),
                    updated_at: Set(now),
                })
                .exec(db)
                .await,
            )?;

            log::info!("Seeded demo user {}", seed.username);
        }

        for seed_post in seed.posts {
            let existing = post::Entity::find_by_id(seed_post.id).one(db).await?;
            if existing.is_none() {
                ignore_unique(
                    post::Entity::insert(post::ActiveModel {
                        id: Set(seed_post.id),
                        author_id: Set(seed.id),
                        message: Set(seed_post.message.to_string()),
                        published_at: Set(Utc::now()),
                    })
                    .exec(db)
                    .await,
                )?;
            }
        }
    }

    for &(post_id, user_id) in LIKES {
        let existing = like::Entity::find()
            .filter(
                Condition::all()
                    .add(like::Column::PostId.eq(post_id))
                    .add(like::Column::UserId.eq(user_id)),
            )
            .one(db)
            .await?;

        if existing.is_none() {
            ignore_unique(
                like::Entity::insert(like::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    post_id: Set(post_id),
                    user_id: Set(user_id),
                    created_at: Set(Utc::now()),
                })
                .exec(db)
                .await,
            )?;
        }
    }

    Ok(())
}
