use crate::config::Config;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

pub type DbPool = DatabaseConnection;

pub async fn create_mysql_pool(config: &Config) -> Result<DbPool, anyhow::Error> {
    let url = config.mysql_url();
    let db = Database::connect(&url).await?;

    // Schema creation with raw SQL at startup. Uniqueness of emails,
    // usernames, aliases, and (post_id, user_id) like pairs is enforced
    // here, not in application code.
    let sql = r#"
        CREATE TABLE IF NOT EXISTS users (
            id BINARY(16) PRIMARY KEY,
            email VARCHAR(255) UNIQUE NOT NULL,
            username VARCHAR(255) UNIQUE NOT NULL,
            alias VARCHAR(255) UNIQUE NOT NULL,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            birth_date DATE NOT NULL,
            password_hash VARCHAR(255) NOT NULL,
            created_at TIMESTAMP(6) DEFAULT CURRENT_TIMESTAMP(6),
            updated_at TIMESTAMP(6) DEFAULT CURRENT_TIMESTAMP(6) ON UPDATE CURRENT_TIMESTAMP(6)
        );

        CREATE TABLE IF NOT EXISTS posts (
            id BINARY(16) PRIMARY KEY,
            author_id BINARY(16) NOT NULL,
            message VARCHAR(280) NOT NULL,
            published_at TIMESTAMP(6) DEFAULT CURRENT_TIMESTAMP(6),
            FOREIGN KEY (author_id) REFERENCES users(id) ON DELETE CASCADE,
            INDEX idx_author_id (author_id),
            INDEX idx_published_at (published_at)
        );

        CREATE TABLE IF NOT EXISTS likes (
            id BINARY(16) PRIMARY KEY,
            post_id BINARY(16) NOT NULL,
            user_id BINARY(16) NOT NULL,
            created_at TIMESTAMP(6) DEFAULT CURRENT_TIMESTAMP(6),
            UNIQUE KEY unique_post_user (post_id, user_id),
            FOREIGN KEY (post_id) REFERENCES posts(id) ON DELETE CASCADE,
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
            INDEX idx_post_id (post_id),
            INDEX idx_user_id (user_id)
        );
    "#;

    for statement in sql.split(';') {
        let statement = statement.trim();
        if !statement.is_empty() {
            let stmt = sea_orm::Statement::from_string(
                sea_orm::DatabaseBackend::MySql,
                statement.to_string(),
            );
            db.execute(stmt).await?;
        }
    }

    Ok(db)
}
