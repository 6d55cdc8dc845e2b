use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::user;

/// Token claim set. `id` and `sub` both carry the user id; the remaining
/// identity fields are trusted as of issuance and are NOT re-checked
/// against the database on verification, so a profile edit only shows up
/// after re-authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub id: Uuid,
    pub sub: Uuid,
    pub username: String,
    pub alias: String,
    pub first_name: String,
    pub last_name: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: &user::Model, expiration_hours: i64) -> Self {
        let now = Utc::now();
        Claims {
            id: user.id,
            sub: user.id,
            username: user.username.clone(),
            alias: user.alias.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiration_hours)).timestamp(),
        }
    }
}

pub fn create_token(claims: &Claims, secret: &str) -> Result<String, anyhow::Error> {
    let token = encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;
    Ok(token)
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, anyhow::Error> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user() -> user::Model {
        let now = Utc::now();
        user::Model {
            id: Uuid::new_v4(),
            email: "ana.romero@periferia.it".to_string(),
            username: "aromero".to_string(),
            alias: "anar".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Romero".to_string(),
            birth_date: chrono::NaiveDate::from_ymd_opt(1995, 3, 21).unwrap(),
            password_hash: "irrelevant".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn sign_and_verify_roundtrip() {
        let user = demo_user();
        let claims = Claims::new(&user, 24);
        let token = create_token(&claims, "test-secret").expect("sign");

        let decoded = verify_token(&token, "test-secret").expect("verify");
        assert_eq!(decoded.sub, user.id);
        assert_eq!(decoded.id, user.id);
        assert_eq!(decoded.username, "aromero");
        assert_eq!(decoded.alias, "anar");
        assert_eq!(decoded.first_name, "Ana");
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let claims = Claims::new(&demo_user(), 24);
        let token = create_token(&claims, "test-secret").expect("sign");
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let claims = Claims::new(&demo_user(), -1);
        let token = create_token(&claims, "test-secret").expect("sign");
        assert!(verify_token(&token, "test-secret").is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        assert!(verify_token("not-a-jwt", "test-secret").is_err());
    }
}
