use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{ApiResponse, AuthResponse, LoginRequest, PostResponse, UserProfile};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

/// Best-effort message extraction: the server's `message` field when it
/// sent one, otherwise the caller's localized fallback. Causes are never
/// differentiated further and nothing is retried.
pub fn error_message(err: &ClientError, fallback: &str) -> String {
    match err {
        ClientError::Server { message, .. } if !message.is_empty() => message.clone(),
        _ => fallback.to_string(),
    }
}

/// Thin typed client over the REST API. Unwraps the `{ ok, data }`
/// envelope and turns non-2xx responses into `ClientError::Server`.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: format!("{}/api", base_url.into().trim_end_matches('/')),
        }
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResponse<T> = resp
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<AuthResponse, ClientError> {
        let resp = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest {
                identifier: identifier.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        Self::unwrap_envelope(resp).await
    }

    pub async fn get_profile(&self, token: &str) -> Result<UserProfile, ClientError> {
        let resp = self
            .http
            .get(format!("{}/users/me", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        Self::unwrap_envelope(resp).await
    }

    pub async fn get_feed(&self, token: &str) -> Result<Vec<PostResponse>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/posts", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        Self::unwrap_envelope(resp).await
    }

    pub async fn create_post(
        &self,
        token: &str,
        message: &str,
    ) -> Result<PostResponse, ClientError> {
        let resp = self
            .http
            .post(format!("{}/posts", self.base_url))
            .bearer_auth(token)
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await?;
        Self::unwrap_envelope(resp).await
    }

    pub async fn like_post(&self, token: &str, post_id: Uuid) -> Result<PostResponse, ClientError> {
        let resp = self
            .http
            .post(format!("{}/posts/{}/like", self.base_url, post_id))
            .bearer_auth(token)
            .send()
            .await?;
        Self::unwrap_envelope(resp).await
    }

    pub async fn unlike_post(
        &self,
        token: &str,
        post_id: Uuid,
    ) -> Result<PostResponse, ClientError> {
        let resp = self
            .http
            .post(format!("{}/posts/{}/unlike", self.base_url, post_id))
            .bearer_auth(token)
            .send()
            .await?;
        Self::unwrap_envelope(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_server_message() {
        let err = ClientError::Server {
            status: 401,
            message: "Credenciales inválidas".to_string(),
        };
        assert_eq!(error_message(&err, "fallback"), "Credenciales inválidas");
    }

    #[test]
    fn error_message_falls_back_when_body_had_none() {
        let err = ClientError::Server {
            status: 500,
            message: String::new(),
        };
        assert_eq!(error_message(&err, "Ocurrió un error inesperado"), "Ocurrió un error inesperado");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000/api");
    }
}
