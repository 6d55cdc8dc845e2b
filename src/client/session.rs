use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::client::api::{error_message, ApiClient, ClientError};
use crate::models::UserProfile;

const LOGIN_FALLBACK: &str = "No pudimos iniciar sesión. Revisa tus credenciales.";

/// Lifecycle of the client session: `Loading` until `bootstrap` has run,
/// then either `Authenticated` or `Anonymous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Authenticated,
    Anonymous,
}

/// Exactly what survives a reload: token and profile, nothing transient.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedSession {
    token: Option<String>,
    user: Option<UserProfile>,
}

/// Client-side session container. Mirrors the server's view of who is
/// logged in; persisted to a local JSON file (the localStorage analog).
pub struct SessionStore {
    api: ApiClient,
    storage_path: PathBuf,
    state: SessionState,
    token: Option<String>,
    user: Option<UserProfile>,
    error: Option<String>,
    is_authenticating: bool,
}

impl SessionStore {
    pub fn new(api: ApiClient, storage_path: PathBuf) -> Self {
        SessionStore {
            api,
            storage_path,
            state: SessionState::Loading,
            token: None,
            user: None,
            error: None,
            is_authenticating: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_authenticating(&self) -> bool {
        self.is_authenticating
    }

    fn load_persisted(&self) -> PersistedSession {
        fs::read_to_string(&self.storage_path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn persist(&self) {
        let persisted = PersistedSession {
            token: self.token.clone(),
            user: self.user.clone(),
        };
        match serde_json::to_string(&persisted) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.storage_path, raw) {
                    log::warn!("Could not persist session: {}", e);
                }
            }
            Err(e) => log::warn!("Could not serialize session: {}", e),
        }
    }

    fn clear_session(&mut self) {
        self.token = None;
        self.user = None;
        let _ = fs::remove_file(&self.storage_path);
    }

    /// Explicit startup sequence: load the persisted session, and if a
    /// token is present validate it by fetching the profile. Any failure
    /// clears the session; there is no retry.
    pub async fn bootstrap(&mut self) {
        self.state = SessionState::Loading;

        let persisted = self.load_persisted();
        let Some(token) = persisted.token else {
            self.state = SessionState::Anonymous;
            return;
        };

        match self.api.get_profile(&token).await {
            Ok(profile) => {
                self.token = Some(token);
                self.user = Some(profile);
                self.persist();
                self.state = SessionState::Authenticated;
            }
            Err(e) => {
                log::warn!("Persisted token rejected, clearing session: {}", e);
                self.clear_session();
                self.state = SessionState::Anonymous;
            }
        }
    }

    /// The error recorded on failure never distinguishes a wrong password
    /// from an unknown identifier; the server already collapsed both.
    pub async fn login(&mut self, identifier: &str, password: &str) -> Result<(), ClientError> {
        self.is_authenticating = true;
        self.error = None;

        match self.api.login(identifier, password).await {
            Ok(auth) => {
                self.token = Some(auth.token);
                self.user = Some(auth.user);
                self.persist();
                self.state = SessionState::Authenticated;
                self.is_authenticating = false;
                Ok(())
            }
            Err(e) => {
                self.error = Some(error_message(&e, LOGIN_FALLBACK));
                self.clear_session();
                self.state = SessionState::Anonymous;
                self.is_authenticating = false;
                Err(e)
            }
        }
    }

    pub fn logout(&mut self) {
        self.clear_session();
        self.error = None;
        self.state = SessionState::Anonymous;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
