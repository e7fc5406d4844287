// Auth session state and login-surface operations

use crate::gateway::{AuthClient, OAuthProvider};
use crate::models::{AuthSnapshot, User};
use std::sync::RwLock;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Default)]
struct AuthInner {
    user: Option<User>,
    access_token: Option<String>,
    is_loading: bool,
}

/// Observable session snapshot: user, authenticated flag, loading flag.
/// The user record itself is owned by the collaborator.
pub struct AuthState {
    inner: RwLock<AuthInner>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(AuthInner::default()),
        }
    }

    pub fn snapshot(&self) -> Result<AuthSnapshot, String> {
        let inner = self
            .inner
            .read()
            .map_err(|e| format!("Failed to acquire lock: {}", e))?;
        Ok(AuthSnapshot {
            user: inner.user.clone(),
            is_authenticated: inner.user.is_some(),
            is_loading: inner.is_loading,
        })
    }

    /// Bearer credential for collaborator calls; None when signed out.
    pub fn access_token(&self) -> Result<Option<String>, String> {
        self.inner
            .read()
            .map(|inner| inner.access_token.clone())
            .map_err(|e| format!("Failed to acquire lock: {}", e))
    }

    pub fn user(&self) -> Result<Option<User>, String> {
        self.inner
            .read()
            .map(|inner| inner.user.clone())
            .map_err(|e| format!("Failed to acquire lock: {}", e))
    }

    fn set_loading(&self, loading: bool) -> Result<(), String> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| format!("Failed to acquire lock: {}", e))?;
        inner.is_loading = loading;
        Ok(())
    }

    fn set_session(&self, user: Option<User>, access_token: Option<String>) -> Result<(), String> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| format!("Failed to acquire lock: {}", e))?;
        inner.user = user;
        inner.access_token = access_token;
        Ok(())
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

// Form validation, checked before any collaborator call. Messages are
// surfaced verbatim to the user.

pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.is_empty() || password.is_empty() {
        return Err("Por favor completa todos los campos".to_string());
    }
    Ok(())
}

pub fn validate_signup(email: &str, password: &str, confirm_password: &str) -> Result<(), String> {
    if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err("Por favor completa todos los campos".to_string());
    }
    if password != confirm_password {
        return Err("Asegúrate de que ambas contraseñas sean iguales".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("La contraseña debe tener al menos 8 caracteres".to_string());
    }
    Ok(())
}

pub fn validate_reset(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Por favor ingresa tu email para recuperar la contraseña".to_string());
    }
    Ok(())
}

/// Sign in and update the session snapshot.
pub async fn login(
    email: &str,
    password: &str,
    auth: &AuthState,
    client: &AuthClient,
) -> Result<AuthSnapshot, String> {
    validate_login(email, password)?;

    auth.set_loading(true)?;
    let result = client.login(email, password).await;
    auth.set_loading(false)?;

    let session = result.map_err(|e| e.to_string())?;
    auth.set_session(Some(session.user), Some(session.access_token))?;
    auth.snapshot()
}

/// Register a new account; the session is established when the
/// collaborator signs the user straight in.
pub async fn signup(
    email: &str,
    password: &str,
    confirm_password: &str,
    auth: &AuthState,
    client: &AuthClient,
) -> Result<AuthSnapshot, String> {
    validate_signup(email, password, confirm_password)?;

    auth.set_loading(true)?;
    let result = client.signup(email, password).await;
    auth.set_loading(false)?;

    let outcome = result.map_err(|e| e.to_string())?;
    if let Some(session) = outcome.session {
        auth.set_session(Some(session.user), Some(session.access_token))?;
    }
    auth.snapshot()
}

/// Terminate the session both at the collaborator and locally.
pub async fn logout(auth: &AuthState, client: &AuthClient) -> Result<AuthSnapshot, String> {
    let token = auth.access_token()?;

    auth.set_loading(true)?;
    let result = match token {
        Some(token) => client.logout(&token).await,
        None => Ok(()),
    };
    auth.set_loading(false)?;

    result.map_err(|e| e.to_string())?;
    auth.set_session(None, None)?;
    auth.snapshot()
}

/// Build the OAuth redirect URL for a provider. The session itself is
/// established by the collaborator's redirect flow, not here.
pub fn oauth_url(
    provider: OAuthProvider,
    redirect_to: &str,
    client: &AuthClient,
) -> Result<String, String> {
    client
        .oauth_url(provider, redirect_to)
        .map_err(|e| e.to_string())
}

/// Send a password recovery email.
pub async fn reset_password(email: &str, client: &AuthClient) -> Result<(), String> {
    validate_reset(email)?;
    client.reset_password(email).await.map_err(|e| e.to_string())
}
