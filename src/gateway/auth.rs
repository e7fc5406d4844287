// Auth collaborator client: session lifecycle over its REST contract

use super::{service_error, GatewayError, ServiceCredentials};
use crate::models::User;
use serde::{Deserialize, Serialize};

/// OAuth providers the login surface offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Linkedin,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Linkedin => "linkedin",
        }
    }
}

impl std::str::FromStr for OAuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "linkedin" => Ok(OAuthProvider::Linkedin),
            _ => Err(format!(
                "Invalid OAuth provider: '{}'. Expected 'google' or 'linkedin'",
                s
            )),
        }
    }
}

/// An established session returned by the collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: User,
}

/// Signup result: a session when the collaborator signs the user straight
/// in, or None when it first sends a confirmation email.
#[derive(Debug, Clone)]
pub struct SignupOutcome {
    pub session: Option<AuthSession>,
}

/// Client for the external identity service.
pub struct AuthClient {
    http: reqwest::Client,
    credentials: Option<ServiceCredentials>,
}

impl AuthClient {
    pub fn new(credentials: Option<ServiceCredentials>) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    fn credentials(&self) -> Result<&ServiceCredentials, GatewayError> {
        self.credentials.as_ref().ok_or(GatewayError::NotConfigured)
    }

    /// Sign in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, GatewayError> {
        let creds = self.credentials()?;
        let url = format!("{}/auth/v1/token?grant_type=password", creds.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &creds.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(GatewayError::network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(service_error(status, &body));
        }

        response.json().await.map_err(GatewayError::network)
    }

    /// Register a new account.
    pub async fn signup(&self, email: &str, password: &str) -> Result<SignupOutcome, GatewayError> {
        let creds = self.credentials()?;
        let url = format!("{}/auth/v1/signup", creds.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &creds.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(GatewayError::network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(service_error(status, &body));
        }

        // With email confirmation enabled the body carries the user but no
        // access token yet
        let value: serde_json::Value = response.json().await.map_err(GatewayError::network)?;
        let session = serde_json::from_value::<AuthSession>(value.clone()).ok();
        Ok(SignupOutcome { session })
    }

    /// Terminate the current session.
    pub async fn logout(&self, access_token: &str) -> Result<(), GatewayError> {
        let creds = self.credentials()?;
        let url = format!("{}/auth/v1/logout", creds.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &creds.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(GatewayError::network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(service_error(status, &body));
        }

        Ok(())
    }

    /// Send a password recovery email.
    pub async fn reset_password(&self, email: &str) -> Result<(), GatewayError> {
        let creds = self.credentials()?;
        let url = format!("{}/auth/v1/recover", creds.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &creds.anon_key)
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await
            .map_err(GatewayError::network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(service_error(status, &body));
        }

        Ok(())
    }

    /// Build the authorize URL the browser is redirected to for OAuth.
    /// No request is made; the collaborator handles the rest of the flow.
    pub fn oauth_url(
        &self,
        provider: OAuthProvider,
        redirect_to: &str,
    ) -> Result<String, GatewayError> {
        let creds = self.credentials()?;
        Ok(format!(
            "{}/auth/v1/authorize?provider={}&redirect_to={}",
            creds.base_url,
            provider.as_str(),
            redirect_to
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured_client() -> AuthClient {
        AuthClient::new(Some(ServiceCredentials {
            base_url: "https://proyecto.supabase.co".to_string(),
            anon_key: "anon-key".to_string(),
        }))
    }

    #[test]
    fn test_oauth_url_shape() {
        let client = configured_client();
        let url = client
            .oauth_url(OAuthProvider::Google, "http://localhost:3470/account")
            .unwrap();

        assert_eq!(
            url,
            "https://proyecto.supabase.co/auth/v1/authorize?provider=google&redirect_to=http://localhost:3470/account"
        );
    }

    #[test]
    fn test_oauth_provider_parse() {
        assert_eq!("Google".parse::<OAuthProvider>().unwrap(), OAuthProvider::Google);
        assert_eq!("linkedin".parse::<OAuthProvider>().unwrap(), OAuthProvider::Linkedin);
        assert!("github".parse::<OAuthProvider>().is_err());
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_fast() {
        let client = AuthClient::new(None);
        let err = client.login("a@b.com", "secret123").await.unwrap_err();
        assert!(matches!(err, GatewayError::NotConfigured));
    }

    #[test]
    fn test_session_parses_collaborator_payload() {
        let session: AuthSession = serde_json::from_value(serde_json::json!({
            "access_token": "jwt-token",
            "token_type": "bearer",
            "user": { "id": "user-1", "email": "a@b.com" }
        }))
        .unwrap();

        assert_eq!(session.access_token, "jwt-token");
        assert_eq!(session.user.id, "user-1");
        assert_eq!(session.user.email.as_deref(), Some("a@b.com"));
    }
}
