// Clients for the external auth/subscription collaborator

pub mod auth;
pub mod subscription;

pub use auth::{AuthClient, AuthSession, OAuthProvider, SignupOutcome};
pub use subscription::SubscriptionClient;

use thiserror::Error;

/// Failure at the collaborator boundary.
///
/// Collaborator-supplied messages are carried verbatim; the command layer
/// converts this to the user-facing string it surfaces.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Servicio externo no configurado")]
    NotConfigured,
    #[error("{message}")]
    Service { message: String, code: Option<u16> },
    #[error("Error de red: {0}")]
    Network(String),
}

impl GatewayError {
    pub fn network(e: reqwest::Error) -> Self {
        GatewayError::Network(e.to_string())
    }
}

/// Base URL and public API key of the collaborator.
#[derive(Debug, Clone)]
pub struct ServiceCredentials {
    pub base_url: String,
    pub anon_key: String,
}

impl ServiceCredentials {
    pub fn from_config(config: &crate::config::AppConfig) -> Option<Self> {
        match (&config.service_url, &config.anon_key) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => {
                Some(ServiceCredentials {
                    base_url: url.trim_end_matches('/').to_string(),
                    anon_key: key.clone(),
                })
            }
            _ => None,
        }
    }
}

/// Extract the collaborator's error message from a failure response body.
///
/// The collaborator reports errors in a few shapes ({"error_description"},
/// {"msg"}, {"message"}, {"error"}); the first present wins.
pub(crate) fn service_error(status: reqwest::StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| format!("Error del servicio ({})", status));

    GatewayError::Service {
        message,
        code: Some(status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_credentials_require_both_values() {
        let mut config = AppConfig::default();
        assert!(ServiceCredentials::from_config(&config).is_none());

        config.service_url = Some("https://proyecto.supabase.co/".to_string());
        assert!(ServiceCredentials::from_config(&config).is_none());

        config.anon_key = Some("anon-key".to_string());
        let creds = ServiceCredentials::from_config(&config).unwrap();
        assert_eq!(creds.base_url, "https://proyecto.supabase.co");
    }

    #[test]
    fn test_service_error_prefers_error_description() {
        let err = service_error(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        match err {
            GatewayError::Service { message, code } => {
                assert_eq!(message, "Invalid login credentials");
                assert_eq!(code, Some(400));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_service_error_falls_back_to_status() {
        let err = service_error(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "not json");
        assert_eq!(err.to_string(), "Error del servicio (500 Internal Server Error)");
    }

    #[test]
    fn test_service_error_msg_shape() {
        let err = service_error(
            reqwest::StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"msg":"Password should be at least 6 characters"}"#,
        );
        assert_eq!(err.to_string(), "Password should be at least 6 characters");
    }
}
