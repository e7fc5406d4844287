// Subscription state and billing operations

use crate::commands::auth::AuthState;
use crate::gateway::SubscriptionClient;
use crate::models::SubscriptionSnapshot;
use std::sync::RwLock;

#[derive(Debug, Default)]
struct SubscriptionInner {
    is_subscribed: bool,
    is_loading: bool,
}

/// Observable billing state: subscribed flag plus loading flag.
pub struct SubscriptionState {
    inner: RwLock<SubscriptionInner>,
}

impl SubscriptionState {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SubscriptionInner::default()),
        }
    }

    pub fn snapshot(&self) -> Result<SubscriptionSnapshot, String> {
        let inner = self
            .inner
            .read()
            .map_err(|e| format!("Failed to acquire lock: {}", e))?;
        Ok(SubscriptionSnapshot {
            is_subscribed: inner.is_subscribed,
            is_loading: inner.is_loading,
        })
    }

    fn set_loading(&self, loading: bool) -> Result<(), String> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| format!("Failed to acquire lock: {}", e))?;
        inner.is_loading = loading;
        Ok(())
    }

    fn set_subscribed(&self, subscribed: bool) -> Result<(), String> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| format!("Failed to acquire lock: {}", e))?;
        inner.is_subscribed = subscribed;
        Ok(())
    }
}

impl Default for SubscriptionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Refresh the subscribed flag from the collaborator.
///
/// Without a signed-in user this answers the current snapshot without any
/// network traffic.
pub async fn check_subscription(
    auth: &AuthState,
    subscription: &SubscriptionState,
    client: &SubscriptionClient,
) -> Result<SubscriptionSnapshot, String> {
    let token = match auth.access_token()? {
        Some(token) => token,
        None => return subscription.snapshot(),
    };

    subscription.set_loading(true)?;
    let result = client.check(&token).await;
    subscription.set_loading(false)?;

    let subscribed = result.map_err(|e| e.to_string())?;
    subscription.set_subscribed(subscribed)?;
    subscription.snapshot()
}

/// Start a checkout flow; answers the external checkout URL.
pub async fn initiate_subscription(
    auth: &AuthState,
    subscription: &SubscriptionState,
    client: &SubscriptionClient,
) -> Result<String, String> {
    let token = auth
        .access_token()?
        .ok_or_else(|| "Por favor inicia sesión para suscribirte".to_string())?;

    subscription.set_loading(true)?;
    let result = client.checkout_url(&token).await;
    subscription.set_loading(false)?;

    result.map_err(|e| e.to_string())
}

/// Open the billing-management portal; answers its URL.
///
/// Without a signed-in user this is a silent no-op.
pub async fn customer_portal(
    auth: &AuthState,
    subscription: &SubscriptionState,
    client: &SubscriptionClient,
) -> Result<Option<String>, String> {
    let token = match auth.access_token()? {
        Some(token) => token,
        None => return Ok(None),
    };

    subscription.set_loading(true)?;
    let result = client.portal_url(&token).await;
    subscription.set_loading(false)?;

    result.map(Some).map_err(|e| e.to_string())
}

/// Re-derive the subscription after the session changed.
///
/// A fresh sign-in triggers a check (failures are logged, not surfaced so
/// the session change itself still succeeds); a sign-out resets the flag
/// locally without network traffic. Never touches the session itself.
pub async fn sync_with_user(
    auth: &AuthState,
    subscription: &SubscriptionState,
    client: &SubscriptionClient,
) -> Result<SubscriptionSnapshot, String> {
    match auth.access_token()? {
        Some(_) => {
            if let Err(e) = check_subscription(auth, subscription, client).await {
                log::warn!("Subscription check after session change failed: {}", e);
            }
        }
        None => {
            subscription.set_subscribed(false)?;
        }
    }
    subscription.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_without_user_answers_snapshot() {
        let auth = AuthState::new();
        let subscription = SubscriptionState::new();
        let client = SubscriptionClient::new(None);

        let snapshot = check_subscription(&auth, &subscription, &client)
            .await
            .unwrap();
        assert!(!snapshot.is_subscribed);
        assert!(!snapshot.is_loading);
    }

    #[tokio::test]
    async fn test_initiate_requires_session() {
        let auth = AuthState::new();
        let subscription = SubscriptionState::new();
        let client = SubscriptionClient::new(None);

        let err = initiate_subscription(&auth, &subscription, &client)
            .await
            .unwrap_err();
        assert_eq!(err, "Por favor inicia sesión para suscribirte");
    }

    #[tokio::test]
    async fn test_portal_without_session_is_silent() {
        let auth = AuthState::new();
        let subscription = SubscriptionState::new();
        let client = SubscriptionClient::new(None);

        let result = customer_portal(&auth, &subscription, &client)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_sync_after_signout_resets_without_network() {
        let auth = AuthState::new();
        let subscription = SubscriptionState::new();
        let client = SubscriptionClient::new(None);

        subscription.set_subscribed(true).unwrap();
        let snapshot = sync_with_user(&auth, &subscription, &client)
            .await
            .unwrap();

        assert!(!snapshot.is_subscribed);
        assert!(auth.snapshot().unwrap().user.is_none());
    }
}
