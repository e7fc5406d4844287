//! Server application state shared across handlers

use crate::commands::auth::AuthState;
use crate::commands::business::BusinessState;
use crate::commands::content::ContentState;
use crate::commands::modules::ModuleRegistry;
use crate::commands::subscription::SubscriptionState;
use crate::config::AppConfig;
use crate::gateway::{AuthClient, ServiceCredentials, SubscriptionClient};
use std::sync::Arc;

/// Shared state for the server: the dashboard stores plus the clients for
/// the external auth/subscription collaborator.
#[derive(Clone)]
pub struct ServerAppState {
    /// Module registry (active module + enabled flags)
    pub modules: Arc<ModuleRegistry>,

    /// Business info store
    pub business: Arc<BusinessState>,

    /// Content generation state
    pub content: Arc<ContentState>,

    /// Auth session state
    pub auth: Arc<AuthState>,

    /// Subscription state
    pub subscription: Arc<SubscriptionState>,

    /// Client for the external identity service
    pub auth_client: Arc<AuthClient>,

    /// Client for the external subscription service
    pub subscription_client: Arc<SubscriptionClient>,

    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl ServerAppState {
    pub fn new(config: AppConfig) -> Result<Self, String> {
        let credentials = ServiceCredentials::from_config(&config);
        if credentials.is_none() {
            log::warn!("Auth/subscription collaborator not configured; gateway commands will fail");
        }

        Ok(Self {
            modules: Arc::new(ModuleRegistry::new()),
            business: Arc::new(BusinessState::new()),
            content: Arc::new(ContentState::new()?),
            auth: Arc::new(AuthState::new()),
            subscription: Arc::new(SubscriptionState::new()),
            auth_client: Arc::new(AuthClient::new(credentials.clone())),
            subscription_client: Arc::new(SubscriptionClient::new(credentials)),
            config: Arc::new(config),
        })
    }
}
