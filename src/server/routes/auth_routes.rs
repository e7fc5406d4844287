//! Auth session command routing
//!
//! Handles the login surface commands:
//! login, signup, logout, oauth_url, reset_password, get_session
//!
//! Commands that change the session re-derive the subscription state
//! afterward, mirroring the shell's reaction to a session change.

use crate::commands::{auth, subscription};
use crate::gateway::OAuthProvider;
use serde_json::Value;

use super::{get_arg, route_sync, route_unit_async, ServerAppState};

/// Route auth session commands
pub async fn route_auth_command(
    cmd: &str,
    args: Value,
    state: &ServerAppState,
) -> Result<Value, String> {
    match cmd {
        "get_session" => route_sync!(state.auth.snapshot()),

        "login" => {
            let email: String = get_arg(&args, "email")?;
            let password: String = get_arg(&args, "password")?;
            let snapshot = auth::login(&email, &password, &state.auth, &state.auth_client).await?;
            sync_subscription(state).await?;
            serde_json::to_value(snapshot).map_err(|e| e.to_string())
        }

        "signup" => {
            let email: String = get_arg(&args, "email")?;
            let password: String = get_arg(&args, "password")?;
            let confirm_password: String = get_arg(&args, "confirmPassword")?;
            let snapshot = auth::signup(
                &email,
                &password,
                &confirm_password,
                &state.auth,
                &state.auth_client,
            )
            .await?;
            sync_subscription(state).await?;
            serde_json::to_value(snapshot).map_err(|e| e.to_string())
        }

        "logout" => {
            let snapshot = auth::logout(&state.auth, &state.auth_client).await?;
            sync_subscription(state).await?;
            serde_json::to_value(snapshot).map_err(|e| e.to_string())
        }

        "oauth_url" => {
            let provider: String = get_arg(&args, "provider")?;
            let redirect_to: String = get_arg(&args, "redirectTo")?;
            let provider: OAuthProvider = provider.parse()?;
            let url = auth::oauth_url(provider, &redirect_to, &state.auth_client)?;
            serde_json::to_value(url).map_err(|e| e.to_string())
        }

        "reset_password" => {
            let email: String = get_arg(&args, "email")?;
            route_unit_async!(auth::reset_password(&email, &state.auth_client))
        }

        _ => Err(format!("Unknown auth command: {}", cmd)),
    }
}

async fn sync_subscription(state: &ServerAppState) -> Result<(), String> {
    subscription::sync_with_user(&state.auth, &state.subscription, &state.subscription_client)
        .await?;
    Ok(())
}

/// Check if a command is an auth session command
pub fn is_auth_command(cmd: &str) -> bool {
    matches!(
        cmd,
        "get_session" | "login" | "signup" | "logout" | "oauth_url" | "reset_password"
    )
}
