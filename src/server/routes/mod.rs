//! Command routing modules
//!
//! This module organizes command routing into focused sub-modules by domain:
//! - module_routes: Module registry commands
//! - business_routes: Business info commands
//! - content_routes: Content generation commands
//! - auth_routes: Auth session commands
//! - subscription_routes: Subscription/billing commands
//! - shell_routes: Routing, template catalog and analytics commands

pub mod auth_routes;
pub mod business_routes;
pub mod content_routes;
pub mod module_routes;
pub mod shell_routes;
pub mod subscription_routes;

use serde_json::Value;

use super::ServerAppState;

// =============================================================================
// Helper functions for use by route modules
// =============================================================================

/// Extract a required argument from JSON args
pub fn get_arg<T: serde::de::DeserializeOwned>(args: &Value, name: &str) -> Result<T, String> {
    serde_json::from_value(
        args.get(name)
            .ok_or_else(|| format!("Missing argument: {}", name))?
            .clone(),
    )
    .map_err(|e| format!("Invalid argument {}: {}", name, e))
}

/// Extract an optional argument from JSON args
pub fn get_opt_arg<T: serde::de::DeserializeOwned>(
    args: &Value,
    name: &str,
) -> Result<Option<T>, String> {
    match args.get(name) {
        Some(v) if !v.is_null() => serde_json::from_value(v.clone())
            .map(Some)
            .map_err(|e| format!("Invalid argument {}: {}", name, e)),
        _ => Ok(None),
    }
}

// =============================================================================
// Command Routing Macros
// =============================================================================

/// Routes an async command: awaits the handler, serializes the result
#[macro_export]
macro_rules! route_async {
    ($handler:expr) => {{
        let result = $handler.await?;
        serde_json::to_value(result).map_err(|e| e.to_string())
    }};
}

/// Routes a sync command
#[macro_export]
macro_rules! route_sync {
    ($handler:expr) => {{
        let result = $handler?;
        serde_json::to_value(result).map_err(|e| e.to_string())
    }};
}

/// Routes an async command that returns ()
#[macro_export]
macro_rules! route_unit_async {
    ($handler:expr) => {{
        $handler.await?;
        Ok(serde_json::Value::Null)
    }};
}

// Re-export macros for use in route modules
pub use route_async;
pub use route_sync;
pub use route_unit_async;

// =============================================================================
// Main Command Dispatcher
// =============================================================================

/// Route a command to its implementation by dispatching to the appropriate
/// sub-router
pub async fn route_command(
    cmd: &str,
    args: Value,
    state: &ServerAppState,
) -> Result<Value, String> {
    if module_routes::is_module_command(cmd) {
        return module_routes::route_module_command(cmd, args, state).await;
    }

    if business_routes::is_business_command(cmd) {
        return business_routes::route_business_command(cmd, args, state).await;
    }

    if content_routes::is_content_command(cmd) {
        return content_routes::route_content_command(cmd, args, state).await;
    }

    if auth_routes::is_auth_command(cmd) {
        return auth_routes::route_auth_command(cmd, args, state).await;
    }

    if subscription_routes::is_subscription_command(cmd) {
        return subscription_routes::route_subscription_command(cmd, args, state).await;
    }

    if shell_routes::is_shell_command(cmd) {
        return shell_routes::route_shell_command(cmd, args, state).await;
    }

    Err(format!("Unknown command: {}", cmd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn test_state() -> ServerAppState {
        ServerAppState::new(AppConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let state = test_state();
        let err = route_command("explode", Value::Null, &state)
            .await
            .unwrap_err();
        assert_eq!(err, "Unknown command: explode");
    }

    #[test]
    fn test_get_arg() {
        let args = serde_json::json!({ "name": "Mi Negocio", "id": 2 });
        let name: String = get_arg(&args, "name").unwrap();
        assert_eq!(name, "Mi Negocio");
        let id: u32 = get_arg(&args, "id").unwrap();
        assert_eq!(id, 2);
        assert!(get_arg::<String>(&args, "missing").is_err());
    }

    #[test]
    fn test_get_opt_arg_treats_null_as_absent() {
        let args = serde_json::json!({ "id": null });
        let id: Option<u32> = get_opt_arg(&args, "id").unwrap();
        assert!(id.is_none());
    }
}
