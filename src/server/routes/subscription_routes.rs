//! Subscription command routing
//!
//! Handles the billing commands:
//! get_subscription, check_subscription, initiate_subscription,
//! customer_portal

use crate::commands::subscription;
use serde_json::Value;

use super::{route_async, route_sync, ServerAppState};

/// Route subscription/billing commands
pub async fn route_subscription_command(
    cmd: &str,
    _args: Value,
    state: &ServerAppState,
) -> Result<Value, String> {
    match cmd {
        "get_subscription" => route_sync!(state.subscription.snapshot()),

        "check_subscription" => {
            route_async!(subscription::check_subscription(
                &state.auth,
                &state.subscription,
                &state.subscription_client
            ))
        }

        "initiate_subscription" => {
            route_async!(subscription::initiate_subscription(
                &state.auth,
                &state.subscription,
                &state.subscription_client
            ))
        }

        "customer_portal" => {
            route_async!(subscription::customer_portal(
                &state.auth,
                &state.subscription,
                &state.subscription_client
            ))
        }

        _ => Err(format!("Unknown subscription command: {}", cmd)),
    }
}

/// Check if a command is a subscription command
pub fn is_subscription_command(cmd: &str) -> bool {
    matches!(
        cmd,
        "get_subscription" | "check_subscription" | "initiate_subscription" | "customer_portal"
    )
}
