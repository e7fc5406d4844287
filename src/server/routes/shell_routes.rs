//! Presentation shell command routing
//!
//! Handles routing, template catalog and analytics commands:
//! resolve_route, get_template_catalog, preview_template,
//! get_analytics_report

use crate::commands::{analytics, catalog};
use crate::routing::{self, Route, RouteContext, RouteDecision};
use serde::Serialize;
use serde_json::Value;

use super::{get_arg, get_opt_arg, ServerAppState};

/// Outcome of resolving a path against the gate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedRoute {
    route: Route,
    decision: RouteDecision,
}

/// Route presentation shell commands
pub async fn route_shell_command(
    cmd: &str,
    args: Value,
    state: &ServerAppState,
) -> Result<Value, String> {
    match cmd {
        "resolve_route" => {
            let path: String = get_arg(&args, "path")?;
            let require_subscription: Option<bool> = get_opt_arg(&args, "requireSubscription")?;

            let route = Route::from_path(&path);
            let decision = if route.is_protected() {
                let auth = state.auth.snapshot()?;
                let subscription = state.subscription.snapshot()?;
                routing::decide(&RouteContext {
                    auth_loading: auth.is_loading,
                    is_authenticated: auth.is_authenticated,
                    require_subscription: require_subscription.unwrap_or(false),
                    subscription_loading: subscription.is_loading,
                    is_subscribed: subscription.is_subscribed,
                })
            } else {
                RouteDecision::Render
            };

            serde_json::to_value(ResolvedRoute { route, decision }).map_err(|e| e.to_string())
        }

        "get_template_catalog" => {
            serde_json::to_value(catalog::catalog()).map_err(|e| e.to_string())
        }

        "preview_template" => {
            let category_id: String = get_arg(&args, "categoryId")?;
            let template_id: u32 = get_arg(&args, "templateId")?;
            let info = state.business.snapshot()?;
            let content = state.content.snapshot()?;
            let preview =
                catalog::preview(&category_id, template_id, &info, content.content.as_ref())?;
            serde_json::to_value(preview).map_err(|e| e.to_string())
        }

        "get_analytics_report" => {
            let info = state.business.snapshot()?;
            serde_json::to_value(analytics::report(&info)).map_err(|e| e.to_string())
        }

        _ => Err(format!("Unknown shell command: {}", cmd)),
    }
}

/// Check if a command is a presentation shell command
pub fn is_shell_command(cmd: &str) -> bool {
    matches!(
        cmd,
        "resolve_route" | "get_template_catalog" | "preview_template" | "get_analytics_report"
    )
}
