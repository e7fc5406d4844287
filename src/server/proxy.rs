//! Command proxy handler that routes HTTP requests to backend commands
//!
//! This implements the Command Proxy Pattern - a single /api/invoke
//! endpoint that routes to the command functions without modifying them.
//!
//! Command routing is organized into focused sub-modules in the `routes/`
//! directory:
//! - module_routes: Module registry commands
//! - business_routes: Business info commands
//! - content_routes: Content generation commands
//! - auth_routes: Auth session commands
//! - subscription_routes: Subscription/billing commands
//! - shell_routes: Routing, template catalog and analytics commands

use super::routes;
use super::ServerAppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for /api/invoke endpoint
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    /// Command name (e.g., "generate_content", "toggle_module")
    pub cmd: String,
    /// Command arguments as JSON object
    #[serde(default)]
    pub args: Value,
}

/// Response body for /api/invoke endpoint
#[derive(Debug, Serialize)]
pub struct InvokeResponse {
    /// Whether the command succeeded
    pub success: bool,
    /// Result data (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Error message (on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Error type for invoke handler
pub struct InvokeError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for InvokeError {
    fn into_response(self) -> Response {
        let body = InvokeResponse {
            success: false,
            data: None,
            error: Some(self.message),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Main invoke handler - routes commands to their implementations
pub async fn invoke_handler(
    State(state): State<ServerAppState>,
    Json(req): Json<InvokeRequest>,
) -> Result<Json<InvokeResponse>, InvokeError> {
    log::debug!("Invoke command: {} with args: {:?}", req.cmd, req.args);

    let result = routes::route_command(&req.cmd, req.args, &state).await;

    match result {
        Ok(data) => Ok(Json(InvokeResponse {
            success: true,
            data: Some(data),
            error: None,
        })),
        Err(e) => {
            log::warn!("Command {} failed: {}", req.cmd, e);
            Err(InvokeError {
                status: StatusCode::BAD_REQUEST,
                message: e,
            })
        }
    }
}
