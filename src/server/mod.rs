//! HTTP server exposing the dashboard backend to the browser shell
//!
//! All state-changing operations go through the command proxy at
//! POST /api/invoke; the remaining routes are health/version plumbing.

mod proxy;
pub mod routes;
pub mod state;

pub use proxy::{invoke_handler, InvokeRequest, InvokeResponse};
pub use state::ServerAppState;

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue,
    },
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Version information for the server
#[derive(serde::Serialize)]
struct VersionInfo {
    version: String,
}

/// Run the HTTP server
pub async fn run_server(
    port: u16,
    bind: &str,
    state: ServerAppState,
    cors_origins: Option<Vec<String>>,
) -> Result<(), String> {
    // CORS must be the outermost layer so preflight OPTIONS requests are
    // answered before anything else. Explicit headers instead of Any to
    // avoid browser deprecation warnings with the Authorization header.
    let cors = match &cors_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods(Any)
                .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        }
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]),
    };

    let app = Router::new()
        .route("/api/invoke", post(proxy::invoke_handler))
        .route("/health", get(health_handler))
        .route("/api/version", get(version_handler))
        .route("/", get(index_handler))
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    let cors_display = match &cors_origins {
        Some(origins) if !origins.is_empty() => origins.join(", "),
        _ => "*".to_string(),
    };

    println!("CampañaAI backend");
    println!("  Server URL:   http://{}:{}", bind, port);
    println!("  CORS origins: {}", cors_display);
    println!("  Endpoints:");
    println!("    POST /api/invoke   - Command proxy");
    println!("    GET  /api/version  - Server version info");
    println!("    GET  /health       - Health check");

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))
}

/// Health check endpoint
async fn health_handler() -> &'static str {
    "OK"
}

/// Version endpoint
async fn version_handler() -> Json<VersionInfo> {
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Index handler - shows connection instructions
async fn index_handler() -> axum::response::Html<&'static str> {
    axum::response::Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>CampañaAI</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 600px;
            margin: 50px auto;
            padding: 20px;
            background: #1a1a2e;
            color: #eee;
        }
        h1 { color: #4ade80; }
        code {
            background: #2a2a4e;
            padding: 2px 6px;
            border-radius: 4px;
            font-family: 'Monaco', 'Consolas', monospace;
        }
        .endpoint { margin: 8px 0; }
    </style>
</head>
<body>
    <h1>CampañaAI backend</h1>
    <p>Generador de contenido de marketing. Conecta el panel web a este servidor.</p>
    <div class="endpoint"><code>POST /api/invoke</code> - Command proxy</div>
    <div class="endpoint"><code>GET /api/version</code> - Server version</div>
    <div class="endpoint"><code>GET /health</code> - Health check</div>
</body>
</html>"#,
    )
}
