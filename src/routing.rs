// Route table and the protected-route gate

use serde::{Deserialize, Serialize};

/// The shell's route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Dashboard,
    Auth,
    Account,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Route::Dashboard,
            "/auth" => Route::Auth,
            "/account" => Route::Account,
            _ => Route::NotFound,
        }
    }

    /// Whether the route sits behind the auth/subscription gate.
    /// Subscription enforcement is a per-call choice of the gate, not a
    /// property of the route.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Account)
    }
}

/// Everything the gate needs to decide how to treat a protected route.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteContext {
    pub auth_loading: bool,
    pub is_authenticated: bool,
    pub require_subscription: bool,
    pub subscription_loading: bool,
    pub is_subscribed: bool,
}

/// What the shell should render for a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    /// A relevant state is still resolving; show the loading indicator.
    Loading,
    /// Not signed in; send to the login surface.
    RedirectToAuth,
    /// Signed in but not subscribed; send to the account page.
    RedirectToAccount,
    /// All checks passed; render the requested route.
    Render,
}

/// Decide what a protected route renders.
///
/// Checks are ordered: auth resolution, then authentication, then (only
/// when the route demands it) subscription resolution and the subscribed
/// flag. An unauthenticated visitor is redirected to login even while the
/// subscription state is still loading.
pub fn decide(ctx: &RouteContext) -> RouteDecision {
    if ctx.auth_loading {
        return RouteDecision::Loading;
    }
    if !ctx.is_authenticated {
        return RouteDecision::RedirectToAuth;
    }
    if ctx.require_subscription {
        if ctx.subscription_loading {
            return RouteDecision::Loading;
        }
        if !ctx.is_subscribed {
            return RouteDecision::RedirectToAccount;
        }
    }
    RouteDecision::Render
}
