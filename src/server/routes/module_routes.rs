//! Module registry command routing
//!
//! Handles module switching and enable/disable commands:
//! get_modules, set_active_module, toggle_module, get_active_view

use crate::models::Module;
use serde_json::Value;

use super::{get_arg, route_sync, ServerAppState};

/// Route module registry commands
pub async fn route_module_command(
    cmd: &str,
    args: Value,
    state: &ServerAppState,
) -> Result<Value, String> {
    match cmd {
        "get_modules" => route_sync!(state.modules.snapshot()),

        "set_active_module" => {
            let name: String = get_arg(&args, "module")?;
            let module: Module = name.parse()?;
            route_sync!(state.modules.set_active_module(module))
        }

        "toggle_module" => {
            let name: String = get_arg(&args, "module")?;
            let module: Module = name.parse()?;
            route_sync!(state.modules.toggle_module(module))
        }

        "get_active_view" => route_sync!(state.modules.active_view()),

        _ => Err(format!("Unknown module command: {}", cmd)),
    }
}

/// Check if a command is a module registry command
pub fn is_module_command(cmd: &str) -> bool {
    matches!(
        cmd,
        "get_modules" | "set_active_module" | "toggle_module" | "get_active_view"
    )
}
