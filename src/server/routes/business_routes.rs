//! Business info command routing
//!
//! Handles the campaign brief commands:
//! get_business_info, update_business_info, industry_suggestions,
//! get_objectives

use crate::commands::business;
use crate::models::BusinessInfoUpdate;
use serde_json::Value;

use super::{get_arg, get_opt_arg, route_sync, ServerAppState};

/// Route business info commands
pub async fn route_business_command(
    cmd: &str,
    args: Value,
    state: &ServerAppState,
) -> Result<Value, String> {
    match cmd {
        "get_business_info" => route_sync!(state.business.snapshot()),

        "update_business_info" => {
            let update = BusinessInfoUpdate {
                name: get_opt_arg(&args, "name")?,
                industry: get_opt_arg(&args, "industry")?,
                objective: get_opt_arg(&args, "objective")?,
                keywords: get_opt_arg(&args, "keywords")?,
            };
            route_sync!(state.business.update(update))
        }

        "industry_suggestions" => {
            let query: String = get_arg(&args, "query")?;
            serde_json::to_value(business::industry_suggestions(&query))
                .map_err(|e| e.to_string())
        }

        "get_objectives" => {
            serde_json::to_value(business::objectives()).map_err(|e| e.to_string())
        }

        _ => Err(format!("Unknown business command: {}", cmd)),
    }
}

/// Check if a command is a business info command
pub fn is_business_command(cmd: &str) -> bool {
    matches!(
        cmd,
        "get_business_info" | "update_business_info" | "industry_suggestions" | "get_objectives"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[tokio::test]
    async fn test_update_and_read_back() {
        let state = ServerAppState::new(AppConfig::default()).unwrap();

        let updated = route_business_command(
            "update_business_info",
            serde_json::json!({ "name": "MediSalud Plus", "industry": "Salud" }),
            &state,
        )
        .await
        .unwrap();
        assert_eq!(updated["name"], "MediSalud Plus");

        let info = route_business_command("get_business_info", Value::Null, &state)
            .await
            .unwrap();
        assert_eq!(info["industry"], "Salud");
        assert_eq!(info["objective"], "Lanzamiento");
    }

    #[tokio::test]
    async fn test_suggestions_command() {
        let state = ServerAppState::new(AppConfig::default()).unwrap();

        let suggestions = route_business_command(
            "industry_suggestions",
            serde_json::json!({ "query": "sal" }),
            &state,
        )
        .await
        .unwrap();
        assert!(suggestions
            .as_array()
            .unwrap()
            .contains(&Value::String("Salud".to_string())));
    }
}
