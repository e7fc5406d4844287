//! Content generation command routing
//!
//! Handles the generation workflow commands:
//! generate_content, regenerate_section, get_content

use crate::models::ContentSection;
use serde_json::Value;

use super::{get_arg, get_opt_arg, route_async, route_sync, ServerAppState};

/// Route content generation commands
pub async fn route_content_command(
    cmd: &str,
    args: Value,
    state: &ServerAppState,
) -> Result<Value, String> {
    match cmd {
        "get_content" => route_sync!(state.content.snapshot()),

        "generate_content" => {
            let info = state.business.snapshot()?;
            route_async!(state.content.generate(&info))
        }

        "regenerate_section" => {
            let name: String = get_arg(&args, "section")?;
            let section: ContentSection = name.parse()?;
            let id: Option<u32> = get_opt_arg(&args, "id")?;
            let info = state.business.snapshot()?;
            route_async!(state.content.regenerate_section(section, id, &info))
        }

        _ => Err(format!("Unknown content command: {}", cmd)),
    }
}

/// Check if a command is a content generation command
pub fn is_content_command(cmd: &str) -> bool {
    matches!(
        cmd,
        "get_content" | "generate_content" | "regenerate_section"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    async fn seeded_state() -> ServerAppState {
        let state = ServerAppState::new(AppConfig::default()).unwrap();
        state
            .business
            .update(crate::models::BusinessInfoUpdate {
                name: Some("MediSalud Plus".to_string()),
                industry: Some("Salud".to_string()),
                keywords: Some("innovación".to_string()),
                ..Default::default()
            })
            .unwrap();
        state
    }

    #[tokio::test]
    async fn test_generate_requires_complete_brief() {
        let state = ServerAppState::new(AppConfig::default()).unwrap();
        let err = route_content_command("generate_content", Value::Null, &state)
            .await
            .unwrap_err();
        assert!(err.contains("Completa"));
    }

    #[tokio::test]
    async fn test_regenerate_before_generate_is_noop() {
        let state = seeded_state().await;
        let result = route_content_command(
            "regenerate_section",
            serde_json::json!({ "section": "socialPosts" }),
            &state,
        )
        .await
        .unwrap();
        assert!(result.is_null());
    }
}
