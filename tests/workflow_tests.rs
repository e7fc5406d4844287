// Integration tests for the dashboard command surface
// These drive the command dispatcher the way the browser shell does.

use campania::config::AppConfig;
use campania::server::routes::route_command;
use campania::server::ServerAppState;
use serde_json::{json, Value};

fn new_state() -> ServerAppState {
    ServerAppState::new(AppConfig::default()).unwrap()
}

#[tokio::test]
async fn test_full_generation_workflow() {
    let state = new_state();

    // Fill in the campaign brief
    route_command(
        "update_business_info",
        json!({
            "name": "MediSalud Plus",
            "industry": "Salud",
            "keywords": "innovación, calidad"
        }),
        &state,
    )
    .await
    .unwrap();

    // Generate the bundle (includes the simulated latency)
    let content = route_command("generate_content", Value::Null, &state)
        .await
        .unwrap();
    assert_eq!(content["socialPosts"].as_array().unwrap().len(), 3);
    assert_eq!(content["emails"].as_array().unwrap().len(), 2);
    assert_eq!(content["slogans"].as_array().unwrap().len(), 2);
    assert_eq!(content["ads"].as_array().unwrap().len(), 2);

    // Regenerate one social post; its id survives, the text changes
    let updated = route_command(
        "regenerate_section",
        json!({ "section": "socialPosts", "id": 2 }),
        &state,
    )
    .await
    .unwrap();
    assert_eq!(updated["socialPosts"][1]["id"], 2);
    assert_ne!(
        updated["socialPosts"][1]["text"],
        content["socialPosts"][1]["text"]
    );
    assert_eq!(updated["emails"], content["emails"]);

    // The snapshot reflects the settled state
    let snapshot = route_command("get_content", Value::Null, &state)
        .await
        .unwrap();
    assert_eq!(snapshot["isGenerating"], false);
    assert_eq!(snapshot["content"], updated);

    // Templates become previewable once content exists
    let preview = route_command(
        "preview_template",
        json!({ "categoryId": "email", "templateId": 1 }),
        &state,
    )
    .await
    .unwrap();
    assert_eq!(preview["templateName"], "Newsletter Mensual");
    assert!(preview["excerpt"]
        .as_str()
        .unwrap()
        .starts_with("Asunto: "));
}

#[tokio::test]
async fn test_module_switching_and_route_gate() {
    let state = new_state();

    // Disable the active module; the shell gets the placeholder view
    route_command("toggle_module", json!({ "module": "input" }), &state)
        .await
        .unwrap();
    let view = route_command("get_active_view", Value::Null, &state)
        .await
        .unwrap();
    assert_eq!(view["status"], "disabled");

    // Switching to another module works regardless
    route_command("set_active_module", json!({ "module": "analytics" }), &state)
        .await
        .unwrap();
    let view = route_command("get_active_view", Value::Null, &state)
        .await
        .unwrap();
    assert_eq!(view, json!({ "status": "active", "module": "analytics" }));

    // Signed-out visitors are bounced from protected routes
    let resolved = route_command("resolve_route", json!({ "path": "/" }), &state)
        .await
        .unwrap();
    assert_eq!(resolved["decision"], "redirect_to_auth");

    let resolved = route_command("resolve_route", json!({ "path": "/auth" }), &state)
        .await
        .unwrap();
    assert_eq!(resolved["decision"], "render");
}

#[tokio::test]
async fn test_gateway_commands_without_collaborator() {
    let state = new_state();

    // Validation runs before the collaborator is consulted
    let err = route_command(
        "signup",
        json!({ "email": "a@b.com", "password": "corta", "confirmPassword": "corta" }),
        &state,
    )
    .await
    .unwrap_err();
    assert_eq!(err, "La contraseña debe tener al menos 8 caracteres");

    // With valid input the unconfigured gateway reports itself
    let err = route_command(
        "login",
        json!({ "email": "a@b.com", "password": "secret123" }),
        &state,
    )
    .await
    .unwrap_err();
    assert_eq!(err, "Servicio externo no configurado");

    // Billing commands degrade the same way
    let snapshot = route_command("check_subscription", Value::Null, &state)
        .await
        .unwrap();
    assert_eq!(snapshot["isSubscribed"], false);
}
