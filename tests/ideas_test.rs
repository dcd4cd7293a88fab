use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use inspireai::{
    modules::ideas::{fallback::fallback_ideas, model::Mode, pipeline::IdeaPipeline},
    services::llm::{LlmError, TextGenerator},
    AppState,
};
use serde_json::json;

enum Behaviour {
    Reply(&'static str),
    Fail,
    Hang,
    Panic,
}

struct StubProvider {
    behaviour: Behaviour,
    calls: AtomicUsize,
}

#[async_trait]
impl TextGenerator for StubProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::Reply(text) => Ok(text.to_string()),
            Behaviour::Fail => Err(LlmError::ApiError("503 Service Unavailable".to_string())),
            Behaviour::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok("1. Never seen by anyone at all".to_string())
            }
            Behaviour::Panic => panic!("provider exploded"),
        }
    }
}

fn setup_test_server(behaviour: Behaviour) -> (TestServer, Arc<StubProvider>) {
    let provider = Arc::new(StubProvider {
        behaviour,
        calls: AtomicUsize::new(0),
    });

    let state = AppState::new(IdeaPipeline::new(provider.clone(), Duration::from_millis(100)));
    let app = inspireai::api_router(state);

    (TestServer::new(app).unwrap(), provider)
}

fn ideas(body: &serde_json::Value) -> Vec<String> {
    body["ideas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_generate_returns_parsed_ideas() {
    let (server, provider) = setup_test_server(Behaviour::Reply(
        "1. Grow your audience fast\n2. X\n- Another solid idea here that qualifies\n\n3. Short",
    ));

    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "Marketing", "mode": "tweet" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(
        ideas(&body),
        vec!["Grow your audience fast", "Another solid idea here that qualifies"]
    );
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_generate_provider_failure_returns_fallback() {
    let (server, _) = setup_test_server(Behaviour::Fail);

    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "Fitness", "mode": "youtube" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(ideas(&body), fallback_ideas("Fitness", Mode::Youtube));
}

#[tokio::test]
async fn test_generate_unusable_reply_returns_fallback() {
    let (server, _) = setup_test_server(Behaviour::Reply("Sure!\n\nOk"));

    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "Fitness" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(ideas(&body), fallback_ideas("Fitness", Mode::Blog));
}

#[tokio::test]
async fn test_generate_timeout_returns_fallback() {
    let (server, _) = setup_test_server(Behaviour::Hang);

    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "Fitness", "mode": "tweet" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(ideas(&body), fallback_ideas("Fitness", Mode::Tweet));
}

#[tokio::test]
async fn test_generate_unknown_mode_uses_blog_fallback() {
    let (server, _) = setup_test_server(Behaviour::Fail);

    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "  Fitness  ", "mode": "poem" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    let result = ideas(&body);
    assert_eq!(result, fallback_ideas("Fitness", Mode::Blog));
    assert!(result.iter().all(|i| i.contains("Blog Titles")));
}

#[tokio::test]
async fn test_generate_accepts_topic_alias() {
    let (server, provider) = setup_test_server(Behaviour::Fail);

    let response = server
        .post("/api/generate")
        .json(&json!({ "topic": "Travel", "mode": "tweet" }))
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_generate_empty_prompt_fails() {
    let (server, provider) = setup_test_server(Behaviour::Fail);

    for mode in ["blog", "youtube", "tweet", "poem"] {
        let response = server
            .post("/api/generate")
            .json(&json!({ "prompt": "", "mode": mode }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Missing prompt");
    }

    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_missing_or_blank_prompt_fails() {
    let (server, provider) = setup_test_server(Behaviour::Fail);

    let missing = server.post("/api/generate").json(&json!({ "mode": "blog" })).await;
    missing.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = missing.json();
    assert_eq!(body["error"], "Missing prompt");

    let blank = server.post("/api/generate").json(&json!({ "prompt": "   " })).await;
    blank.assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_non_string_prompt_fails() {
    let (server, provider) = setup_test_server(Behaviour::Fail);

    for prompt in [json!(42), json!(true), json!(["Fitness"]), json!({ "topic": "Fitness" })] {
        let response = server.post("/api/generate").json(&json!({ "prompt": prompt })).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Missing prompt");
    }

    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_non_json_body_fails() {
    let (server, _) = setup_test_server(Behaviour::Fail);

    let response = server.post("/api/generate").text("Fitness").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_too_long_prompt_fails() {
    let (server, provider) = setup_test_server(Behaviour::Fail);

    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "x".repeat(101) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Prompt must be at most 100 characters");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_wrong_method_is_json_405() {
    let (server, provider) = setup_test_server(Behaviour::Fail);

    let response = server.get("/api/generate").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Method not allowed");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_internal_fault_is_500() {
    let (server, _) = setup_test_server(Behaviour::Panic);

    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "Fitness" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Failed to generate ideas");
}

#[tokio::test]
async fn test_generate_results_respect_bounds() {
    let reply = "1. A good idea for the list\n".repeat(12);
    let (server, _) = setup_test_server(Behaviour::Reply(Box::leak(reply.into_boxed_str())));

    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "Bounds" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    let result = ideas(&body);
    assert_eq!(result.len(), 8);
    for idea in result {
        let len = idea.chars().count();
        assert!(len > 10 && len < 200);
    }
}
