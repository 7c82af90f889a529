//! Drives `OpenAi` against an in-process stub of the chat-completions endpoint.

use std::sync::{Arc, Mutex};

use ai_client::{AiError, ChatAgent, OpenAi};
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
struct Captured {
    authorization: Option<String>,
    body: Value,
}

type Requests = Arc<Mutex<Vec<Captured>>>;

async fn spawn_stub(status: StatusCode, reply: Value) -> (String, Requests) {
    let requests: Requests = Arc::default();

    let app = Router::new()
        .route(
            "/v1/chat/completions",
            post(
                move |State(requests): State<Requests>,
                      headers: HeaderMap,
                      Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        let authorization = headers
                            .get(AUTHORIZATION)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        requests
                            .lock()
                            .unwrap()
                            .push(Captured { authorization, body });
                        (status, Json(reply))
                    }
                },
            ),
        )
        .with_state(requests.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1"), requests)
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17 }
    })
}

#[tokio::test]
async fn returns_first_choice_content() {
    let (base_url, requests) =
        spawn_stub(StatusCode::OK, completion(r#"{"filters": []}"#)).await;
    let ai = OpenAi::new("sk-test", "gpt-4").with_base_url(base_url);

    let text = ai
        .chat_completion("You convert queries to Ext JS filters.", "Input: hi")
        .await
        .unwrap();
    assert_eq!(text, r#"{"filters": []}"#);

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let captured = &requests[0];
    assert_eq!(captured.authorization.as_deref(), Some("Bearer sk-test"));
    assert_eq!(captured.body["model"], "gpt-4");
    assert_eq!(captured.body["n"], 1);
    assert_eq!(captured.body["messages"][0]["role"], "system");
    assert_eq!(
        captured.body["messages"][0]["content"],
        "You convert queries to Ext JS filters."
    );
    assert_eq!(captured.body["messages"][1]["role"], "user");
    assert_eq!(captured.body["messages"][1]["content"], "Input: hi");
}

#[tokio::test]
async fn error_status_maps_to_api_error() {
    let (base_url, _) = spawn_stub(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "Rate limit reached" } }),
    )
    .await;
    let ai = OpenAi::new("sk-test", "gpt-4").with_base_url(base_url);

    let err = ai.chat_completion("sys", "user").await.unwrap_err();
    match err {
        AiError::Api { status, body } => {
            assert_eq!(status, 429);
            assert!(body.contains("Rate limit reached"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_choices_maps_to_empty_response() {
    let (base_url, _) = spawn_stub(StatusCode::OK, json!({ "choices": [] })).await;
    let ai = OpenAi::new("sk-test", "gpt-4").with_base_url(base_url);

    let err = ai.chat_completion("sys", "user").await.unwrap_err();
    assert!(matches!(err, AiError::EmptyResponse), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let (base_url, _) = spawn_stub(StatusCode::OK, json!({ "choices": "nope" })).await;
    let ai = OpenAi::new("sk-test", "gpt-4").with_base_url(base_url);

    let err = ai.chat_completion("sys", "user").await.unwrap_err();
    assert!(matches!(err, AiError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_provider_maps_to_network_error() {
    // Bind then drop to get a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let ai = OpenAi::new("sk-test", "gpt-4").with_base_url(format!("http://{addr}/v1"));
    let err = ai.chat_completion("sys", "user").await.unwrap_err();
    assert!(matches!(err, AiError::Network(_)), "got {err:?}");
}
