//! Common test utilities for integration tests.
//!
//! Fixtures for standing up a wiremock backend and a session wired to it.
//! Not every suite uses every helper.
#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lumen::adapters::ReqwestHttpClient;
use lumen::client::AssistantClient;
use lumen::session::Session;

/// Base path of the assistant API.
pub const API: &str = "/api/v1/assistant";

/// Install a test subscriber once so `RUST_LOG` surfaces core tracing.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a session talking to the given mock server.
pub fn session_for(server: &MockServer) -> Session<ReqwestHttpClient> {
    init_tracing();
    Session::new(AssistantClient::with_base_url(ReqwestHttpClient::new(), server.uri()))
}

/// Mount a chat response with a plain reply.
pub async fn mount_chat_reply(server: &MockServer, conversation_id: &str, reply: &str) {
    Mock::given(method("POST"))
        .and(path(format!("{}/chat", API)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"message": reply},
            "conversation_id": conversation_id,
            "requires_confirmation": false,
        })))
        .mount(server)
        .await;
}

/// Mount an empty conversation list.
pub async fn mount_empty_conversations(server: &MockServer) {
    mount_conversations(server, json!([])).await;
}

/// Mount a conversation list payload.
pub async fn mount_conversations(server: &MockServer, conversations: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("{}/conversations", API)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "conversations": conversations,
        })))
        .mount(server)
        .await;
}

/// Mount a message page for a conversation.
pub async fn mount_messages(
    server: &MockServer,
    conversation_id: &str,
    messages: serde_json::Value,
    has_more: bool,
) {
    Mock::given(method("GET"))
        .and(path(format!("{}/conversations/{}/messages", API, conversation_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "messages": messages,
            "has_more": has_more,
        })))
        .mount(server)
        .await;
}

/// Build `count` server messages ending at id `last_id`, alternating
/// user/assistant, with ascending ids and timestamps.
pub fn message_batch(last_id: i64, count: i64) -> serde_json::Value {
    let first_id = last_id - count + 1;
    let entries: Vec<serde_json::Value> = (first_id..=last_id)
        .map(|id| {
            let role = if id % 2 == 0 { "assistant" } else { "user" };
            json!({
                "id": id,
                "type": role,
                "content": format!("message {}", id),
                "timestamp": format!("2026-02-01T10:{:02}:00Z", (id % 60).max(0)),
            })
        })
        .collect();
    json!(entries)
}
