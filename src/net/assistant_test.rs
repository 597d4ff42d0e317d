use super::*;
use crate::net::test_helpers::{dead_url, serve};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

async fn client_for(app: Router) -> AssistantClient {
    let base = serve(app).await;
    AssistantClient::new(format!("{base}/api/assistant/chat"), HttpTimeouts::default()).unwrap()
}

#[test]
fn parse_reply_extracts_text() {
    assert_eq!(parse_reply(r#"{"reply":"On its way"}"#).unwrap(), "On its way");
}

#[test]
fn parse_reply_missing_field_is_decode_error() {
    let err = parse_reply(r#"{"answer":"x"}"#).unwrap_err();
    assert!(matches!(err, ClientError::Decode { api: "Assistant", .. }));
}

#[tokio::test]
async fn post_chat_sends_order_id_and_message() {
    let app = Router::new().route(
        "/api/assistant/chat",
        post(|Json(body): Json<AssistantChatRequest>| async move {
            Json(json!({ "reply": format!("{}|{}", body.order_id, body.message) }))
        }),
    );
    let client = client_for(app).await;

    let reply = client.post_chat("abc", "Where is my package?").await.unwrap();
    assert_eq!(reply, "abc|Where is my package?");
}

#[tokio::test]
async fn post_chat_non_success_is_transport_error() {
    let app = Router::new().route(
        "/api/assistant/chat",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = client_for(app).await;

    let err = client.post_chat("abc", "hi").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { status: 500, .. }));
    assert_eq!(err.to_string(), "Assistant API error: 500 Internal Server Error");
}

#[tokio::test]
async fn post_chat_unreachable_is_network_error() {
    let base = dead_url().await;
    let client = AssistantClient::new(format!("{base}/api/assistant/chat"), HttpTimeouts::default()).unwrap();

    let err = client.post_chat("abc", "hi").await.unwrap_err();
    assert!(matches!(err, ClientError::Network { api: "Assistant", .. }));
}
