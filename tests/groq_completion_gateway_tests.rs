use std::sync::Arc;
use std::time::{Duration, Instant};

use mockito::Matcher;
use serde_json::json;

use inventory_ai::application::PROVIDER_UNAVAILABLE_MESSAGE;
use inventory_ai::{
    CompletionGateway, Conversation, DomainError, GroqCompletionGateway, QueryMediator,
};

fn gateway_for(base_url: &str) -> GroqCompletionGateway {
    GroqCompletionGateway::new(
        "test-key",
        "llama-3.3-70b-versatile",
        base_url,
        Duration::from_secs(5),
    )
}

fn conversation() -> Conversation {
    Conversation::new("system rules", "how many products?")
}

#[tokio::test]
async fn returns_first_choice_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "llama-3.3-70b-versatile",
            "messages": [
                {"role": "system", "content": "system rules"},
                {"role": "user", "content": "how many products?"}
            ],
            "response_format": {"type": "json_object"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "{\"type\":\"SQL\",\"content\":\"SELECT 1;\"}"}},
                    {"message": {"role": "assistant", "content": "ignored"}}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let text = gateway_for(&server.url())
        .complete(&conversation())
        .await
        .expect("completion");

    assert_eq!(text, r#"{"type":"SQL","content":"SELECT 1;"}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn http_error_is_generation_failure() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
        .expect(1)
        .create_async()
        .await;

    let result = gateway_for(&server.url()).complete(&conversation()).await;

    assert!(matches!(result, Err(DomainError::GenerationFailed(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn zero_choices_is_generation_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let result = gateway_for(&server.url()).complete(&conversation()).await;
    assert!(matches!(result, Err(DomainError::GenerationFailed(_))));
}

#[tokio::test]
async fn undecodable_body_is_generation_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("<html>gateway error</html>")
        .create_async()
        .await;

    let result = gateway_for(&server.url()).complete(&conversation()).await;
    assert!(matches!(result, Err(DomainError::GenerationFailed(_))));
}

#[tokio::test]
async fn unreachable_endpoint_is_generation_failure() {
    // Port 1 is reserved and refuses connections.
    let result = gateway_for("http://127.0.0.1:1").complete(&conversation()).await;
    assert!(matches!(result, Err(DomainError::GenerationFailed(_))));
}

/// Accepts connections and holds them open without ever answering.
async fn silent_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn slow_provider_times_out_as_generation_failure() {
    let base = silent_endpoint().await;
    let gateway = GroqCompletionGateway::new(
        "test-key",
        "llama-3.3-70b-versatile",
        base,
        Duration::from_millis(200),
    );

    let start = Instant::now();
    let result = gateway.complete(&conversation()).await;

    match result {
        Err(DomainError::GenerationFailed(reason)) => {
            assert!(reason.contains("timed out"), "unexpected reason: {reason}")
        }
        other => panic!("expected GenerationFailed, got {other:?}"),
    }
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn slow_provider_translates_to_provider_unavailable() {
    let base = silent_endpoint().await;
    let gateway = Arc::new(GroqCompletionGateway::new(
        "test-key",
        "llama-3.3-70b-versatile",
        base,
        Duration::from_millis(200),
    ));
    let mediator = QueryMediator::new(gateway);

    let start = Instant::now();
    let sql = mediator.translate("how many products?").await;

    assert_eq!(
        sql,
        format!("SELECT '{}' AS message;", PROVIDER_UNAVAILABLE_MESSAGE)
    );
    assert!(start.elapsed() < Duration::from_secs(5));
}
