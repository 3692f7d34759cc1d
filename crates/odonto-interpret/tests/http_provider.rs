use std::sync::Arc;

use mockito::Matcher;
use odonto_core::models::command::{CommandAction, InterpretationRequest};
use odonto_core::models::tooth::Dentition;
use odonto_core::vocabulary::Vocabulary;
use odonto_interpret::error::ProviderError;
use odonto_interpret::interpreter::Interpreter;
use odonto_interpret::messages;
use odonto_interpret::provider::{HttpProvider, InterpretationProvider};

fn request() -> InterpretationRequest {
    InterpretationRequest::new(
        "obturación realizada en oclusal del 36",
        &Vocabulary::for_dentition(Dentition::Permanent),
    )
}

const OK_BODY: &str = r#"{"action":"apply_treatment","toothNumber":36,"treatment":"obturacion","area":"oclusal","status":"realizado","confidence":0.88,"message":"Obturación realizada en oclusal del 36"}"#;

#[tokio::test]
async fn posts_request_and_parses_command() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/interpret")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJsonString(
            r#"{"transcript":"obturación realizada en oclusal del 36"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(OK_BODY)
        .create_async()
        .await;

    let provider = HttpProvider::new(format!("{}/interpret", server.url()));
    let cmd = provider.interpret(&request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(cmd.action, CommandAction::ApplyTreatment);
    assert_eq!(cmd.tooth_number, Some(36));
    assert_eq!(cmd.status.as_deref(), Some("realizado"));
}

#[tokio::test]
async fn sends_api_key_as_bearer_and_apikey_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/interpret")
        .match_header("authorization", "Bearer secret-key")
        .match_header("apikey", "secret-key")
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let provider = HttpProvider::new(format!("{}/interpret", server.url())).with_api_key("secret-key");
    provider.interpret(&request()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn uses_supplied_client() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/interpret")
        .match_header("user-agent", "odonto-test")
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = reqwest::Client::builder()
        .user_agent("odonto-test")
        .build()
        .unwrap();
    let provider = HttpProvider::new(format!("{}/interpret", server.url())).with_client(client);
    let cmd = provider.interpret(&request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(cmd.tooth_number, Some(36));
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/interpret")
        .with_status(429)
        .with_body(r#"{"error":"rate limited"}"#)
        .create_async()
        .await;

    let provider = HttpProvider::new(format!("{}/interpret", server.url()));
    let err = provider.interpret(&request()).await.unwrap_err();

    assert!(matches!(err, ProviderError::RateLimited));
}

#[tokio::test]
async fn interpreter_reports_rate_limit_without_failing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/interpret")
        .with_status(429)
        .expect(1)
        .create_async()
        .await;

    let provider = HttpProvider::new(format!("{}/interpret", server.url()));
    let interpreter = Interpreter::new(Arc::new(provider));
    let cmd = interpreter
        .interpret(
            "aplicar limpieza al 16",
            &Vocabulary::for_dentition(Dentition::Permanent),
        )
        .await;

    mock.assert_async().await;
    assert_eq!(cmd.action, CommandAction::Unknown);
    assert_eq!(cmd.confidence, 0.0);
    assert_eq!(cmd.message, messages::RATE_LIMITED);
}

#[tokio::test]
async fn payment_required_is_quota_exhausted() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/interpret")
        .with_status(402)
        .create_async()
        .await;

    let provider = HttpProvider::new(format!("{}/interpret", server.url()));
    let err = provider.interpret(&request()).await.unwrap_err();

    assert!(matches!(err, ProviderError::QuotaExhausted));
}

#[tokio::test]
async fn other_status_is_service_error_with_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/interpret")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let provider = HttpProvider::new(format!("{}/interpret", server.url()));
    let err = provider.interpret(&request()).await.unwrap_err();

    match err {
        ProviderError::Service { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected Service, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/interpret")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let provider = HttpProvider::new(format!("{}/interpret", server.url()));
    let err = provider.interpret(&request()).await.unwrap_err();

    assert!(matches!(err, ProviderError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    // Port 9 (discard) is closed on test hosts.
    let provider = HttpProvider::new("http://127.0.0.1:9/interpret");
    let err = provider.interpret(&request()).await.unwrap_err();

    assert!(matches!(err, ProviderError::Transport(_)));
}
