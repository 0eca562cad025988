use crate::client::LlmClient;
use crate::generator::Generator;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LlmClient {
    LlmClient::new("test-key".to_owned(), server.uri()).unwrap()
}

#[tokio::test]
async fn test_success_on_first_attempt() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{
                "message": {
                    "content": "test response",
                    "role": "assistant"
                }
            }]
        })))
        .mount(&server)
        .await;

    let result = client.generate("hello").await.unwrap();
    assert_eq!(result, "test response");
}

#[tokio::test]
async fn test_retry_on_429_then_success() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{
                "message": {
                    "content": "success after retry",
                    "role": "assistant"
                }
            }]
        })))
        .mount(&server)
        .await;

    let result = client.generate("hello").await.unwrap();
    assert_eq!(result, "success after retry");
}

#[tokio::test]
async fn test_non_transient_status_fails_immediately() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, crate::LlmError::HttpStatus { code: 401, .. }));
}

#[tokio::test]
async fn test_empty_choices_is_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
        )
        .mount(&server)
        .await;

    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, crate::LlmError::EmptyResponse));
}
