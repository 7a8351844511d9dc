use registration_client::log_with_context;
use registration_client::logging::{init_tracing, RequestContext};

#[tokio::test]
async fn test_structured_logging_macro() {
    init_tracing("registration_client=debug");

    // コンテキストなしのログ
    log_with_context!(tracing::Level::INFO, "Test message without context");

    // コンテキスト付きのログ
    let request_id = uuid::Uuid::new_v4();
    log_with_context!(
        tracing::Level::INFO,
        "Test message with context",
        "request_id" => request_id,
        "field" => "email",
        "operation" => "test"
    );

    log_with_context!(
        tracing::Level::ERROR,
        "Error occurred during test",
        "error" => "Test error",
        "request_id" => request_id
    );

    log_with_context!(
        tracing::Level::WARN,
        "Warning during test",
        "warning_type" => "test_warning"
    );

    log_with_context!(
        tracing::Level::DEBUG,
        "Debug information",
        "debug_data" => "test_data"
    );
}

#[test]
fn test_request_context_lifecycle() {
    init_tracing("registration_client=debug");

    let context = RequestContext::start("GET", "/api/user/submit-form");
    assert_eq!(context.method, "GET");
    assert_eq!(context.path, "/api/user/submit-form");
    assert!(uuid::Uuid::parse_str(&context.request_id).is_ok());

    context.complete(200);
    context.complete(404);
    context.complete(500);
    context.fail(&"connection refused");
}
