// ═══════════════════════════════════════════════════════════════════
// Error Tests — display formatting and conversions
// ═══════════════════════════════════════════════════════════════════

use finance_dashboard_core::errors::CoreError;

#[test]
fn missing_token_mentions_logging_in() {
    let msg = CoreError::MissingToken.to_string();
    assert!(msg.contains("log in"), "got: {msg}");
}

#[test]
fn unauthorized_mentions_the_status() {
    let msg = CoreError::Unauthorized.to_string();
    assert!(msg.contains("401"), "got: {msg}");
}

#[test]
fn api_error_carries_endpoint_status_and_message() {
    let err = CoreError::Api {
        endpoint: "/transaction".to_string(),
        status: 422,
        message: "amount must be positive".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("/transaction"), "got: {msg}");
    assert!(msg.contains("422"), "got: {msg}");
    assert!(msg.contains("amount must be positive"), "got: {msg}");
}

#[test]
fn network_error_displays_inner_message() {
    let msg = CoreError::Network("connection refused".to_string()).to_string();
    assert!(msg.contains("connection refused"), "got: {msg}");
}

#[test]
fn validation_error_displays_reason() {
    let msg = CoreError::ValidationError("name must not be empty".to_string()).to_string();
    assert!(msg.contains("name must not be empty"), "got: {msg}");
}

#[test]
fn rates_unavailable_displays_reason() {
    let msg = CoreError::RatesUnavailable("all providers failed".to_string()).to_string();
    assert!(msg.contains("all providers failed"), "got: {msg}");
}

#[test]
fn serde_errors_convert_to_deserialization() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: CoreError = parse_err.into();
    assert!(matches!(err, CoreError::Deserialization(_)));
}

#[test]
fn errors_implement_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<CoreError>();
}
