use super::*;

#[test]
fn error_codes_are_stable() {
    assert_eq!(ApiError::Network("down".into()).error_code(), "E_NETWORK");
    assert_eq!(ApiError::Http { status: 404 }.error_code(), "E_HTTP");
    assert_eq!(ApiError::Decode("bad".into()).error_code(), "E_DECODE");
    assert_eq!(ApiError::Validation("x".into()).error_code(), "E_VALIDATION");
}

#[test]
fn http_error_display_includes_status() {
    assert_eq!(ApiError::Http { status: 500 }.to_string(), "HTTP error! status: 500");
}

#[test]
fn validation_display_is_the_bare_message() {
    assert_eq!(ApiError::Validation("Item ID is required".into()).to_string(), "Item ID is required");
}

#[test]
fn server_errors_and_network_failures_are_retryable() {
    assert!(ApiError::Network("timeout".into()).retryable());
    assert!(ApiError::Http { status: 503 }.retryable());
    assert!(ApiError::Http { status: 429 }.retryable());
    assert!(!ApiError::Http { status: 404 }.retryable());
    assert!(!ApiError::Validation("x".into()).retryable());
}

#[test]
fn serde_errors_convert_to_decode() {
    let err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
    assert_eq!(ApiError::from(err).error_code(), "E_DECODE");
}
