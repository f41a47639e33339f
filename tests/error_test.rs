//! Error case tests
//!
//! Verifies error construction, conversion, and display texts.

use eemis_lookup::classifier;
use eemis_lookup::error::LookupError;

/// Unrecognized query shapes surface as a dedicated error variant
#[test]
fn test_unrecognized_query_variant() {
    let result = classifier::classify("12345678901");
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, LookupError::UnrecognizedQuery(_)));
}

/// LookupError Display implementations
#[test]
fn test_error_display() {
    let errors = vec![
        LookupError::Config("test config error".to_string()),
        LookupError::EmptyQuery,
        LookupError::UnrecognizedQuery("x1".to_string()),
        LookupError::UpstreamStatus(500),
        LookupError::MalformedResponse("expected a JSON object".to_string()),
        LookupError::PhotoDecode("bad padding".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty error message: {:?}", err);
    }
}

/// The upstream status error names the status code
#[test]
fn test_upstream_status_message() {
    let err = LookupError::UpstreamStatus(503);
    assert!(format!("{}", err).contains("503"));
}

/// Debug implementation
#[test]
fn test_error_debug() {
    let err = LookupError::Config("test".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("test"));
}

/// IO error conversion
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: LookupError = io_err.into();

    assert!(matches!(err, LookupError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSON error conversion
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: LookupError = json_err.into();

    assert!(matches!(err, LookupError::JsonParse(_)));
}
