//! Tests for the error system.

use onbrand::error::*;

#[test]
fn error_api_creation() {
    let err = OnBrandError::api(404, "Not found");
    assert!(matches!(&err, OnBrandError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "API error (status 404): Not found");
}

#[test]
fn error_categories_are_stable_for_major_variants() {
    let network_error = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "disk");
    let serde_error = serde_json::from_str::<serde_json::Value>("{not-json}").unwrap_err();
    let toml_error = toml::from_str::<toml::Table>("= broken").unwrap_err();

    let cases = vec![
        (OnBrandError::Authentication("bad-key".to_string()), ErrorCategory::Authentication),
        (OnBrandError::RateLimited { retry_after_ms: Some(1000) }, ErrorCategory::RateLimit),
        (OnBrandError::Configuration("bad-config".to_string()), ErrorCategory::Configuration),
        (OnBrandError::ConfigParse(toml_error), ErrorCategory::Configuration),
        (OnBrandError::Network(network_error), ErrorCategory::Network),
        (OnBrandError::Serialization(serde_error), ErrorCategory::Serialization),
        (OnBrandError::api(401, "Unauthorized"), ErrorCategory::Authentication),
        (OnBrandError::api(403, "Forbidden"), ErrorCategory::Authentication),
        (OnBrandError::api(429, "Rate limited"), ErrorCategory::RateLimit),
        (OnBrandError::api(503, "Server unavailable"), ErrorCategory::Server),
        (OnBrandError::api(400, "Content policy"), ErrorCategory::Api),
        (OnBrandError::Io(io_error), ErrorCategory::Unknown),
        (OnBrandError::InvalidArgument("bad-arg".to_string()), ErrorCategory::Unknown),
    ];

    for (error, expected) in cases {
        assert_eq!(error.category(), expected, "{error}");
    }
}

#[test]
fn categories_display_in_snake_case() {
    assert_eq!(ErrorCategory::RateLimit.to_string(), "rate_limit");
    assert_eq!(OnBrandError::api(502, "bad gateway").category().to_string(), "server");
}

#[test]
fn question_mark_converts_library_errors() {
    fn parse(raw: &str) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(raw)?)
    }

    assert!(matches!(parse("{"), Err(OnBrandError::Serialization(_))));
    assert!(parse("{}").is_ok());
}
