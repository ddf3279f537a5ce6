use upload_constraints::{Config, Error, BASE_URL_ENV, DEFAULT_TIMEOUT_SECONDS, TIMEOUT_ENV};

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.base_url, None);
    assert_eq!(config.timeout_seconds, None);
    assert_eq!(config.get_timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
}

#[test]
fn test_validate_valid_config() {
    let config = Config {
        base_url: Some("https://api.example.com".to_string()),
        timeout_seconds: Some(120),
    };

    assert!(config.validate().is_ok());
    assert_eq!(config.get_timeout_seconds(), 120);
}

#[test]
fn test_validate_missing_base_url() {
    let config = Config::default();

    match config.validate() {
        Err(Error::InvalidConfig(msg)) => assert_eq!(msg, "Base URL is not configured"),
        other => panic!("Expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_validate_empty_base_url() {
    let config = Config {
        base_url: Some("   ".to_string()),
        ..Default::default()
    };

    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn test_validate_malformed_base_url() {
    let config = Config {
        base_url: Some("backend:8000".to_string()),
        ..Default::default()
    };

    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn test_validate_zero_timeout() {
    let config = Config {
        base_url: Some("http://localhost:8000".to_string()),
        timeout_seconds: Some(0),
    };

    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let config = Config {
        base_url: Some("http://localhost:8000/".to_string()),
        ..Default::default()
    };

    assert_eq!(config.get_base_url(), "http://localhost:8000");
}

// The only test touching these variables, so it can run alongside the others.
#[test]
fn test_config_from_env() {
    std::env::set_var(BASE_URL_ENV, "http://backend.internal:8000");
    std::env::set_var(TIMEOUT_ENV, "45");

    let config = Config::from_env().unwrap();
    assert_eq!(
        config.base_url,
        Some("http://backend.internal:8000".to_string())
    );
    assert_eq!(config.timeout_seconds, Some(45));

    std::env::set_var(TIMEOUT_ENV, "soon");
    assert!(matches!(Config::from_env(), Err(Error::InvalidConfig(_))));

    std::env::set_var(BASE_URL_ENV, "");
    std::env::remove_var(TIMEOUT_ENV);

    let config = Config::from_env().unwrap();
    assert_eq!(config.base_url, None);
    assert_eq!(config.timeout_seconds, None);
    assert!(config.validate().is_err());

    std::env::remove_var(BASE_URL_ENV);
}
