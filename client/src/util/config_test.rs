use super::*;

#[test]
fn from_meta_normalizes_values() {
    let config = from_meta(Some("https://api.example.test/3/"), Some(" abc "));
    assert_eq!(config.base_url, "https://api.example.test/3");
    assert_eq!(config.api_key, "abc");
    assert!(config.is_configured());
}

#[test]
fn missing_meta_is_unconfigured() {
    assert!(!from_meta(None, None).is_configured());
    assert!(!from_meta(Some(catalog::DEFAULT_BASE_URL), None).is_configured());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_api_config_is_unconfigured_outside_browser() {
    assert_eq!(read_api_config(), ApiConfig::default());
}
