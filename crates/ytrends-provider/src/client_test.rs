use super::*;

fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        log_level: "warn".to_owned(),
        base_url: base_url.to_owned(),
        geo: "ID".to_owned(),
        host_language: "id-ID".to_owned(),
        tz_offset_minutes: 420,
        user_agent: "ytrends-test/0.1".to_owned(),
        connect_timeout_secs: 10,
        read_timeout_secs: 25,
    }
}

fn test_client(base_url: &str) -> TrendsClient {
    TrendsClient::new(&test_config(base_url)).expect("client construction should not fail")
}

#[test]
fn build_url_prefixes_language_and_offset() {
    let client = test_client("https://trends.google.com");
    let url = client.build_url("trends/api/explore", &[("req", "{}")]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://trends.google.com/trends/api/explore?hl=id-ID&tz=420&req=%7B%7D"
    );
}

#[test]
fn build_url_strips_trailing_slash() {
    let client = test_client("https://trends.google.com/");
    let url = client.build_url("trends/explore", &[("geo", "ID")]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://trends.google.com/trends/explore?hl=id-ID&tz=420&geo=ID"
    );
}

#[test]
fn build_url_keeps_base_path_prefix() {
    let client = test_client("http://127.0.0.1:8080/proxy");
    let url = client.build_url("trends/api/explore", &[]).unwrap();
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:8080/proxy/trends/api/explore?hl=id-ID&tz=420"
    );
}

#[test]
fn build_url_encodes_keyword_payload() {
    let client = test_client("https://trends.google.com");
    let url = client
        .build_url("trends/api/explore", &[("req", r#"{"keyword":"a & b"}"#)])
        .unwrap();
    assert!(
        url.as_str().contains("a+%26+b") || url.as_str().contains("a%20%26%20b"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn new_rejects_unparseable_base_url() {
    let result = TrendsClient::new(&test_config("not a url"));
    assert!(matches!(result, Err(TrendsError::InvalidBaseUrl { .. })));
}

#[test]
fn query_for_uses_configured_geo() {
    let client = test_client("https://trends.google.com");
    let query = client.query_for(ytrends_core::normalize("a").unwrap());
    assert_eq!(query.geo, "ID");
    assert_eq!(query.property, "youtube");
}
