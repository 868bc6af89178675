use porter::http::form::FormError;
use porter::http::request::{Method, RequestBuilder};

#[test]
fn test_request_header_retrieval() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .header("Host", "example.com")
        .header("Content-Type", "text/html")
        .build()
        .unwrap();

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("text/html"));
    assert_eq!(req.header("host"), None);
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/login")
        .header("Content-Length", "42")
        .build()
        .unwrap();

    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_request_content_length_missing() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .build()
        .unwrap();

    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_content_length_invalid() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/login")
        .header("Content-Length", "not-a-number")
        .build()
        .unwrap();

    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_builder_defaults_version() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.1");
}

#[test]
fn test_builder_decodes_cookie_header() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/login")
        .header("Cookie", "JSESSIONID=656cef62-e3c4-40bc-a8df-94732920ed46")
        .build()
        .unwrap();

    assert_eq!(
        req.cookie("JSESSIONID"),
        Some("656cef62-e3c4-40bc-a8df-94732920ed46")
    );
}

#[test]
fn test_form_without_body_is_empty() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/register")
        .build()
        .unwrap();

    assert!(req.form().unwrap().is_empty());
}

#[test]
fn test_form_without_content_type_is_decoded() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/login")
        .body("account=admin&password=password")
        .build()
        .unwrap();

    let form = req.form().unwrap();
    assert_eq!(form.get("account"), Some("admin"));
    assert_eq!(form.get("password"), Some("password"));
}

#[test]
fn test_form_with_charset_parameter_is_decoded() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/login")
        .header("Content-Type", "application/x-www-form-urlencoded; charset=UTF-8")
        .body("account=admin")
        .build()
        .unwrap();

    assert_eq!(req.form().unwrap().get("account"), Some("admin"));
}

#[test]
fn test_form_with_other_content_type_is_ignored() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/login")
        .header("Content-Type", "application/json")
        .body(r#"{"account":"admin"}"#)
        .build()
        .unwrap();

    assert!(req.form().unwrap().is_empty());
}

#[test]
fn test_form_malformed_body_is_an_error() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/login")
        .body("account")
        .build()
        .unwrap();

    assert_eq!(
        req.form().unwrap_err(),
        FormError::MalformedPair("account".to_string())
    );
}
