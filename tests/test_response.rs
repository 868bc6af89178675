use porter::http::cookie::SetCookie;
use porter::http::mime;
use porter::http::response::{Response, ResponseBuilder, StatusCode};
use porter::http::writer::{ResponseWriter, serialize_response};

fn wire_text(response: &Response) -> String {
    String::from_utf8_lossy(&serialize_response(response)).into_owned()
}

/// Reads the Content-Length header back out of serialized bytes.
fn content_length_of(bytes: &[u8]) -> usize {
    let end = bytes.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
    let head = std::str::from_utf8(&bytes[..end]).unwrap();
    head.split("\r\n")
        .find_map(|line| line.strip_prefix("Content-Length: "))
        .unwrap()
        .parse()
        .unwrap()
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::Found.as_u16(), 302);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Unauthorized.as_u16(), 401);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    assert_eq!(StatusCode::Found.reason_phrase(), "Found");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Unauthorized.reason_phrase(), "Unauthorized");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_defaults() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert_eq!(response.content_type, mime::TEXT_HTML);
    assert!(response.body.is_empty());
    assert!(response.location.is_none());
    assert!(response.set_cookie.is_none());
}

#[test]
fn test_response_redirect_helper() {
    let response = Response::redirect("/register.html");

    assert_eq!(response.status, StatusCode::Found);
    assert_eq!(response.location.as_deref(), Some("/register.html"));
}

#[test]
fn test_response_not_found_helper() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"404 Not Found".to_vec());
}

#[test]
fn test_serialize_plain_response() {
    let response = Response::ok("Hello world!");

    assert_eq!(
        wire_text(&response),
        "HTTP/1.1 200 OK\r\n\
         Content-Type: text/html;charset=utf-8\r\n\
         Content-Length: 12\r\n\
         \r\n\
         Hello world!"
    );
}

#[test]
fn test_serialize_header_order_with_redirect_and_cookie() {
    let response = ResponseBuilder::new(StatusCode::Found)
        .location("/index.html")
        .cookie(SetCookie::session("abc-123"))
        .build();

    assert_eq!(
        wire_text(&response),
        "HTTP/1.1 302 Found\r\n\
         Content-Type: text/html;charset=utf-8\r\n\
         Content-Length: 0\r\n\
         Location: /index.html\r\n\
         Set-Cookie: JSESSIONID=abc-123\r\n\
         \r\n"
    );
}

#[test]
fn test_serialized_content_length_matches_body_bytes() {
    let bodies: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"plain".to_vec(),
        "안녕하세요 – ünïcödé".as_bytes().to_vec(),
        vec![0, 159, 146, 150, 255],
    ];

    for body in bodies {
        let response = ResponseBuilder::new(StatusCode::Ok).body(body.clone()).build();
        let bytes = serialize_response(&response);

        assert_eq!(content_length_of(&bytes), body.len());
        assert!(bytes.ends_with(&body));
    }
}

#[tokio::test]
async fn test_response_writer_writes_everything() {
    let response = Response::ok("written");
    let mut out: Vec<u8> = Vec::new();

    ResponseWriter::new(&response)
        .write_to_stream(&mut out)
        .await
        .unwrap();

    assert_eq!(out, serialize_response(&response));
}
