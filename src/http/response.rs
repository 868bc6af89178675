use crate::http::cookie::SetCookie;
use crate::http::mime;

/// HTTP status codes produced by the server.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): Account registered
/// - `Found` (302): Redirect after login or a rejected registration
/// - `BadRequest` (400): Malformed form body
/// - `Unauthorized` (401): Bad credentials
/// - `NotFound` (404): Resource not found
/// - `InternalServerError` (500): Server error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 302 Found
    Found,
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// ```
    /// # use porter::http::response::StatusCode;
    /// assert_eq!(StatusCode::Found.as_u16(), 302);
    /// assert_eq!(StatusCode::Unauthorized.as_u16(), 401);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::Found => 302,
            StatusCode::BadRequest => 400,
            StatusCode::Unauthorized => 401,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::Found => "Found",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A complete HTTP response ready to be sent to a client.
///
/// The header set is fixed: `Content-Type`, `Content-Length` (derived from
/// `body` when serialized), and optionally `Location` and `Set-Cookie`.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
    /// Redirect target, sent as `Location`
    pub location: Option<String>,
    pub set_cookie: Option<SetCookie>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Found)
///     .location("/index.html")
///     .cookie(SetCookie::session(id))
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: String,
    body: Vec<u8>,
    location: Option<String>,
    set_cookie: Option<SetCookie>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    ///
    /// The content type starts out as `text/html;charset=utf-8`.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: mime::TEXT_HTML.to_string(),
            body: Vec::new(),
            location: None,
            set_cookie: None,
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn cookie(mut self, cookie: SetCookie) -> Self {
        self.set_cookie = Some(cookie);
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            body: self.body,
            location: self.location,
            set_cookie: self.set_cookie,
        }
    }
}

impl Response {
    pub fn builder(status: StatusCode) -> ResponseBuilder {
        ResponseBuilder::new(status)
    }

    /// Creates a simple 200 OK HTML response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok).body(body).build()
    }

    /// Creates a 302 Found response pointing at `location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Found)
            .location(location)
            .build()
    }

    /// Creates a plain-text 400 Bad Request response.
    pub fn bad_request() -> Self {
        ResponseBuilder::new(StatusCode::BadRequest)
            .content_type(mime::TEXT_PLAIN)
            .body(b"400 Bad Request".to_vec())
            .build()
    }

    /// Creates a plain-text 404 Not Found response.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .content_type(mime::TEXT_PLAIN)
            .body(b"404 Not Found".to_vec())
            .build()
    }

    /// Creates a plain-text 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        ResponseBuilder::new(StatusCode::InternalServerError)
            .content_type(mime::TEXT_PLAIN)
            .body(b"500 Internal Server Error".to_vec())
            .build()
    }

    /// Value sent in the `Content-Length` header.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
