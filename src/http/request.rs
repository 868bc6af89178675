use std::collections::HashMap;

use crate::http::cookie::Cookies;
use crate::http::form::{FormBody, FormError};

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// HTTP request methods.
///
/// Only GET and POST are routed specially; every other method falls through
/// to the static resource lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Submit a form
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

/// Represents a parsed HTTP request from a client.
///
/// Headers are stored exactly as received (names are case-sensitive, values
/// are trimmed). `body` is only present when the client sent a non-zero
/// `Content-Length`.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target as sent on the request line (e.g., "/login")
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers as key-value pairs
    pub headers: HashMap<String, String>,
    /// Cookies decoded from the `Cookie` header
    pub cookies: Cookies,
    /// Request body, if any
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// Matching is case-sensitive.
    ///
    /// ```
    /// # use porter::http::request::Method;
    /// assert_eq!(Method::from_str("POST"), Some(Method::POST));
    /// assert_eq!(Method::from_str("post"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the body. An empty body is treated as no body at all.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        self.body = if body.is_empty() { None } else { Some(body) };
        self
    }

    /// Builds the request, decoding the `Cookie` header on the way.
    pub fn build(self) -> Result<Request, &'static str> {
        let cookies = Cookies::parse(self.headers.get("Cookie").map(String::as_str));

        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            cookies,
            body: self.body,
        })
    }
}

impl Request {
    /// Retrieves a header value by its exact name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Retrieves the Content-Length header value and parses it as a usize.
    ///
    /// Returns 0 if the header is missing or not a valid number.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// The request path without its query string.
    pub fn route_path(&self) -> &str {
        self.path
            .split_once('?')
            .map(|(path, _)| path)
            .unwrap_or(&self.path)
    }

    /// Looks up a cookie sent by the client.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name)
    }

    /// Decodes the body as a form.
    ///
    /// A missing body, or a body whose `Content-Type` is not form-encoded,
    /// yields an empty form. A request without any `Content-Type` is treated
    /// as form-encoded.
    pub fn form(&self) -> Result<FormBody, FormError> {
        let Some(body) = &self.body else {
            return Ok(FormBody::default());
        };

        let form_encoded = self
            .header("Content-Type")
            .map(|ct| {
                ct.split(';')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .eq_ignore_ascii_case(FORM_URLENCODED)
            })
            .unwrap_or(true);

        if !form_encoded {
            return Ok(FormBody::default());
        }

        FormBody::parse_bytes(body)
    }
}
