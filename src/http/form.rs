//! `application/x-www-form-urlencoded` bodies.
//!
//! Values are taken verbatim: there is no percent-decoding, and only the
//! first `=` of a pair separates name from value.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A `&`-separated segment had no `=`.
    MalformedPair(String),
    /// The body was not valid UTF-8.
    InvalidEncoding,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MalformedPair(segment) => {
                write!(f, "malformed form pair {:?}: missing '='", segment)
            }
            FormError::InvalidEncoding => write!(f, "form body is not valid UTF-8"),
        }
    }
}

impl std::error::Error for FormError {}

/// Decoded form fields, at most one value per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: HashMap<String, String>,
}

impl FormBody {
    /// Parses `k1=v1&k2=v2`. A repeated name keeps its last value.
    pub fn parse(body: &str) -> Result<Self, FormError> {
        let mut fields = HashMap::new();

        if body.is_empty() {
            return Ok(Self { fields });
        }

        for segment in body.split('&') {
            let (key, value) = segment
                .split_once('=')
                .ok_or_else(|| FormError::MalformedPair(segment.to_string()))?;
            fields.insert(key.to_string(), value.to_string());
        }

        Ok(Self { fields })
    }

    pub fn parse_bytes(body: &[u8]) -> Result<Self, FormError> {
        let body = std::str::from_utf8(body).map_err(|_| FormError::InvalidEncoding)?;
        Self::parse(body)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
