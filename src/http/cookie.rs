//! `Cookie` / `Set-Cookie` handling.

use std::collections::HashMap;
use std::fmt;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "JSESSIONID";

/// Cookies sent by the client in a `Cookie` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookies {
    values: HashMap<String, String>,
}

impl Cookies {
    /// Parses `name1=value1; name2=value2`.
    ///
    /// An absent header yields no cookies. Segments without `=` are skipped.
    pub fn parse(header: Option<&str>) -> Self {
        let values = header
            .unwrap_or_default()
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .filter(|(name, _)| !name.is_empty())
            .collect();

        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// A single `Set-Cookie` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
}

impl SetCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `JSESSIONID=<id>`
    pub fn session(id: impl Into<String>) -> Self {
        Self::new(SESSION_COOKIE, id)
    }
}

impl fmt::Display for SetCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
