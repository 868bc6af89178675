//! Porter - minimal HTTP/1.1 login server
//!
//! Parses requests off raw sockets, routes them to login, registration and
//! static resource handlers, and tracks logged-in browsers through a
//! `JSESSIONID` cookie.

pub mod app;
pub mod config;
pub mod http;
pub mod server;
pub mod session;
