//! Server-side sessions
//!
//! A session ties a random identifier, handed to the browser in the
//! `JSESSIONID` cookie, to the user who logged in with it. Sessions are
//! created by the login flow and never modified or expired afterwards.

pub mod store;

pub use store::{Session, SessionStore, generate_session_id};
