//! Request routing
//!
//! Maps a parsed request to a response. Routes are checked in order and the
//! first match wins:
//!
//! | Method       | Path        | Flow                          |
//! |--------------|-------------|-------------------------------|
//! | GET          | `/login`    | login page                    |
//! | POST         | `/login`    | login (401 / 302)             |
//! | GET          | `/`         | greeting                      |
//! | GET, POST    | `/register` | registration (200 / 201 / 302)|
//! | anything     | anything    | static resource (200 / 404)   |

use std::io;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::app::resources::{ResourceError, ResourceProvider};
use crate::app::users::{User, UserRepository};
use crate::http::cookie::{SESSION_COOKIE, SetCookie};
use crate::http::form::FormBody;
use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::session::{Session, SessionStore};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

pub const INDEX_PAGE: &str = "/index.html";
pub const LOGIN_PAGE: &str = "/login.html";
pub const REGISTER_PAGE: &str = "/register.html";
pub const UNAUTHORIZED_PAGE: &str = "/401.html";
pub const NOT_FOUND_PAGE: &str = "/404.html";

pub const GREETING: &str = "Hello world!";

/// Dispatches requests against the session store, the user repository and
/// the resource provider it was built with.
pub struct Router {
    sessions: SessionStore,
    users: Arc<dyn UserRepository>,
    resources: Arc<dyn ResourceProvider>,
}

impl Router {
    pub fn new(
        sessions: SessionStore,
        users: Arc<dyn UserRepository>,
        resources: Arc<dyn ResourceProvider>,
    ) -> Self {
        Self {
            sessions,
            users,
            resources,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Produces the response for `req`. Every outcome, failures included, is
    /// a well-formed response.
    pub async fn dispatch(&self, req: &Request) -> Response {
        let path = req.route_path();

        match (req.method, path) {
            (Method::GET, LOGIN_PATH) => self.page(StatusCode::Ok, LOGIN_PAGE).await,
            (Method::POST, LOGIN_PATH) => self.login(req).await,
            (Method::GET, HOME_PATH) => Response::ok(GREETING),
            (Method::GET | Method::POST, REGISTER_PATH) => self.register(req).await,
            _ => self.static_resource(path).await,
        }
    }

    async fn login(&self, req: &Request) -> Response {
        let Some(form) = Self::form(req) else {
            return Response::bad_request();
        };
        let account = form.get("account").unwrap_or_default();
        let password = form.get("password").unwrap_or_default();

        let Some(user) = self.users.find_by_account(account) else {
            warn!(account, "Login attempt for unknown account");
            return self.page(StatusCode::Unauthorized, UNAUTHORIZED_PAGE).await;
        };

        if !user.check_password(password) {
            warn!(account, "Login rejected: wrong password");
            return self.page(StatusCode::Unauthorized, UNAUTHORIZED_PAGE).await;
        }

        if let Some(id) = req.cookie(SESSION_COOKIE) {
            if let Some(session) = self.sessions.find(id).await {
                info!(account, "Login with existing session");
                return Self::login_redirect(session.id());
            }
        }

        let session = Session::for_user(user);
        let id = session.id().to_string();
        self.sessions.create(session).await;
        info!(account, "Login succeeded, session created");

        Self::login_redirect(&id)
    }

    fn login_redirect(session_id: &str) -> Response {
        Response::builder(StatusCode::Found)
            .location(INDEX_PAGE)
            .cookie(SetCookie::session(session_id))
            .build()
    }

    async fn register(&self, req: &Request) -> Response {
        let Some(form) = Self::form(req) else {
            return Response::bad_request();
        };

        if form.is_empty() {
            return self.page(StatusCode::Ok, REGISTER_PAGE).await;
        }

        let (Some(account), Some(password)) = (form.get("account"), form.get("password")) else {
            warn!("Registration without account or password");
            return Response::bad_request();
        };

        if account.is_empty() || password.is_empty() {
            warn!("Registration with empty account or password");
            return Response::bad_request();
        }

        let user = User::new(account, password, form.get("email").unwrap_or_default());

        if !self.users.save(user) {
            warn!(account, "Registration rejected: account exists");
            return Response::redirect(REGISTER_PAGE);
        }

        info!(account, "Account registered");
        self.page(StatusCode::Created, LOGIN_PAGE).await
    }

    async fn static_resource(&self, path: &str) -> Response {
        match self.load(path).await {
            Ok(body) => Response::builder(StatusCode::Ok)
                .content_type(mime::from_path(path))
                .body(body)
                .build(),
            Err(ResourceError::NotFound(_)) => {
                debug!(path, "Static resource not found");
                self.page(StatusCode::NotFound, NOT_FOUND_PAGE).await
            }
            Err(e) => {
                error!(path, error = %e, "Static resource read failed");
                Response::internal_error()
            }
        }
    }

    /// Serves the page at `path` with `status`. A missing page degrades to
    /// a plain-text body carrying the same status.
    async fn page(&self, status: StatusCode, path: &str) -> Response {
        match self.load(path).await {
            Ok(body) => Response::builder(status)
                .content_type(mime::from_path(path))
                .body(body)
                .build(),
            Err(ResourceError::NotFound(_)) => {
                warn!(path, "Page missing from resource root");
                Response::builder(status)
                    .content_type(mime::TEXT_PLAIN)
                    .body(format!("{} {}", status.as_u16(), status.reason_phrase()))
                    .build()
            }
            Err(e) => {
                error!(path, error = %e, "Page read failed");
                Response::internal_error()
            }
        }
    }

    /// Reads a resource on tokio's blocking thread pool.
    async fn load(&self, path: &str) -> Result<Vec<u8>, ResourceError> {
        let resources = Arc::clone(&self.resources);
        let path = path.to_string();

        tokio::task::spawn_blocking(move || resources.read(&path))
            .await
            .unwrap_or_else(|e| Err(ResourceError::Io(io::Error::other(e))))
    }

    fn form(req: &Request) -> Option<FormBody> {
        req.form()
            .inspect_err(|e| warn!(path = %req.path, error = %e, "Rejected form body"))
            .ok()
    }
}
