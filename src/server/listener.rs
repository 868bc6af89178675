use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::app::resources::FsResources;
use crate::app::router::Router;
use crate::app::users::InMemoryUserRepository;
use crate::config::Config;
use crate::http::connection::Connection;
use crate::session::SessionStore;

/// Wires a router to the configured resource root and seed users, with an
/// empty session store.
pub fn build_router(cfg: &Config) -> Router {
    let users = InMemoryUserRepository::with_users(cfg.users.iter().cloned());
    let resources = FsResources::new(&cfg.static_files.root);

    Router::new(SessionStore::new(), Arc::new(users), Arc::new(resources))
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.listen_addr))?;
    info!("Listening on {}", cfg.server.listen_addr);

    let router = Arc::new(build_router(cfg));
    serve(listener, router, cfg.read_timeout()).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve(
    listener: TcpListener,
    router: Arc<Router>,
    read_timeout: Option<Duration>,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let conn = Connection::new(socket, router).with_read_timeout(read_timeout);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
