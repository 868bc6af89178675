use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::router::Router;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// One accepted client stream, good for exactly one request/response
/// exchange.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    router: Arc<Router>,
    read_timeout: Option<Duration>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            router,
            read_timeout: None,
        }
    }

    /// Bounds each read from the peer. Without it a peer that stops sending
    /// mid-request holds the connection open indefinitely.
    pub fn with_read_timeout(mut self, read_timeout: Option<Duration>) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Runs the exchange and then shuts the stream down, whatever the
    /// outcome. Errors are handed back for the caller to log; no response is
    /// sent for them.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.exchange().await;

        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!("Shutdown after exchange failed: {}", e);
        }

        result
    }

    async fn exchange(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    Some(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    None => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = self.router.dispatch(req).await;
                    tracing::info!(
                        method = req.method.as_str(),
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request handled"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until one full request (header block plus `Content-Length`
    /// body bytes) is buffered. Returns `None` if the peer closes without
    /// sending anything; closing partway through a request is an error.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            match parse_http_request(&self.buffer) {
                Ok((request, _consumed)) => {
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {}", e));
                }
            }

            let n = match self.read_timeout {
                Some(limit) => tokio::time::timeout(limit, self.stream.read_buf(&mut self.buffer))
                    .await
                    .context("timed out waiting for request data")??,
                None => self.stream.read_buf(&mut self.buffer).await?,
            };

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                return Err(anyhow::anyhow!(
                    "peer closed mid-request ({} bytes buffered)",
                    self.buffer.len()
                ));
            }
        }
    }
}
