use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::config::{Config, ParseErrorPolicy};
use crate::files::Resolver;
use crate::http::head::{HeadRead, read_head};
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::response::ResponseDescriptor;
use crate::http::writer::{open_body, stream_body, write_head, write_internal_error};

/// Read-only state shared by every worker.
#[derive(Debug)]
pub struct ConnectionContext {
    pub resolver: Resolver,
    pub config: Config,
}

pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    ctx: Arc<ConnectionContext>,
    state: ConnectionState,
}

#[derive(Debug)]
pub enum ConnectionState {
    Reading,
    Resolving(Request),
    Streaming(ResponseDescriptor),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, ctx: Arc<ConnectionContext>) -> Self {
        Self {
            stream,
            peer,
            ctx,
            state: ConnectionState::Reading,
        }
    }

    /// Drives one request to completion. The socket is released when the
    /// connection is dropped, whichever path led to `Closed`.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = self.read_request().await?;
                }

                ConnectionState::Resolving(req) => {
                    let response = self.ctx.resolver.resolve(&req.target).await;
                    debug!(
                        peer = %self.peer,
                        path = %req.target,
                        protocol = %req.protocol,
                        status = response.status.as_u16(),
                        reason = response.status.reason_phrase(),
                        "Resolved request"
                    );
                    self.state = ConnectionState::Streaming(response);
                }

                ConnectionState::Streaming(response) => {
                    self.respond(&response).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        // Peer may already be gone; nothing left to deliver either way.
        let _ = self.stream.shutdown().await;
        Ok(())
    }

    /// Reads and parses the request head, returning the next state.
    pub async fn read_request(&mut self) -> anyhow::Result<ConnectionState> {
        let limit = self.ctx.config.server.max_request_bytes;
        let mut reader = BufReader::new(&mut self.stream);

        let read_timeout = self.ctx.config.read_timeout();

        let head = match timeout(read_timeout, read_head(&mut reader, limit)).await {
            Ok(head) => head?,
            Err(_) => {
                warn!(peer = %self.peer, "Timed out waiting for request head");
                return Ok(ConnectionState::Closed);
            }
        };

        let parsed = match head {
            HeadRead::Closed => return Ok(ConnectionState::Closed),
            HeadRead::TooLarge => Err(ParseError::HeadTooLarge),
            HeadRead::Complete(bytes) => parse_request(&bytes),
        };

        match parsed {
            Ok(req) => Ok(ConnectionState::Resolving(req)),
            Err(e) => Ok(self.reject(e)),
        }
    }

    fn reject(&self, err: ParseError) -> ConnectionState {
        warn!(peer = %self.peer, error = %err, "Unparseable request");

        match self.ctx.config.static_files.on_parse_error {
            ParseErrorPolicy::BadRequest => {
                ConnectionState::Streaming(self.ctx.resolver.bad_request())
            }
            ParseErrorPolicy::Close => ConnectionState::Closed,
        }
    }

    async fn respond(&mut self, response: &ResponseDescriptor) -> anyhow::Result<()> {
        let style = self.ctx.config.static_files.content_type_style;
        let write_timeout = self.ctx.config.write_timeout();

        let mut body = match open_body(&response.body).await {
            Ok(file) => file,
            Err(e) => {
                error!(
                    peer = %self.peer,
                    error = %format!("{e:#}"),
                    "Resolved body could not be opened"
                );
                return write_internal_error(&mut self.stream, style, write_timeout).await;
            }
        };

        write_head(&mut self.stream, response, style, write_timeout).await?;
        let sent = stream_body(&mut body, &mut self.stream, write_timeout).await?;

        info!(
            peer = %self.peer,
            status = response.status.as_u16(),
            file = %response.body.path().display(),
            bytes = sent,
            "Response sent"
        );
        Ok(())
    }
}
