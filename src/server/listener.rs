use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket, lookup_host};
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::config::Config;
use crate::files::{Resolver, Sandbox};
use crate::http::connection::{Connection, ConnectionContext};

/// Pause after a failed accept so a persistent error (e.g. fd exhaustion)
/// does not spin the loop.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(50);

pub struct Listener {
    inner: TcpListener,
}

impl Listener {
    /// Binds the first wildcard address that accepts `port` and starts
    /// listening with the given backlog.
    pub async fn bind(port: &str, backlog: u32) -> anyhow::Result<Self> {
        let mut last_err: Option<io::Error> = None;

        for candidate in [format!("0.0.0.0:{port}"), format!("[::]:{port}")] {
            let addrs = match lookup_host(candidate.as_str()).await {
                Ok(addrs) => addrs,
                Err(e) => {
                    last_err = Some(e);
                    continue;
                }
            };

            for addr in addrs {
                match listen_on(addr, backlog) {
                    Ok(inner) => {
                        info!("Listening on {}", inner.local_addr()?);
                        return Ok(Self { inner });
                    }
                    Err(e) => last_err = Some(e),
                }
            }
        }

        let err = last_err.unwrap_or_else(|| io::Error::other("no candidate address"));
        Err(err).with_context(|| format!("failed to bind port {port}"))
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    /// Accepts connections forever, one task per connection, at most
    /// `max_connections` active at once.
    pub async fn serve(self, ctx: Arc<ConnectionContext>) -> anyhow::Result<()> {
        let slots = Arc::new(Semaphore::new(ctx.config.server.max_connections));

        loop {
            let permit = Arc::clone(&slots)
                .acquire_owned()
                .await
                .context("connection limiter closed")?;

            let (socket, peer) = match self.inner.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!(error = %e, "Failed to accept connection");
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let ctx = Arc::clone(&ctx);
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, peer, ctx);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {:#}", peer, e);
                }
                drop(permit);
            });
        }
    }
}

fn listen_on(addr: SocketAddr, backlog: u32) -> io::Result<TcpListener> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;
    socket.listen(backlog)
}

/// Builds the shared context from `cfg`, binds `port` and serves forever.
pub async fn run(port: &str, cfg: &Config) -> anyhow::Result<()> {
    let sandbox = Sandbox::new(&cfg.static_files.root)?;
    info!("Serving files from {}", sandbox.root().display());

    let ctx = Arc::new(ConnectionContext {
        resolver: Resolver::new(sandbox),
        config: cfg.clone(),
    });

    let listener = Listener::bind(port, cfg.server.backlog).await?;
    listener.serve(ctx).await
}
