//! Login Server
//!
//! Async TCP server for the login handshake.
//! Accepts connections, frames packets and feeds them to the [`LoginService`].

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use futures_util::{FutureExt, SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{broadcast, RwLock};
use tokio_util::codec::Framed;
use tracing::{debug, error, info, instrument, warn};

use crate::login::config::{parse_env, ConfigError};
use crate::login::{HandlerError, LoginService};
use crate::network::protocol::{frame_codec, DEFAULT_MAX_FRAME_LEN};
use crate::network::session::Session;
use crate::store::LoginStore;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub bind_addr: SocketAddr,
    /// Maximum concurrent connections.
    pub max_connections: usize,
    /// Largest accepted inbound frame, in bytes.
    pub max_frame_len: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8484)),
            max_connections: 1000,
            max_frame_len: DEFAULT_MAX_FRAME_LEN,
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables, falling back to defaults.
    ///
    /// - `LOGIN_BIND_ADDR`
    /// - `LOGIN_MAX_CONNECTIONS`
    /// - `LOGIN_MAX_FRAME_LEN`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = parse_env("LOGIN_BIND_ADDR")? {
            config.bind_addr = v;
        }
        if let Some(v) = parse_env("LOGIN_MAX_CONNECTIONS")? {
            config.max_connections = v;
        }
        if let Some(v) = parse_env("LOGIN_MAX_FRAME_LEN")? {
            config.max_frame_len = v;
        }

        if config.max_frame_len == 0 {
            return Err(ConfigError::OutOfRange("max_frame_len must be at least 1".into()));
        }
        Ok(config)
    }
}

/// Login server errors.
#[derive(Debug, thiserror::Error)]
pub enum LoginServerError {
    /// Socket or framing failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A handler failed in a way that ends the connection.
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    /// Invalid configuration.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Connected client bookkeeping.
struct ConnectedClient {
    /// Connection time.
    connected_at: Instant,
}

/// The login server.
pub struct LoginServer<S> {
    /// Server configuration.
    config: ServerConfig,
    /// Handshake handlers and shared state.
    service: LoginService<S>,
    /// Connected clients.
    clients: Arc<RwLock<BTreeMap<SocketAddr, ConnectedClient>>>,
    /// Shutdown signal.
    shutdown_tx: broadcast::Sender<()>,
}

impl<S: LoginStore> LoginServer<S> {
    /// Create a new login server.
    pub fn new(config: ServerConfig, service: LoginService<S>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            config,
            service,
            clients: Arc::new(RwLock::new(BTreeMap::new())),
            shutdown_tx,
        }
    }

    /// Bind the configured address and run until shutdown.
    pub async fn run(&self) -> Result<(), LoginServerError> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        info!("Login server listening on {}", self.config.bind_addr);
        self.serve(listener).await
    }

    /// Accept connections on `listener` until shutdown.
    #[instrument(skip(self, listener))]
    pub async fn serve(&self, listener: TcpListener) -> Result<(), LoginServerError> {
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        loop {
            tokio::select! {
                result = listener.accept() => {
                    match result {
                        Ok((stream, addr)) => {
                            // Counted before the task is spawned; the task only unregisters
                            {
                                let mut clients = self.clients.write().await;
                                if clients.len() >= self.config.max_connections {
                                    warn!("Connection limit reached, rejecting {}", addr);
                                    continue;
                                }
                                clients.insert(addr, ConnectedClient { connected_at: Instant::now() });
                            }

                            info!("New connection from {}", addr);
                            self.handle_connection(stream, addr);
                        }
                        Err(e) => {
                            error!("Accept error: {}", e);
                        }
                    }
                }
                _ = shutdown_rx.recv() => {
                    info!("Shutdown signal received");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Spawn the task that owns one connection and its session. The client
    /// must already be registered; the task unregisters it on exit.
    fn handle_connection(&self, stream: TcpStream, addr: SocketAddr) {
        let clients = self.clients.clone();
        let service = self.service.clone();
        let max_frame_len = self.config.max_frame_len;
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            let mut session = Session::new();
            let outcome = AssertUnwindSafe(Self::serve_client(
                &service,
                &mut session,
                stream,
                addr,
                max_frame_len,
                &mut shutdown_rx,
            ))
            .catch_unwind()
            .await;

            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(LoginServerError::Io(e))) => debug!("Connection error for {}: {}", addr, e),
                Ok(Err(e)) => error!("Closing {}: {}", addr, e),
                Err(_) => error!("Connection task for {} panicked", addr),
            }

            // Cleanup
            if let Err(e) = service.release(&session).await {
                error!("Failed to release account for {}: {}", addr, e);
            }

            if let Some(client) = clients.write().await.remove(&addr) {
                debug!("Client {} was connected for {:?}", addr, client.connected_at.elapsed());
            }

            info!("Client {} cleaned up", addr);
        });
    }

    /// Read frames and answer them, strictly in arrival order.
    async fn serve_client(
        service: &LoginService<S>,
        session: &mut Session,
        stream: TcpStream,
        addr: SocketAddr,
        max_frame_len: usize,
        shutdown_rx: &mut broadcast::Receiver<()>,
    ) -> Result<(), LoginServerError> {
        let mut framed = Framed::new(stream, frame_codec(max_frame_len));

        loop {
            tokio::select! {
                frame = framed.next() => {
                    let frame = match frame {
                        Some(Ok(frame)) => frame,
                        Some(Err(e)) => return Err(e.into()),
                        None => {
                            debug!("Client {} disconnected", addr);
                            return Ok(());
                        }
                    };

                    match service.dispatch(session, frame.freeze()).await {
                        Ok(replies) => {
                            for reply in replies {
                                framed.feed(reply).await?;
                            }
                            SinkExt::<Bytes>::flush(&mut framed).await?;
                        }
                        Err(e) if e.is_fatal() => return Err(e.into()),
                        Err(e) => debug!("Dropped packet from {}: {}", addr, e),
                    }
                }
                _ = shutdown_rx.recv() => {
                    debug!("Closing {} for shutdown", addr);
                    return Ok(());
                }
            }
        }
    }

    /// Shutdown the server.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }

    /// Get active connection count.
    pub async fn connection_count(&self) -> usize {
        self.clients.read().await.len()
    }
}
