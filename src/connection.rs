//! Framed TCP connection
//!
//! A `Connection` owns a single TCP stream to one tracker or storage endpoint. It is
//! not safe for concurrent use — callers (the connection pool and the operation
//! pipeline) must serialize all send/receive activity on a given connection.

use bytes::Bytes;
use futures::FutureExt;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

use crate::errors::{FastDFSError, Result};
use crate::types::Endpoint;

/// A TCP connection to a FastDFS server (tracker or storage), with the metadata the
/// pool needs to decide whether to keep or discard it.
pub struct Connection {
    stream: TcpStream,
    endpoint: Endpoint,
    created_at: Instant,
    last_used: Instant,
}

impl Connection {
    /// Opens a new TCP connection to `endpoint`, bounded by `connect_timeout`.
    pub async fn connect(endpoint: &Endpoint, connect_timeout: Duration) -> Result<Self> {
        let addr = endpoint.to_string();
        let result = timeout(connect_timeout, TcpStream::connect(&addr)).await;

        match result {
            Ok(Ok(stream)) => {
                stream.set_nodelay(true)?;
                let now = Instant::now();
                Ok(Self {
                    stream,
                    endpoint: endpoint.clone(),
                    created_at: now,
                    last_used: now,
                })
            }
            Ok(Err(e)) => Err(FastDFSError::Network {
                operation: "connect".to_string(),
                addr,
                source: e,
            }),
            Err(_) => Err(FastDFSError::ConnectionTimeout(addr)),
        }
    }

    /// Sends `data` in full, bounded by `network_timeout`.
    pub async fn send_all(&mut self, data: &[u8], network_timeout: Duration) -> Result<()> {
        let result = timeout(network_timeout, self.stream.write_all(data)).await;

        match result {
            Ok(Ok(())) => {
                self.last_used = Instant::now();
                Ok(())
            }
            Ok(Err(e)) => Err(FastDFSError::Network {
                operation: "write".to_string(),
                addr: self.endpoint.to_string(),
                source: e,
            }),
            Err(_) => Err(FastDFSError::NetworkTimeout("write".to_string())),
        }
    }

    /// Reads exactly `size` bytes, bounded by `network_timeout` for the whole read.
    pub async fn recv_exact(&mut self, size: usize, network_timeout: Duration) -> Result<Bytes> {
        let mut buf = vec![0u8; size];

        let result = timeout(network_timeout, self.stream.read_exact(&mut buf)).await;

        match result {
            Ok(Ok(())) => {
                self.last_used = Instant::now();
                Ok(Bytes::from(buf))
            }
            Ok(Err(e)) => Err(FastDFSError::Network {
                operation: "read".to_string(),
                addr: self.endpoint.to_string(),
                source: e,
            }),
            Err(_) => Err(FastDFSError::NetworkTimeout("read".to_string())),
        }
    }

    /// Cheap liveness probe: a non-blocking peek. Nothing ready to read yet (the peek
    /// future doesn't resolve immediately) counts as alive, since the socket is still
    /// open; EOF or any other error means dead. Uses `TcpStream::peek` rather than
    /// `try_read` so a byte that happens to be ready is never consumed here — stealing
    /// it would shift the framing of the next real response by one byte.
    pub fn is_alive(&self) -> bool {
        let mut probe = [0u8; 1];
        match self.stream.peek(&mut probe).now_or_never() {
            None => true,
            Some(Ok(0)) => false,
            Some(Ok(_)) => true,
            Some(Err(_)) => false,
        }
    }

    pub fn last_used(&self) -> Instant {
        self.last_used
    }

    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Closes the connection. Idempotent in the sense that dropping an already-closed
    /// `Connection` (there's no separate "closed" state — the stream just goes away)
    /// never panics or blocks.
    pub fn close(self) {
        trace!(endpoint = %self.endpoint, "closing connection");
        drop(self);
    }
}
