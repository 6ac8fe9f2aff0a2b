//! Connection pool
//!
//! Maintains a LIFO idle-connection queue per endpoint plus a per-endpoint total
//! (idle + in-flight) counter bounded by `max_conns`. One pool instance backs the
//! tracker endpoints configured at client construction; a second, separate instance
//! backs storage endpoints discovered dynamically from tracker responses.
//!
//! The pool never holds its lock across network I/O: state mutation (queue push/pop,
//! counters) is synchronous and brief, while `connect` always happens with the lock
//! released.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::connection::Connection;
use crate::errors::{FastDFSError, Result};
use crate::types::Endpoint;

struct EndpointState {
    idle: Vec<Connection>,
    total: usize,
    notify: Arc<Notify>,
}

impl EndpointState {
    fn new() -> Self {
        Self {
            idle: Vec::new(),
            total: 0,
            notify: Arc::new(Notify::new()),
        }
    }
}

struct PoolInner {
    tracker_endpoints: Vec<Endpoint>,
    rr_counter: AtomicUsize,
    max_conns: usize,
    connect_timeout: Duration,
    idle_timeout: Duration,
    state: Mutex<HashMap<Endpoint, EndpointState>>,
    closed: AtomicBool,
}

/// A pool of reusable connections, keyed by endpoint.
pub struct ConnectionPool {
    inner: Arc<PoolInner>,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

/// A connection on loan from the pool.
///
/// Dropping a `PooledConnection` without calling [`ConnectionPool::release`] closes the
/// underlying connection and frees its slot, so a `?` early-return inside an operation
/// can never leak a connection out of the pool's accounting — this is the "scoped
/// acquisition with guaranteed release" pattern used throughout the design in place of
/// ad-hoc close calls.
pub struct PooledConnection {
    conn: Option<Connection>,
    pool: Arc<PoolInner>,
}

impl PooledConnection {
    pub fn get_mut(&mut self) -> &mut Connection {
        self.conn.as_mut().expect("connection taken exactly once")
    }

    pub fn endpoint(&self) -> &Endpoint {
        self.conn.as_ref().expect("connection present").endpoint()
    }
}

impl Drop for PooledConnection {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            self.pool.discard(conn);
        }
    }
}

impl ConnectionPool {
    /// Creates the tracker pool, pre-seeded with the configured tracker endpoints.
    pub fn new_tracker(
        tracker_endpoints: Vec<Endpoint>,
        max_conns: usize,
        connect_timeout: Duration,
        idle_timeout: Duration,
    ) -> Self {
        let mut state = HashMap::new();
        for ep in &tracker_endpoints {
            state.insert(ep.clone(), EndpointState::new());
        }
        Self::from_inner(PoolInner {
            tracker_endpoints,
            rr_counter: AtomicUsize::new(0),
            max_conns,
            connect_timeout,
            idle_timeout,
            state: Mutex::new(state),
            closed: AtomicBool::new(false),
        })
    }

    /// Creates the storage pool. It starts empty; endpoints are added lazily as
    /// tracker responses reveal them (see [`ConnectionPool::add_endpoint`]).
    pub fn new_storage(max_conns: usize, connect_timeout: Duration, idle_timeout: Duration) -> Self {
        Self::from_inner(PoolInner {
            tracker_endpoints: Vec::new(),
            rr_counter: AtomicUsize::new(0),
            max_conns,
            connect_timeout,
            idle_timeout,
            state: Mutex::new(HashMap::new()),
            closed: AtomicBool::new(false),
        })
    }

    fn from_inner(inner: PoolInner) -> Self {
        let inner = Arc::new(inner);
        let reaper = spawn_reaper(inner.clone());
        Self {
            inner,
            reaper: Mutex::new(Some(reaper)),
        }
    }

    /// Registers a storage endpoint discovered from a tracker response. A no-op if the
    /// endpoint is already known.
    pub fn add_endpoint(&self, endpoint: Endpoint) {
        if self.inner.closed.load(Ordering::SeqCst) {
            return;
        }
        let mut state = self.inner.state.lock().expect("pool mutex poisoned");
        state.entry(endpoint).or_insert_with(EndpointState::new);
    }

    /// Acquires a connection for `endpoint`, or (tracker pool only) round-robins across
    /// the configured tracker endpoints when `endpoint` is `None`.
    pub async fn acquire(&self, endpoint: Option<&Endpoint>) -> Result<PooledConnection> {
        loop {
            if self.inner.closed.load(Ordering::SeqCst) {
                return Err(FastDFSError::ClientClosed);
            }

            let target = self.resolve_endpoint(endpoint)?;

            let (reused, notify) = {
                let mut state = self.inner.state.lock().expect("pool mutex poisoned");
                let entry = state.entry(target.clone()).or_insert_with(EndpointState::new);

                let mut reused = None;
                while let Some(conn) = entry.idle.pop() {
                    if conn.is_alive() && conn.age() < self.inner.idle_timeout {
                        reused = Some(conn);
                        break;
                    }
                    entry.total -= 1;
                    debug!(endpoint = %target, "discarding stale pooled connection");
                }

                if reused.is_none() && entry.total < self.inner.max_conns {
                    entry.total += 1;
                    // Reserved a slot; connect happens below, outside the lock.
                    (None, None)
                } else if let Some(conn) = reused {
                    (Some(conn), None)
                } else {
                    (None, Some(entry.notify.clone()))
                }
            };

            if let Some(conn) = reused {
                return Ok(self.wrap(conn));
            }

            if let Some(notify) = notify {
                notify.notified().await;
                continue;
            }

            // A slot was reserved above; establish the connection without holding the lock.
            match Connection::connect(&target, self.inner.connect_timeout).await {
                Ok(conn) => return Ok(self.wrap(conn)),
                Err(e) => {
                    let mut state = self.inner.state.lock().expect("pool mutex poisoned");
                    if let Some(entry) = state.get_mut(&target) {
                        entry.total = entry.total.saturating_sub(1);
                        entry.notify.notify_one();
                    }
                    return Err(e);
                }
            }
        }
    }

    fn resolve_endpoint(&self, endpoint: Option<&Endpoint>) -> Result<Endpoint> {
        if let Some(ep) = endpoint {
            return Ok(ep.clone());
        }
        if self.inner.tracker_endpoints.is_empty() {
            return Err(FastDFSError::InvalidArgument(
                "no endpoint specified and no tracker endpoints configured".to_string(),
            ));
        }
        let i = self.inner.rr_counter.fetch_add(1, Ordering::Relaxed) % self.inner.tracker_endpoints.len();
        Ok(self.inner.tracker_endpoints[i].clone())
    }

    fn wrap(&self, conn: Connection) -> PooledConnection {
        PooledConnection {
            conn: Some(conn),
            pool: self.inner.clone(),
        }
    }

    /// Returns a connection to the pool for reuse. A connection that was in use during a
    /// cancellation should be discarded instead — see [`ConnectionPool::discard`].
    pub fn release(&self, mut pooled: PooledConnection) {
        let conn = pooled.conn.take().expect("connection present");
        self.inner.release(conn);
    }

    /// Closes a connection instead of returning it to the pool: used when the wire
    /// protocol may be in an indeterminate state (mid-flight cancellation, a detected
    /// protocol error) and reuse would be unsafe.
    pub fn discard(&self, pooled: PooledConnection) {
        let mut pooled = pooled;
        if let Some(conn) = pooled.conn.take() {
            self.inner.discard(conn);
        }
    }

    /// Shuts the pool down: marks it closed, drains and closes every idle connection,
    /// and wakes any acquirers blocked waiting for a free slot so they observe
    /// `ClientClosed` instead of hanging.
    pub async fn close(&self) {
        if self.inner.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        {
            let mut state = self.inner.state.lock().expect("pool mutex poisoned");
            for (_, entry) in state.iter_mut() {
                for conn in entry.idle.drain(..) {
                    conn.close();
                }
                entry.total = 0;
                entry.notify.notify_waiters();
            }
        }
        if let Some(handle) = self.reaper.lock().expect("reaper mutex poisoned").take() {
            handle.abort();
        }
    }
}

impl PoolInner {
    fn release(&self, conn: Connection) {
        if self.closed.load(Ordering::SeqCst) {
            self.discard(conn);
            return;
        }
        if !conn.is_alive() || conn.age() >= self.idle_timeout {
            self.discard(conn);
            return;
        }
        let endpoint = conn.endpoint().clone();
        let mut state = self.state.lock().expect("pool mutex poisoned");
        if let Some(entry) = state.get_mut(&endpoint) {
            entry.idle.push(conn);
        } else {
            // Endpoint was removed concurrently (shouldn't happen in practice); drop it.
            drop(conn);
        }
    }

    fn discard(&self, conn: Connection) {
        let endpoint = conn.endpoint().clone();
        conn.close();
        let mut state = self.state.lock().expect("pool mutex poisoned");
        if let Some(entry) = state.get_mut(&endpoint) {
            entry.total = entry.total.saturating_sub(1);
            entry.notify.notify_one();
        }
    }

    fn reap_expired(&self) {
        let mut state = self.state.lock().expect("pool mutex poisoned");
        for (endpoint, entry) in state.iter_mut() {
            let before = entry.idle.len();
            let idle_timeout = self.idle_timeout;
            let mut kept = Vec::with_capacity(entry.idle.len());
            for conn in entry.idle.drain(..) {
                if conn.is_alive() && conn.age() < idle_timeout {
                    kept.push(conn);
                } else {
                    entry.total = entry.total.saturating_sub(1);
                    conn.close();
                }
            }
            entry.idle = kept;
            if entry.idle.len() != before {
                entry.notify.notify_one();
                debug!(endpoint = %endpoint, reaped = before - entry.idle.len(), "reaped idle connections");
            }
        }
    }
}

fn spawn_reaper(inner: Arc<PoolInner>) -> JoinHandle<()> {
    let period = (inner.idle_timeout / 2).max(Duration::from_millis(100));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            if inner.closed.load(Ordering::SeqCst) {
                break;
            }
            inner.reap_expired();
        }
    })
}

impl Drop for ConnectionPool {
    fn drop(&mut self) {
        if let Some(handle) = self.reaper.lock().expect("reaper mutex poisoned").take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    async fn echo_listener() -> (Endpoint, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut sock, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    use tokio::io::{AsyncReadExt, AsyncWriteExt};
                    let mut buf = [0u8; 1024];
                    loop {
                        match sock.read(&mut buf).await {
                            Ok(0) | Err(_) => break,
                            Ok(n) => {
                                if sock.write_all(&buf[..n]).await.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                });
            }
        });
        (Endpoint::new(addr.ip().to_string(), addr.port()).unwrap(), handle)
    }

    #[tokio::test]
    async fn acquire_and_release_reuses_connection() {
        let (endpoint, _srv) = echo_listener().await;
        let pool = ConnectionPool::new_storage(4, Duration::from_secs(1), Duration::from_secs(30));

        let conn = pool.acquire(Some(&endpoint)).await.unwrap();
        pool.release(conn);

        let state = pool.inner.state.lock().unwrap();
        let entry = state.get(&endpoint).unwrap();
        assert_eq!(entry.idle.len(), 1);
        assert_eq!(entry.total, 1);
    }

    #[tokio::test]
    async fn pool_respects_max_conns_total() {
        let (endpoint, _srv) = echo_listener().await;
        let pool = ConnectionPool::new_storage(2, Duration::from_secs(1), Duration::from_secs(30));

        let a = pool.acquire(Some(&endpoint)).await.unwrap();
        let b = pool.acquire(Some(&endpoint)).await.unwrap();

        {
            let state = pool.inner.state.lock().unwrap();
            assert_eq!(state.get(&endpoint).unwrap().total, 2);
        }

        pool.release(a);
        pool.release(b);
    }

    #[tokio::test]
    async fn close_marks_pool_closed_and_drains_idle() {
        let (endpoint, _srv) = echo_listener().await;
        let pool = ConnectionPool::new_storage(4, Duration::from_secs(1), Duration::from_secs(30));

        let conn = pool.acquire(Some(&endpoint)).await.unwrap();
        pool.release(conn);
        pool.close().await;

        let result = pool.acquire(Some(&endpoint)).await;
        assert!(matches!(result, Err(FastDFSError::ClientClosed)));
    }

    #[tokio::test]
    async fn discard_decrements_total_without_repooling() {
        let (endpoint, _srv) = echo_listener().await;
        let pool = ConnectionPool::new_storage(4, Duration::from_secs(1), Duration::from_secs(30));

        let conn = pool.acquire(Some(&endpoint)).await.unwrap();
        pool.discard(conn);

        let state = pool.inner.state.lock().unwrap();
        let entry = state.get(&endpoint).unwrap();
        assert_eq!(entry.idle.len(), 0);
        assert_eq!(entry.total, 0);
    }

    #[tokio::test]
    async fn tracker_pool_round_robins_with_no_endpoint_specified() {
        let (ep_a, _srv_a) = echo_listener().await;
        let (ep_b, _srv_b) = echo_listener().await;
        let pool = ConnectionPool::new_tracker(
            vec![ep_a.clone(), ep_b.clone()],
            4,
            Duration::from_secs(1),
            Duration::from_secs(30),
        );

        let first = pool.acquire(None).await.unwrap();
        let first_ep = first.endpoint().clone();
        pool.release(first);

        let second = pool.acquire(None).await.unwrap();
        let second_ep = second.endpoint().clone();
        pool.release(second);

        assert_ne!(first_ep, second_ep);
    }

    #[tokio::test]
    async fn storage_pool_rejects_unspecified_endpoint() {
        let pool = ConnectionPool::new_storage(4, Duration::from_secs(1), Duration::from_secs(30));
        let result = pool.acquire(None).await;
        assert!(matches!(result, Err(FastDFSError::InvalidArgument(_))));
    }
}
