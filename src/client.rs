//! FastDFS client facade
//!
//! `Client` wires a validated [`ClientConfig`] to the tracker pool, storage pool,
//! router, and operation pipeline, and enforces the closed-client lifecycle: once
//! [`Client::close`] has run, every operation returns `ClientClosed` instead of
//! reaching the network.

use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::errors::{FastDFSError, Result};
use crate::operations::Operations;
use crate::pool::ConnectionPool;
use crate::routing::Router;
use crate::types::{ClientConfig, Endpoint, FileInfo, Metadata, MetadataFlag};

/// FastDFS client for file operations
///
/// This client provides a high-level, async Rust API for interacting with FastDFS servers.
/// It handles connection pooling, automatic retries, and error handling.
///
/// # Example
///
/// ```no_run
/// use fastdfs::{Client, ClientConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ClientConfig::new(vec!["192.168.1.100:22122".to_string()]);
///     let client = Client::new(config)?;
///
///     let file_id = client.upload_file("test.jpg", None).await?;
///     let data = client.download_file(&file_id).await?;
///     client.delete_file(&file_id).await?;
///
///     client.close().await;
///     Ok(())
/// }
/// ```
pub struct Client {
    tracker_pool: Arc<ConnectionPool>,
    storage_pool: Arc<ConnectionPool>,
    ops: Operations,
    closed: Arc<RwLock<bool>>,
}

impl Client {
    /// Creates a new FastDFS client. Returns `ConfigError` if `config` fails validation
    /// (empty tracker list, malformed addresses, out-of-range pool/timeout/retry
    /// settings) before anything touches the network.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let tracker_endpoints: Vec<Endpoint> = config
            .tracker_addrs
            .iter()
            .map(|addr| addr.parse())
            .collect::<Result<Vec<_>>>()?;

        let connect_timeout = config.connect_timeout_duration();
        // `pool_enabled = false` is modeled as a zero idle timeout: every released
        // connection is immediately past its idle deadline and gets discarded instead
        // of reused, so each operation opens a fresh connection without needing a
        // separate code path through the pool.
        let idle_timeout = if config.pool_enabled {
            config.idle_timeout_duration()
        } else {
            Duration::from_millis(0)
        };

        let tracker_pool = Arc::new(ConnectionPool::new_tracker(
            tracker_endpoints,
            config.max_conns,
            connect_timeout,
            idle_timeout,
        ));
        let storage_pool = Arc::new(ConnectionPool::new_storage(
            config.max_conns,
            connect_timeout,
            idle_timeout,
        ));

        let network_timeout = Duration::from_millis(config.network_timeout);
        let router = Router::new(tracker_pool.clone(), network_timeout);
        let ops = Operations::new(storage_pool.clone(), router, network_timeout, config.retry_count);

        Ok(Self {
            tracker_pool,
            storage_pool,
            ops,
            closed: Arc::new(RwLock::new(false)),
        })
    }

    async fn check_closed(&self) -> Result<()> {
        if *self.closed.read().await {
            return Err(FastDFSError::ClientClosed);
        }
        Ok(())
    }

    /// Uploads a file from the local filesystem to FastDFS.
    pub async fn upload_file(&self, local_filename: &str, metadata: Option<&Metadata>) -> Result<String> {
        self.check_closed().await?;
        self.ops.upload_file(local_filename, None, metadata, false, None).await
    }

    /// Uploads a file from the local filesystem, honoring cancellation.
    pub async fn upload_file_cancellable(
        &self,
        local_filename: &str,
        metadata: Option<&Metadata>,
        cancellation: &CancellationToken,
    ) -> Result<String> {
        self.check_closed().await?;
        self.ops
            .upload_file(local_filename, None, metadata, false, Some(cancellation))
            .await
    }

    /// Uploads data from a buffer to FastDFS.
    pub async fn upload_buffer(
        &self,
        data: &[u8],
        file_ext_name: &str,
        metadata: Option<&Metadata>,
    ) -> Result<String> {
        self.check_closed().await?;
        self.ops
            .upload_buffer(data, file_ext_name, None, metadata, false, None)
            .await
    }

    /// Uploads data from a buffer, honoring cancellation.
    pub async fn upload_buffer_cancellable(
        &self,
        data: &[u8],
        file_ext_name: &str,
        metadata: Option<&Metadata>,
        cancellation: &CancellationToken,
    ) -> Result<String> {
        self.check_closed().await?;
        self.ops
            .upload_buffer(data, file_ext_name, None, metadata, false, Some(cancellation))
            .await
    }

    /// Uploads an appender file that can be modified later.
    pub async fn upload_appender_file(
        &self,
        local_filename: &str,
        metadata: Option<&Metadata>,
    ) -> Result<String> {
        self.check_closed().await?;
        self.ops.upload_appender_file(local_filename, None, metadata, None).await
    }

    /// Uploads an appender file that can be modified later, honoring cancellation.
    pub async fn upload_appender_file_cancellable(
        &self,
        local_filename: &str,
        metadata: Option<&Metadata>,
        cancellation: &CancellationToken,
    ) -> Result<String> {
        self.check_closed().await?;
        self.ops
            .upload_appender_file(local_filename, None, metadata, Some(cancellation))
            .await
    }

    /// Uploads an appender file from a buffer.
    pub async fn upload_appender_buffer(
        &self,
        data: &[u8],
        file_ext_name: &str,
        metadata: Option<&Metadata>,
    ) -> Result<String> {
        self.check_closed().await?;
        self.ops
            .upload_appender_buffer(data, file_ext_name, None, metadata, None)
            .await
    }

    /// Uploads an appender file from a buffer, honoring cancellation.
    pub async fn upload_appender_buffer_cancellable(
        &self,
        data: &[u8],
        file_ext_name: &str,
        metadata: Option<&Metadata>,
        cancellation: &CancellationToken,
    ) -> Result<String> {
        self.check_closed().await?;
        self.ops
            .upload_appender_buffer(data, file_ext_name, None, metadata, Some(cancellation))
            .await
    }

    /// Uploads a slave file, linked to `master_file_id`, whose remote name is derived
    /// from the master's with `prefix` inserted before the extension.
    pub async fn upload_slave_file(
        &self,
        master_file_id: &str,
        prefix: &str,
        file_ext_name: &str,
        data: &[u8],
        metadata: Option<&Metadata>,
    ) -> Result<String> {
        self.check_closed().await?;
        self.ops
            .upload_slave_file(master_file_id, prefix, file_ext_name, data, metadata, None)
            .await
    }

    /// Uploads a slave file, honoring cancellation.
    pub async fn upload_slave_file_cancellable(
        &self,
        master_file_id: &str,
        prefix: &str,
        file_ext_name: &str,
        data: &[u8],
        metadata: Option<&Metadata>,
        cancellation: &CancellationToken,
    ) -> Result<String> {
        self.check_closed().await?;
        self.ops
            .upload_slave_file(
                master_file_id,
                prefix,
                file_ext_name,
                data,
                metadata,
                Some(cancellation),
            )
            .await
    }

    /// Downloads a file from FastDFS and returns its content.
    pub async fn download_file(&self, file_id: &str) -> Result<Bytes> {
        self.check_closed().await?;
        self.ops.download_file(file_id, None).await
    }

    /// Downloads a specific byte range from a file. `length == 0` downloads to the end.
    pub async fn download_file_range(&self, file_id: &str, offset: u64, length: u64) -> Result<Bytes> {
        self.check_closed().await?;
        self.ops.download_file_range(file_id, offset, length, None).await
    }

    /// Downloads a specific byte range from a file, honoring cancellation.
    pub async fn download_file_range_cancellable(
        &self,
        file_id: &str,
        offset: u64,
        length: u64,
        cancellation: &CancellationToken,
    ) -> Result<Bytes> {
        self.check_closed().await?;
        self.ops
            .download_file_range(file_id, offset, length, Some(cancellation))
            .await
    }

    /// Downloads a file, honoring cancellation.
    pub async fn download_file_cancellable(
        &self,
        file_id: &str,
        cancellation: &CancellationToken,
    ) -> Result<Bytes> {
        self.check_closed().await?;
        self.ops.download_file(file_id, Some(cancellation)).await
    }

    /// Downloads a file and saves it to the local filesystem.
    pub async fn download_to_file(&self, file_id: &str, local_filename: &str) -> Result<()> {
        self.check_closed().await?;
        self.ops.download_to_file(file_id, local_filename, None).await
    }

    /// Downloads a file and saves it to the local filesystem, honoring cancellation.
    pub async fn download_to_file_cancellable(
        &self,
        file_id: &str,
        local_filename: &str,
        cancellation: &CancellationToken,
    ) -> Result<()> {
        self.check_closed().await?;
        self.ops
            .download_to_file(file_id, local_filename, Some(cancellation))
            .await
    }

    /// Deletes a file from FastDFS.
    pub async fn delete_file(&self, file_id: &str) -> Result<()> {
        self.check_closed().await?;
        self.ops.delete_file(file_id, None).await
    }

    /// Deletes a file from FastDFS, honoring cancellation.
    pub async fn delete_file_cancellable(
        &self,
        file_id: &str,
        cancellation: &CancellationToken,
    ) -> Result<()> {
        self.check_closed().await?;
        self.ops.delete_file(file_id, Some(cancellation)).await
    }

    /// Appends `data` to the end of an appender file.
    pub async fn append_file(&self, file_id: &str, data: &[u8]) -> Result<()> {
        self.check_closed().await?;
        self.ops.append_file(file_id, data, None).await
    }

    /// Appends `data` to the end of an appender file, honoring cancellation.
    pub async fn append_file_cancellable(
        &self,
        file_id: &str,
        data: &[u8],
        cancellation: &CancellationToken,
    ) -> Result<()> {
        self.check_closed().await?;
        self.ops.append_file(file_id, data, Some(cancellation)).await
    }

    /// Overwrites the bytes of an appender file starting at `offset` with `data`.
    pub async fn modify_file(&self, file_id: &str, offset: u64, data: &[u8]) -> Result<()> {
        self.check_closed().await?;
        self.ops.modify_file(file_id, offset, data, None).await
    }

    /// Overwrites the bytes of an appender file starting at `offset` with `data`,
    /// honoring cancellation.
    pub async fn modify_file_cancellable(
        &self,
        file_id: &str,
        offset: u64,
        data: &[u8],
        cancellation: &CancellationToken,
    ) -> Result<()> {
        self.check_closed().await?;
        self.ops
            .modify_file(file_id, offset, data, Some(cancellation))
            .await
    }

    /// Truncates an appender file to `size` bytes.
    pub async fn truncate_file(&self, file_id: &str, size: u64) -> Result<()> {
        self.check_closed().await?;
        self.ops.truncate_file(file_id, size, None).await
    }

    /// Truncates an appender file to `size` bytes, honoring cancellation.
    pub async fn truncate_file_cancellable(
        &self,
        file_id: &str,
        size: u64,
        cancellation: &CancellationToken,
    ) -> Result<()> {
        self.check_closed().await?;
        self.ops
            .truncate_file(file_id, size, Some(cancellation))
            .await
    }

    /// Sets (overwrites or merges) metadata for a file.
    pub async fn set_metadata(&self, file_id: &str, metadata: &Metadata, flag: MetadataFlag) -> Result<()> {
        self.check_closed().await?;
        self.ops.set_metadata(file_id, metadata, flag, None).await
    }

    /// Sets (overwrites or merges) metadata for a file, honoring cancellation.
    pub async fn set_metadata_cancellable(
        &self,
        file_id: &str,
        metadata: &Metadata,
        flag: MetadataFlag,
        cancellation: &CancellationToken,
    ) -> Result<()> {
        self.check_closed().await?;
        self.ops
            .set_metadata(file_id, metadata, flag, Some(cancellation))
            .await
    }

    /// Retrieves metadata for a file.
    pub async fn get_metadata(&self, file_id: &str) -> Result<Metadata> {
        self.check_closed().await?;
        self.ops.get_metadata(file_id, None).await
    }

    /// Retrieves metadata for a file, honoring cancellation.
    pub async fn get_metadata_cancellable(
        &self,
        file_id: &str,
        cancellation: &CancellationToken,
    ) -> Result<Metadata> {
        self.check_closed().await?;
        self.ops.get_metadata(file_id, Some(cancellation)).await
    }

    /// Retrieves file information including size, create time, CRC32, and kind.
    pub async fn get_file_info(&self, file_id: &str) -> Result<FileInfo> {
        self.check_closed().await?;
        self.ops.get_file_info(file_id, false, None).await
    }

    /// Retrieves file information, honoring cancellation.
    pub async fn get_file_info_cancellable(
        &self,
        file_id: &str,
        cancellation: &CancellationToken,
    ) -> Result<FileInfo> {
        self.check_closed().await?;
        self.ops
            .get_file_info(file_id, false, Some(cancellation))
            .await
    }

    /// Checks whether a file exists on the storage server.
    pub async fn file_exists(&self, file_id: &str) -> bool {
        self.check_closed().await.is_ok() && self.ops.file_exists(file_id, None).await
    }

    /// Checks whether a file exists on the storage server, honoring cancellation.
    pub async fn file_exists_cancellable(&self, file_id: &str, cancellation: &CancellationToken) -> bool {
        self.check_closed().await.is_ok() && self.ops.file_exists(file_id, Some(cancellation)).await
    }

    /// Closes the client and releases all pooled connections.
    ///
    /// After calling close, all operations return `ClientClosed`. Safe to call more
    /// than once.
    pub async fn close(&self) {
        let mut closed = self.closed.write().await;
        if *closed {
            return;
        }
        *closed = true;
        drop(closed);

        self.tracker_pool.close().await;
        self.storage_pool.close().await;
    }
}
