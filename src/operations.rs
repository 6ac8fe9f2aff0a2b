//! Operation pipeline
//!
//! Every public operation follows the same shape: validate inputs, resolve a storage
//! endpoint through the [`Router`], run one attempt against a pooled connection, and
//! retry transient failures with capped exponential backoff. A single attempt either
//! returns cleanly (connection goes back to the pool) or fails in a way that makes the
//! connection's state uncertain (connection is discarded instead of reused) — see
//! `release_or_discard`.

use bytes::{Bytes, BytesMut};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::errors::{map_status_to_error, FastDFSError, Result};
use crate::pool::{ConnectionPool, PooledConnection};
use crate::protocol::*;
use crate::routing::Router;
use crate::types::*;

const MAX_BACKOFF_SECS: u64 = 30;

/// Implements the storage-command side of the design: upload, download, delete,
/// metadata, append/modify/truncate, and file-info queries, each wired through a
/// shared retry/backoff loop and an optional cooperative cancellation token.
pub struct Operations {
    storage_pool: Arc<ConnectionPool>,
    router: Router,
    network_timeout: Duration,
    retry_count: usize,
}

impl Operations {
    pub fn new(
        storage_pool: Arc<ConnectionPool>,
        router: Router,
        network_timeout: Duration,
        retry_count: usize,
    ) -> Self {
        Self {
            storage_pool,
            router,
            network_timeout,
            retry_count,
        }
    }

    // ---- upload ----

    pub async fn upload_file(
        &self,
        local_filename: &str,
        group: Option<&str>,
        metadata: Option<&Metadata>,
        is_appender: bool,
        cancellation: Option<&CancellationToken>,
    ) -> Result<String> {
        let data = read_file_content(local_filename)?;
        if data.is_empty() {
            return Err(FastDFSError::InvalidArgument(
                "local file is empty".to_string(),
            ));
        }
        let ext_name = get_file_ext_name(local_filename);
        self.upload_buffer(&data, &ext_name, group, metadata, is_appender, cancellation)
            .await
    }

    pub async fn upload_appender_file(
        &self,
        local_filename: &str,
        group: Option<&str>,
        metadata: Option<&Metadata>,
        cancellation: Option<&CancellationToken>,
    ) -> Result<String> {
        self.upload_file(local_filename, group, metadata, true, cancellation)
            .await
    }

    pub async fn upload_buffer(
        &self,
        data: &[u8],
        ext_name: &str,
        group: Option<&str>,
        metadata: Option<&Metadata>,
        is_appender: bool,
        cancellation: Option<&CancellationToken>,
    ) -> Result<String> {
        if data.is_empty() {
            return Err(FastDFSError::InvalidArgument(
                "upload data must not be empty".to_string(),
            ));
        }
        if let Some(m) = metadata {
            validate_metadata(m)?;
        }

        let cmd = if is_appender {
            StorageCommand::UploadAppenderFile
        } else {
            StorageCommand::UploadFile
        };
        let file_id = with_retry(self.retry_count, cancellation, |_attempt| {
            self.upload_attempt(data, ext_name, group, cmd, cancellation)
        })
        .await?;

        self.apply_post_upload_metadata(&file_id, metadata, cancellation).await;
        Ok(file_id)
    }

    pub async fn upload_appender_buffer(
        &self,
        data: &[u8],
        ext_name: &str,
        group: Option<&str>,
        metadata: Option<&Metadata>,
        cancellation: Option<&CancellationToken>,
    ) -> Result<String> {
        self.upload_buffer(data, ext_name, group, metadata, true, cancellation)
            .await
    }

    async fn apply_post_upload_metadata(
        &self,
        file_id: &str,
        metadata: Option<&Metadata>,
        cancellation: Option<&CancellationToken>,
    ) {
        let Some(m) = metadata else { return };
        if m.is_empty() {
            return;
        }
        if let Err(e) = self
            .set_metadata(file_id, m, MetadataFlag::Overwrite, cancellation)
            .await
        {
            warn!(file_id, error = %e, "upload succeeded but setting metadata failed");
        }
    }

    async fn upload_attempt(
        &self,
        data: &[u8],
        ext_name: &str,
        group: Option<&str>,
        cmd: StorageCommand,
        cancellation: Option<&CancellationToken>,
    ) -> Result<String> {
        let location = self.router.query_store(group).await?;
        self.storage_pool.add_endpoint(location.endpoint.clone());
        let mut conn = self.storage_pool.acquire(Some(&location.endpoint)).await?;

        let mut body = BytesMut::with_capacity(1 + FDFS_FILE_EXT_NAME_MAX_LEN + data.len());
        body.put_slice(&[location.store_path_index]);
        body.put_slice(&pad_string(ext_name, FDFS_FILE_EXT_NAME_MAX_LEN));
        body.put_slice(data);
        let header = encode_header(body.len() as u64, cmd as u8, 0);
        let timeout = self.network_timeout;

        let fut = async {
            conn.get_mut().send_all(&header, timeout).await?;
            conn.get_mut().send_all(&body, timeout).await?;
            let resp_header =
                decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
            if let Some(err) = map_status_to_error(resp_header.status, "upload-file") {
                return Err(err);
            }
            let resp_body = conn
                .get_mut()
                .recv_exact(resp_header.length as usize, timeout)
                .await?;
            parse_upload_response(&resp_body)
        };
        let outcome = with_cancellation(fut, cancellation).await;
        release_or_discard(&self.storage_pool, conn, &outcome);
        outcome
    }

    pub async fn upload_slave_file(
        &self,
        master_file_id: &str,
        prefix: &str,
        ext_name: &str,
        data: &[u8],
        metadata: Option<&Metadata>,
        cancellation: Option<&CancellationToken>,
    ) -> Result<String> {
        if data.is_empty() {
            return Err(FastDFSError::InvalidArgument(
                "upload data must not be empty".to_string(),
            ));
        }
        if prefix.is_empty() || prefix.len() > FDFS_FILE_PREFIX_MAX_LEN {
            return Err(FastDFSError::InvalidArgument(format!(
                "slave file prefix must be 1..={} bytes",
                FDFS_FILE_PREFIX_MAX_LEN
            )));
        }
        if let Some(m) = metadata {
            validate_metadata(m)?;
        }
        let master = FileId::parse(master_file_id)?;

        let file_id = with_retry(self.retry_count, cancellation, |_attempt| {
            self.upload_slave_attempt(&master, prefix, ext_name, data, cancellation)
        })
        .await?;

        self.apply_post_upload_metadata(&file_id, metadata, cancellation).await;
        Ok(file_id)
    }

    async fn upload_slave_attempt(
        &self,
        master: &FileId,
        prefix: &str,
        ext_name: &str,
        data: &[u8],
        cancellation: Option<&CancellationToken>,
    ) -> Result<String> {
        // A slave file must land in the same group as its master, so routing piggybacks
        // on the update query for the master rather than a fresh store query.
        let endpoint = self
            .router
            .query_update(&master.group_name, &master.remote_path)
            .await?;
        self.storage_pool.add_endpoint(endpoint.clone());
        let mut conn = self.storage_pool.acquire(Some(&endpoint)).await?;

        let master_bytes = master.remote_path.as_bytes();
        let body_len =
            8 + 8 + FDFS_FILE_PREFIX_MAX_LEN + FDFS_FILE_EXT_NAME_MAX_LEN + master_bytes.len() + data.len();
        let mut body = BytesMut::with_capacity(body_len);
        body.put_slice(&encode_int64(master_bytes.len() as u64));
        body.put_slice(&encode_int64(data.len() as u64));
        body.put_slice(&pad_string(prefix, FDFS_FILE_PREFIX_MAX_LEN));
        body.put_slice(&pad_string(ext_name, FDFS_FILE_EXT_NAME_MAX_LEN));
        body.put_slice(master_bytes);
        body.put_slice(data);
        let header = encode_header(body.len() as u64, StorageCommand::UploadSlaveFile as u8, 0);
        let timeout = self.network_timeout;

        let fut = async {
            conn.get_mut().send_all(&header, timeout).await?;
            conn.get_mut().send_all(&body, timeout).await?;
            let resp_header =
                decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
            if let Some(err) = map_status_to_error(resp_header.status, "upload-slave-file") {
                return Err(err);
            }
            let resp_body = conn
                .get_mut()
                .recv_exact(resp_header.length as usize, timeout)
                .await?;
            parse_upload_response(&resp_body)
        };
        let outcome = with_cancellation(fut, cancellation).await;
        release_or_discard(&self.storage_pool, conn, &outcome);
        outcome
    }

    // ---- download ----

    pub async fn download_file(
        &self,
        file_id: &str,
        cancellation: Option<&CancellationToken>,
    ) -> Result<Bytes> {
        self.download_file_range(file_id, 0, 0, cancellation).await
    }

    pub async fn download_file_range(
        &self,
        file_id: &str,
        offset: u64,
        length: u64,
        cancellation: Option<&CancellationToken>,
    ) -> Result<Bytes> {
        let id = FileId::parse(file_id)?;
        with_retry(self.retry_count, cancellation, |_attempt| {
            self.download_attempt(&id, offset, length, cancellation)
        })
        .await
    }

    pub async fn download_to_file(
        &self,
        file_id: &str,
        local_filename: &str,
        cancellation: Option<&CancellationToken>,
    ) -> Result<()> {
        let data = self.download_file(file_id, cancellation).await?;
        write_file_content(local_filename, &data)
    }

    async fn download_attempt(
        &self,
        id: &FileId,
        offset: u64,
        length: u64,
        cancellation: Option<&CancellationToken>,
    ) -> Result<Bytes> {
        let endpoint = self.router.query_fetch(&id.group_name, &id.remote_path).await?;
        self.storage_pool.add_endpoint(endpoint.clone());
        let mut conn = self.storage_pool.acquire(Some(&endpoint)).await?;

        let remote_bytes = id.remote_path.as_bytes();
        let body_len = 8 + 8 + FDFS_GROUP_NAME_MAX_LEN + remote_bytes.len();
        let mut body = BytesMut::with_capacity(body_len);
        body.put_slice(&encode_int64(offset));
        body.put_slice(&encode_int64(length));
        body.put_slice(&pad_string(&id.group_name, FDFS_GROUP_NAME_MAX_LEN));
        body.put_slice(remote_bytes);
        let header = encode_header(body.len() as u64, StorageCommand::DownloadFile as u8, 0);
        let timeout = self.network_timeout;

        let fut = async {
            conn.get_mut().send_all(&header, timeout).await?;
            conn.get_mut().send_all(&body, timeout).await?;
            let resp_header =
                decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
            if let Some(err) = map_status_to_error(resp_header.status, "download-file") {
                return Err(err);
            }
            if resp_header.length == 0 {
                return Ok(Bytes::new());
            }
            conn.get_mut()
                .recv_exact(resp_header.length as usize, timeout)
                .await
        };
        let outcome = with_cancellation(fut, cancellation).await;
        release_or_discard(&self.storage_pool, conn, &outcome);
        outcome
    }

    // ---- delete ----

    pub async fn delete_file(&self, file_id: &str, cancellation: Option<&CancellationToken>) -> Result<()> {
        let id = FileId::parse(file_id)?;
        with_retry(self.retry_count, cancellation, |_attempt| {
            self.delete_attempt(&id, cancellation)
        })
        .await
    }

    async fn delete_attempt(&self, id: &FileId, cancellation: Option<&CancellationToken>) -> Result<()> {
        let endpoint = self.router.query_update(&id.group_name, &id.remote_path).await?;
        self.storage_pool.add_endpoint(endpoint.clone());
        let mut conn = self.storage_pool.acquire(Some(&endpoint)).await?;

        let remote_bytes = id.remote_path.as_bytes();
        let mut body = BytesMut::with_capacity(FDFS_GROUP_NAME_MAX_LEN + remote_bytes.len());
        body.put_slice(&pad_string(&id.group_name, FDFS_GROUP_NAME_MAX_LEN));
        body.put_slice(remote_bytes);
        let header = encode_header(body.len() as u64, StorageCommand::DeleteFile as u8, 0);
        let timeout = self.network_timeout;

        let fut = async {
            conn.get_mut().send_all(&header, timeout).await?;
            conn.get_mut().send_all(&body, timeout).await?;
            let resp_header =
                decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
            if let Some(err) = map_status_to_error(resp_header.status, "delete-file") {
                return Err(err);
            }
            if resp_header.length > 0 {
                conn.get_mut()
                    .recv_exact(resp_header.length as usize, timeout)
                    .await?;
            }
            Ok(())
        };
        let outcome = with_cancellation(fut, cancellation).await;
        release_or_discard(&self.storage_pool, conn, &outcome);
        outcome
    }

    // ---- append / modify / truncate ----

    pub async fn append_file(
        &self,
        file_id: &str,
        data: &[u8],
        cancellation: Option<&CancellationToken>,
    ) -> Result<()> {
        if data.is_empty() {
            return Err(FastDFSError::InvalidArgument(
                "append data must not be empty".to_string(),
            ));
        }
        let id = FileId::parse(file_id)?;
        with_retry(self.retry_count, cancellation, |_attempt| {
            self.append_attempt(&id, data, cancellation)
        })
        .await
    }

    async fn append_attempt(
        &self,
        id: &FileId,
        data: &[u8],
        cancellation: Option<&CancellationToken>,
    ) -> Result<()> {
        let endpoint = self.router.query_update(&id.group_name, &id.remote_path).await?;
        self.storage_pool.add_endpoint(endpoint.clone());
        let mut conn = self.storage_pool.acquire(Some(&endpoint)).await?;

        let remote_bytes = id.remote_path.as_bytes();
        let body_len = 8 + 8 + FDFS_GROUP_NAME_MAX_LEN + remote_bytes.len() + data.len();
        let mut body = BytesMut::with_capacity(body_len);
        body.put_slice(&encode_int64(remote_bytes.len() as u64));
        body.put_slice(&encode_int64(data.len() as u64));
        body.put_slice(&pad_string(&id.group_name, FDFS_GROUP_NAME_MAX_LEN));
        body.put_slice(remote_bytes);
        body.put_slice(data);
        let header = encode_header(body.len() as u64, StorageCommand::AppendFile as u8, 0);
        let timeout = self.network_timeout;

        let fut = async {
            conn.get_mut().send_all(&header, timeout).await?;
            conn.get_mut().send_all(&body, timeout).await?;
            let resp_header =
                decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
            if let Some(err) = map_status_to_error(resp_header.status, "append-file") {
                return Err(err);
            }
            if resp_header.length > 0 {
                conn.get_mut()
                    .recv_exact(resp_header.length as usize, timeout)
                    .await?;
            }
            Ok(())
        };
        let outcome = with_cancellation(fut, cancellation).await;
        release_or_discard(&self.storage_pool, conn, &outcome);
        outcome
    }

    pub async fn modify_file(
        &self,
        file_id: &str,
        offset: u64,
        data: &[u8],
        cancellation: Option<&CancellationToken>,
    ) -> Result<()> {
        if data.is_empty() {
            return Err(FastDFSError::InvalidArgument(
                "modify data must not be empty".to_string(),
            ));
        }
        let id = FileId::parse(file_id)?;
        with_retry(self.retry_count, cancellation, |_attempt| {
            self.modify_attempt(&id, offset, data, cancellation)
        })
        .await
    }

    async fn modify_attempt(
        &self,
        id: &FileId,
        offset: u64,
        data: &[u8],
        cancellation: Option<&CancellationToken>,
    ) -> Result<()> {
        let endpoint = self.router.query_update(&id.group_name, &id.remote_path).await?;
        self.storage_pool.add_endpoint(endpoint.clone());
        let mut conn = self.storage_pool.acquire(Some(&endpoint)).await?;

        let remote_bytes = id.remote_path.as_bytes();
        let body_len = 8 + 8 + 8 + FDFS_GROUP_NAME_MAX_LEN + remote_bytes.len() + data.len();
        let mut body = BytesMut::with_capacity(body_len);
        body.put_slice(&encode_int64(remote_bytes.len() as u64));
        body.put_slice(&encode_int64(offset));
        body.put_slice(&encode_int64(data.len() as u64));
        body.put_slice(&pad_string(&id.group_name, FDFS_GROUP_NAME_MAX_LEN));
        body.put_slice(remote_bytes);
        body.put_slice(data);
        let header = encode_header(body.len() as u64, StorageCommand::ModifyFile as u8, 0);
        let timeout = self.network_timeout;

        let fut = async {
            conn.get_mut().send_all(&header, timeout).await?;
            conn.get_mut().send_all(&body, timeout).await?;
            let resp_header =
                decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
            if let Some(err) = map_status_to_error(resp_header.status, "modify-file") {
                return Err(err);
            }
            if resp_header.length > 0 {
                conn.get_mut()
                    .recv_exact(resp_header.length as usize, timeout)
                    .await?;
            }
            Ok(())
        };
        let outcome = with_cancellation(fut, cancellation).await;
        release_or_discard(&self.storage_pool, conn, &outcome);
        outcome
    }

    pub async fn truncate_file(
        &self,
        file_id: &str,
        size: u64,
        cancellation: Option<&CancellationToken>,
    ) -> Result<()> {
        let id = FileId::parse(file_id)?;
        with_retry(self.retry_count, cancellation, |_attempt| {
            self.truncate_attempt(&id, size, cancellation)
        })
        .await
    }

    async fn truncate_attempt(
        &self,
        id: &FileId,
        size: u64,
        cancellation: Option<&CancellationToken>,
    ) -> Result<()> {
        let endpoint = self.router.query_update(&id.group_name, &id.remote_path).await?;
        self.storage_pool.add_endpoint(endpoint.clone());
        let mut conn = self.storage_pool.acquire(Some(&endpoint)).await?;

        let remote_bytes = id.remote_path.as_bytes();
        let body_len = 8 + 8 + FDFS_GROUP_NAME_MAX_LEN + remote_bytes.len();
        let mut body = BytesMut::with_capacity(body_len);
        body.put_slice(&encode_int64(remote_bytes.len() as u64));
        body.put_slice(&encode_int64(size));
        body.put_slice(&pad_string(&id.group_name, FDFS_GROUP_NAME_MAX_LEN));
        body.put_slice(remote_bytes);
        let header = encode_header(body.len() as u64, StorageCommand::TruncateFile as u8, 0);
        let timeout = self.network_timeout;

        let fut = async {
            conn.get_mut().send_all(&header, timeout).await?;
            conn.get_mut().send_all(&body, timeout).await?;
            let resp_header =
                decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
            if let Some(err) = map_status_to_error(resp_header.status, "truncate-file") {
                return Err(err);
            }
            if resp_header.length > 0 {
                conn.get_mut()
                    .recv_exact(resp_header.length as usize, timeout)
                    .await?;
            }
            Ok(())
        };
        let outcome = with_cancellation(fut, cancellation).await;
        release_or_discard(&self.storage_pool, conn, &outcome);
        outcome
    }

    // ---- metadata ----

    pub async fn set_metadata(
        &self,
        file_id: &str,
        metadata: &Metadata,
        flag: MetadataFlag,
        cancellation: Option<&CancellationToken>,
    ) -> Result<()> {
        validate_metadata(metadata)?;
        let id = FileId::parse(file_id)?;
        with_retry(self.retry_count, cancellation, |_attempt| {
            self.set_metadata_attempt(&id, metadata, flag, cancellation)
        })
        .await
    }

    async fn set_metadata_attempt(
        &self,
        id: &FileId,
        metadata: &Metadata,
        flag: MetadataFlag,
        cancellation: Option<&CancellationToken>,
    ) -> Result<()> {
        let endpoint = self.router.query_update(&id.group_name, &id.remote_path).await?;
        self.storage_pool.add_endpoint(endpoint.clone());
        let mut conn = self.storage_pool.acquire(Some(&endpoint)).await?;

        let remote_bytes = id.remote_path.as_bytes();
        let encoded_meta = encode_metadata(metadata);
        let body_len =
            8 + 8 + 1 + FDFS_GROUP_NAME_MAX_LEN + remote_bytes.len() + encoded_meta.len();
        let mut body = BytesMut::with_capacity(body_len);
        body.put_slice(&encode_int64(remote_bytes.len() as u64));
        body.put_slice(&encode_int64(encoded_meta.len() as u64));
        body.put_slice(&[flag as u8]);
        body.put_slice(&pad_string(&id.group_name, FDFS_GROUP_NAME_MAX_LEN));
        body.put_slice(remote_bytes);
        body.put_slice(&encoded_meta);
        let header = encode_header(body.len() as u64, StorageCommand::SetMetadata as u8, 0);
        let timeout = self.network_timeout;

        let fut = async {
            conn.get_mut().send_all(&header, timeout).await?;
            conn.get_mut().send_all(&body, timeout).await?;
            let resp_header =
                decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
            if let Some(err) = map_status_to_error(resp_header.status, "set-metadata") {
                return Err(err);
            }
            if resp_header.length > 0 {
                conn.get_mut()
                    .recv_exact(resp_header.length as usize, timeout)
                    .await?;
            }
            Ok(())
        };
        let outcome = with_cancellation(fut, cancellation).await;
        release_or_discard(&self.storage_pool, conn, &outcome);
        outcome
    }

    pub async fn get_metadata(
        &self,
        file_id: &str,
        cancellation: Option<&CancellationToken>,
    ) -> Result<Metadata> {
        let id = FileId::parse(file_id)?;
        with_retry(self.retry_count, cancellation, |_attempt| {
            self.get_metadata_attempt(&id, cancellation)
        })
        .await
    }

    async fn get_metadata_attempt(
        &self,
        id: &FileId,
        cancellation: Option<&CancellationToken>,
    ) -> Result<Metadata> {
        let endpoint = self.router.query_fetch(&id.group_name, &id.remote_path).await?;
        self.storage_pool.add_endpoint(endpoint.clone());
        let mut conn = self.storage_pool.acquire(Some(&endpoint)).await?;

        let remote_bytes = id.remote_path.as_bytes();
        let mut body = BytesMut::with_capacity(FDFS_GROUP_NAME_MAX_LEN + remote_bytes.len());
        body.put_slice(&pad_string(&id.group_name, FDFS_GROUP_NAME_MAX_LEN));
        body.put_slice(remote_bytes);
        let header = encode_header(body.len() as u64, StorageCommand::GetMetadata as u8, 0);
        let timeout = self.network_timeout;

        let fut = async {
            conn.get_mut().send_all(&header, timeout).await?;
            conn.get_mut().send_all(&body, timeout).await?;
            let resp_header =
                decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
            if let Some(err) = map_status_to_error(resp_header.status, "get-metadata") {
                return Err(err);
            }
            if resp_header.length == 0 {
                return Ok(Metadata::new());
            }
            let body = conn
                .get_mut()
                .recv_exact(resp_header.length as usize, timeout)
                .await?;
            decode_metadata(&body)
        };
        let outcome = with_cancellation(fut, cancellation).await;
        release_or_discard(&self.storage_pool, conn, &outcome);
        outcome
    }

    // ---- file info ----

    /// Queries a file's size, creation time, CRC32, source IP and kind. `silent_on_missing`
    /// only affects logging: a missing file is always reported as `FileNotFound`, but
    /// callers checking existence speculatively can ask not to have it logged as a warning.
    pub async fn get_file_info(
        &self,
        file_id: &str,
        silent_on_missing: bool,
        cancellation: Option<&CancellationToken>,
    ) -> Result<FileInfo> {
        let id = FileId::parse(file_id)?;
        let result = with_retry(self.retry_count, cancellation, |_attempt| {
            self.get_file_info_attempt(&id, cancellation)
        })
        .await;

        if !silent_on_missing {
            if let Err(FastDFSError::FileNotFound(_)) = &result {
                warn!(file_id = %id, "file-info query found no such file");
            }
        }
        result
    }

    async fn get_file_info_attempt(
        &self,
        id: &FileId,
        cancellation: Option<&CancellationToken>,
    ) -> Result<FileInfo> {
        let endpoint = self.router.query_fetch(&id.group_name, &id.remote_path).await?;
        self.storage_pool.add_endpoint(endpoint.clone());
        let mut conn = self.storage_pool.acquire(Some(&endpoint)).await?;

        let remote_bytes = id.remote_path.as_bytes();
        let mut body = BytesMut::with_capacity(FDFS_GROUP_NAME_MAX_LEN + remote_bytes.len());
        body.put_slice(&pad_string(&id.group_name, FDFS_GROUP_NAME_MAX_LEN));
        body.put_slice(remote_bytes);
        let header = encode_header(body.len() as u64, StorageCommand::QueryFileInfo as u8, 0);
        let timeout = self.network_timeout;

        let fut = async {
            conn.get_mut().send_all(&header, timeout).await?;
            conn.get_mut().send_all(&body, timeout).await?;
            let resp_header =
                decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
            if let Some(err) = map_status_to_error(resp_header.status, "query-file-info") {
                return Err(err);
            }
            let resp_body = conn
                .get_mut()
                .recv_exact(resp_header.length as usize, timeout)
                .await?;
            parse_file_info_response(&resp_body)
        };
        let outcome = with_cancellation(fut, cancellation).await;
        release_or_discard(&self.storage_pool, conn, &outcome);
        outcome
    }

    /// Whether `file_id` exists, implemented as a silent `get_file_info` whose error
    /// (not-found or otherwise) collapses to `false`.
    pub async fn file_exists(&self, file_id: &str, cancellation: Option<&CancellationToken>) -> bool {
        self.get_file_info(file_id, true, cancellation).await.is_ok()
    }
}

async fn with_cancellation<T>(
    fut: impl Future<Output = Result<T>>,
    cancellation: Option<&CancellationToken>,
) -> Result<T> {
    match cancellation {
        Some(token) => {
            tokio::select! {
                r = fut => r,
                _ = token.cancelled() => Err(FastDFSError::Cancelled),
            }
        }
        None => fut.await,
    }
}

async fn with_retry<T, F, Fut>(
    retry_count: usize,
    cancellation: Option<&CancellationToken>,
    mut attempt: F,
) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt_no: u32 = 0;
    loop {
        if let Some(token) = cancellation {
            if token.is_cancelled() {
                return Err(FastDFSError::Cancelled);
            }
        }

        match attempt(attempt_no).await {
            Ok(v) => return Ok(v),
            Err(e) => {
                if !e.is_retryable() || attempt_no as usize >= retry_count {
                    return Err(e);
                }
                let backoff = Duration::from_secs(2u64.saturating_pow(attempt_no).min(MAX_BACKOFF_SECS));
                warn!(
                    attempt = attempt_no,
                    error = %e,
                    backoff_secs = backoff.as_secs(),
                    "retrying FastDFS operation after transient error"
                );
                match cancellation {
                    Some(token) => {
                        tokio::select! {
                            _ = tokio::time::sleep(backoff) => {}
                            _ = token.cancelled() => return Err(FastDFSError::Cancelled),
                        }
                    }
                    None => tokio::time::sleep(backoff).await,
                }
                attempt_no += 1;
            }
        }
    }
}

/// Decides whether a used connection is safe to return to the pool. Cancellation and
/// transient I/O errors leave the wire in an indeterminate state, so those are
/// discarded; a clean success or a terminal protocol-level error (bad argument, not
/// found) means the request/response cycle completed and the connection is still good.
fn release_or_discard<T>(pool: &ConnectionPool, conn: PooledConnection, outcome: &Result<T>) {
    let discard = match outcome {
        Ok(_) => false,
        Err(FastDFSError::Cancelled) => true,
        Err(e) => e.is_retryable(),
    };
    if discard {
        pool.discard(conn);
    } else {
        pool.release(conn);
    }
}

fn parse_upload_response(body: &[u8]) -> Result<String> {
    if body.len() < FDFS_GROUP_NAME_MAX_LEN + 1 {
        return Err(FastDFSError::InvalidResponse(
            "upload response too short".to_string(),
        ));
    }
    let group_name = unpad_string(&body[..FDFS_GROUP_NAME_MAX_LEN]);
    let remote_filename = String::from_utf8_lossy(&body[FDFS_GROUP_NAME_MAX_LEN..]).to_string();
    Ok(join_file_id(&group_name, &remote_filename))
}

fn parse_file_info_response(body: &[u8]) -> Result<FileInfo> {
    let min_len = 8 + 8 + 4 + IP_ADDRESS_SIZE;
    if body.len() < min_len {
        return Err(FastDFSError::InvalidResponse(
            "file-info response too short".to_string(),
        ));
    }

    let mut offset = 0;
    let file_size = decode_int64(&body[offset..offset + 8])?;
    offset += 8;
    let create_ts = decode_int64(&body[offset..offset + 8])?;
    offset += 8;
    let crc32 = decode_int32(&body[offset..offset + 4])?;
    offset += 4;
    let source_ip_addr = unpad_string(&body[offset..offset + IP_ADDRESS_SIZE]);
    offset += IP_ADDRESS_SIZE;

    let file_kind = if body.len() > offset {
        decode_file_kind(body[offset])
    } else {
        FileKind::Normal
    };

    Ok(FileInfo {
        file_size,
        create_time: std::time::UNIX_EPOCH + Duration::from_secs(create_ts),
        crc32,
        source_ip_addr,
        file_kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_upload_response_splits_group_and_path() {
        let mut body = BytesMut::new();
        body.put_slice(&pad_string("group1", FDFS_GROUP_NAME_MAX_LEN));
        body.put_slice(b"M00/00/00/test.jpg");
        let file_id = parse_upload_response(&body).unwrap();
        assert_eq!(file_id, "group1/M00/00/00/test.jpg");
    }

    #[test]
    fn parse_upload_response_rejects_short_body() {
        assert!(parse_upload_response(b"short").is_err());
    }

    #[test]
    fn parse_file_info_response_defaults_kind_when_flag_byte_absent() {
        let mut body = BytesMut::new();
        body.put_slice(&encode_int64(1024));
        body.put_slice(&encode_int64(1_700_000_000));
        body.put_slice(&encode_int32(0xDEADBEEF));
        body.put_slice(&pad_string("192.168.1.1", IP_ADDRESS_SIZE));
        let info = parse_file_info_response(&body).unwrap();
        assert_eq!(info.file_size, 1024);
        assert_eq!(info.crc32, 0xDEADBEEF);
        assert_eq!(info.source_ip_addr, "192.168.1.1");
        assert!(matches!(info.file_kind, FileKind::Normal));
    }

    #[test]
    fn parse_file_info_response_reads_trailing_kind_flag() {
        let mut body = BytesMut::new();
        body.put_slice(&encode_int64(0));
        body.put_slice(&encode_int64(0));
        body.put_slice(&encode_int32(0));
        body.put_slice(&pad_string("", IP_ADDRESS_SIZE));
        body.put_slice(&[encode_file_kind(FileKind::Appender)]);
        let info = parse_file_info_response(&body).unwrap();
        assert!(matches!(info.file_kind, FileKind::Appender));
    }

    // Property 6: with retry_count = N and transient failures injected on the first
    // k < N+1 attempts, the operation succeeds on attempt k+1; with k = N+1 transient
    // failures, the last transient error surfaces. Time is paused so the backoff
    // sleeps resolve without the test actually waiting on them.

    #[tokio::test(start_paused = true)]
    async fn with_retry_succeeds_after_k_transient_failures() {
        use std::sync::atomic::{AtomicU32, Ordering};

        let retry_count: usize = 5;
        let k: u32 = 3; // fail on attempts 0, 1, 2; succeed on attempt 3
        let calls = AtomicU32::new(0);

        let result: Result<&'static str> = with_retry(retry_count, None, |attempt_no| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt_no < k {
                    Err(FastDFSError::NoStorageServer)
                } else {
                    Ok("ok")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), k + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn with_retry_surfaces_last_error_once_retries_exhausted() {
        use std::sync::atomic::{AtomicU32, Ordering};

        let retry_count = 2;
        let calls = AtomicU32::new(0);

        let result: Result<()> = with_retry(retry_count, None, |_attempt_no| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(FastDFSError::NoStorageServer) }
        })
        .await;

        assert!(matches!(result, Err(FastDFSError::NoStorageServer)));
        // attempts 0, 1, 2 (retry_count + 1 total attempts), then the error surfaces.
        assert_eq!(calls.load(Ordering::SeqCst), retry_count as u32 + 1);
    }

    #[tokio::test]
    async fn with_retry_does_not_retry_non_retryable_errors() {
        use std::sync::atomic::{AtomicU32, Ordering};

        let calls = AtomicU32::new(0);
        let result: Result<()> = with_retry(5, None, |_attempt_no| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(FastDFSError::FileNotFound("x".to_string())) }
        })
        .await;

        assert!(matches!(result, Err(FastDFSError::FileNotFound(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn with_retry_honors_cancellation_between_attempts() {
        let token = CancellationToken::new();
        token.cancel();
        let result: Result<()> =
            with_retry(5, Some(&token), |_attempt_no| async { Err(FastDFSError::NoStorageServer) }).await;
        assert!(matches!(result, Err(FastDFSError::Cancelled)));
    }
}
