//! Tracker routing
//!
//! Every storage operation first asks a tracker which storage endpoint handles it.
//! There are three distinct query shapes, each a single request/response over one
//! tracker connection: QueryStore (uploads), QueryFetch (downloads and reads),
//! QueryUpdate (mutations). Fetch and update use different command codes even though
//! their response bodies share a shape, because the tracker may route them to
//! different replicas within a group.

use bytes::{BufMut, BytesMut};
use std::sync::Arc;
use std::time::Duration;

use crate::errors::{map_status_to_error, FastDFSError, Result};
use crate::pool::ConnectionPool;
use crate::protocol::*;
use crate::types::*;

/// Resolves storage locations for upload, fetch, and update operations by querying the
/// tracker pool.
pub struct Router {
    tracker_pool: Arc<ConnectionPool>,
    network_timeout: Duration,
}

impl Router {
    pub fn new(tracker_pool: Arc<ConnectionPool>, network_timeout: Duration) -> Self {
        Self {
            tracker_pool,
            network_timeout,
        }
    }

    /// QueryStore: picks a storage endpoint to upload to. With `group` absent, the
    /// tracker applies its own group-selection policy.
    pub async fn query_store(&self, group: Option<&str>) -> Result<StorageLocation> {
        let mut conn = self.tracker_pool.acquire(None).await?;

        let (cmd, body): (u8, BytesMut) = match group {
            None => (TrackerCommand::ServiceQueryStoreWithoutGroupOne as u8, BytesMut::new()),
            Some(g) => {
                let mut b = BytesMut::with_capacity(FDFS_GROUP_NAME_MAX_LEN);
                b.put(pad_string(g, FDFS_GROUP_NAME_MAX_LEN).as_ref());
                (TrackerCommand::ServiceQueryStoreWithGroupOne as u8, b)
            }
        };

        let header = encode_header(body.len() as u64, cmd, 0);
        let timeout = self.network_timeout;
        conn.get_mut().send_all(&header, timeout).await?;
        if !body.is_empty() {
            conn.get_mut().send_all(&body, timeout).await?;
        }

        let resp_header = decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
        if let Some(err) = resp_header_error(resp_header.status, "tracker query-store") {
            self.tracker_pool.discard(conn);
            return Err(err);
        }
        if resp_header.length == 0 {
            self.tracker_pool.release(conn);
            return Err(FastDFSError::NoStorageServer);
        }

        let body = conn.get_mut().recv_exact(resp_header.length as usize, timeout).await?;
        let result = parse_store_response(&body);
        self.tracker_pool.release(conn);
        result
    }

    /// QueryFetch: picks a storage endpoint to download or read from.
    pub async fn query_fetch(&self, group_name: &str, remote_filename: &str) -> Result<Endpoint> {
        self.query_read_or_update(
            TrackerCommand::ServiceQueryFetchOne as u8,
            group_name,
            remote_filename,
            "tracker query-fetch",
        )
        .await
    }

    /// QueryUpdate: picks the storage endpoint that must handle a mutation (delete,
    /// set-metadata, append, modify, truncate).
    pub async fn query_update(&self, group_name: &str, remote_filename: &str) -> Result<Endpoint> {
        self.query_read_or_update(
            TrackerCommand::ServiceQueryUpdate as u8,
            group_name,
            remote_filename,
            "tracker query-update",
        )
        .await
    }

    async fn query_read_or_update(
        &self,
        cmd: u8,
        group_name: &str,
        remote_filename: &str,
        context: &str,
    ) -> Result<Endpoint> {
        let mut conn = self.tracker_pool.acquire(None).await?;

        let remote_bytes = remote_filename.as_bytes();
        let body_len = FDFS_GROUP_NAME_MAX_LEN + remote_bytes.len();
        let header = encode_header(body_len as u64, cmd, 0);

        let mut body = BytesMut::with_capacity(body_len);
        body.put(pad_string(group_name, FDFS_GROUP_NAME_MAX_LEN).as_ref());
        body.put_slice(remote_bytes);

        let timeout = self.network_timeout;
        conn.get_mut().send_all(&header, timeout).await?;
        conn.get_mut().send_all(&body, timeout).await?;

        let resp_header = decode_header(&conn.get_mut().recv_exact(FDFS_PROTO_HEADER_LEN, timeout).await?)?;
        if let Some(err) = resp_header_error(resp_header.status, context) {
            self.tracker_pool.discard(conn);
            return Err(err);
        }

        let resp_body = conn.get_mut().recv_exact(resp_header.length as usize, timeout).await?;
        let result = parse_fetch_or_update_response(&resp_body, context);
        self.tracker_pool.release(conn);
        result
    }
}

fn resp_header_error(status: u8, context: &str) -> Option<FastDFSError> {
    map_status_to_error(status, context)
}

fn parse_store_response(body: &[u8]) -> Result<StorageLocation> {
    let min_len = FDFS_GROUP_NAME_MAX_LEN + IP_ADDRESS_SIZE + 8 + 1;
    if body.len() < min_len {
        return Err(FastDFSError::InvalidResponse(
            "query-store response too short".to_string(),
        ));
    }

    let mut offset = 0;
    let group_name = unpad_string(&body[offset..offset + FDFS_GROUP_NAME_MAX_LEN]);
    offset += FDFS_GROUP_NAME_MAX_LEN;

    let ip_addr = unpad_string(&body[offset..offset + IP_ADDRESS_SIZE]);
    offset += IP_ADDRESS_SIZE;

    let port = decode_int64(&body[offset..offset + 8])? as u16;
    offset += 8;

    let store_path_index = body[offset];

    Ok(StorageLocation {
        group_name,
        endpoint: Endpoint::new(ip_addr, port)?,
        store_path_index,
    })
}

fn parse_fetch_or_update_response(body: &[u8], context: &str) -> Result<Endpoint> {
    let min_len = FDFS_GROUP_NAME_MAX_LEN + IP_ADDRESS_SIZE + 8;
    if body.len() < min_len {
        return Err(FastDFSError::InvalidResponse(format!(
            "{} response too short",
            context
        )));
    }

    let ip_addr = unpad_string(&body[FDFS_GROUP_NAME_MAX_LEN..FDFS_GROUP_NAME_MAX_LEN + IP_ADDRESS_SIZE]);
    let port_offset = FDFS_GROUP_NAME_MAX_LEN + IP_ADDRESS_SIZE;
    let port = decode_int64(&body[port_offset..port_offset + 8])? as u16;

    Endpoint::new(ip_addr, port)
}
