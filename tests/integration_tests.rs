//! Integration tests for FastDFS client
//!
//! These tests drive a tiny in-process tracker+storage stand-in that speaks just
//! enough of the wire protocol to script each scenario's byte exchange, the same way
//! `src/pool.rs`'s own `echo_listener()` test helper stands in for a real peer. No
//! live FastDFS cluster is required to run this file.

use bytes::Bytes;
use fastdfs::protocol::*;
use fastdfs::types::*;
use fastdfs::{Client, ClientConfig, FileKind, MetadataFlag};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU16, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

// ---- mock tracker + storage pair ----
//
// One listener plays both roles: the tracker commands (100-range) hand back the
// listener's own address as the storage location, so every operation's second leg
// talks to the same mock. This mirrors how a single-node FastDFS deployment (tracker
// and storage colocated) behaves from the client's point of view.

struct StoredFile {
    data: Vec<u8>,
    kind: FileKind,
    metadata: HashMap<String, String>,
    created: SystemTime,
}

struct MockFastDFS {
    files: Mutex<HashMap<String, StoredFile>>,
    counter: AtomicU64,
    group: String,
    /// The mock's own listening port, handed back to clients as the storage location
    /// for every tracker query. Set once by `spawn_mock` right after binding.
    store_port: AtomicU16,
}

impl MockFastDFS {
    fn new(group: &str) -> Arc<Self> {
        Arc::new(Self {
            files: Mutex::new(HashMap::new()),
            counter: AtomicU64::new(0),
            group: group.to_string(),
            store_port: AtomicU16::new(0),
        })
    }

    fn next_path(&self, ext: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        if ext.is_empty() {
            format!("M00/00/00/f{:08}", n)
        } else {
            format!("M00/00/00/f{:08}.{}", n, ext)
        }
    }

    fn key(group: &str, path: &str) -> String {
        format!("{}/{}", group, path)
    }
}

/// Binds a listener on an ephemeral port and spawns an accept loop that dispatches
/// every connection's requests against `store`. Returns the endpoint clients should
/// use as their sole tracker address.
async fn spawn_mock(store: Arc<MockFastDFS>) -> Endpoint {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    store.store_port.store(addr.port(), Ordering::SeqCst);
    tokio::spawn(async move {
        loop {
            let Ok((sock, _)) = listener.accept().await else {
                break;
            };
            let store = store.clone();
            tokio::spawn(handle_connection(sock, store));
        }
    });
    Endpoint::new(addr.ip().to_string(), addr.port()).unwrap()
}

/// Reserves a port and releases it without ever accepting a connection, so a client
/// that dials it observes a connection refusal rather than a hang.
async fn dead_endpoint() -> Endpoint {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Endpoint::new(addr.ip().to_string(), addr.port()).unwrap()
}

async fn handle_connection(mut sock: TcpStream, store: Arc<MockFastDFS>) {
    loop {
        let mut header_buf = [0u8; FDFS_PROTO_HEADER_LEN];
        if sock.read_exact(&mut header_buf).await.is_err() {
            return;
        }
        let header = match decode_header(&header_buf) {
            Ok(h) => h,
            Err(_) => return,
        };
        let mut body = vec![0u8; header.length as usize];
        if header.length > 0 && sock.read_exact(&mut body).await.is_err() {
            return;
        }

        let (status, resp_body) = handle_request(&store, header.cmd, &body);
        let resp_header = encode_header(resp_body.len() as u64, 0, status);
        if sock.write_all(&resp_header).await.is_err() {
            return;
        }
        if !resp_body.is_empty() && sock.write_all(&resp_body).await.is_err() {
            return;
        }
    }
}

const NOT_FOUND: u8 = 2;

fn handle_request(store: &MockFastDFS, cmd: u8, body: &[u8]) -> (u8, Bytes) {
    match cmd {
        // ServiceQueryStoreWithoutGroupOne / ServiceQueryStoreWithGroupOne
        101 | 104 => {
            let mut resp = Vec::with_capacity(FDFS_GROUP_NAME_MAX_LEN + IP_ADDRESS_SIZE + 8 + 1);
            resp.extend_from_slice(&pad_string(&store.group, FDFS_GROUP_NAME_MAX_LEN));
            resp.extend_from_slice(&pad_string("127.0.0.1", IP_ADDRESS_SIZE));
            resp.extend_from_slice(&encode_int64(store.store_port.load(Ordering::SeqCst) as u64));
            resp.push(0u8); // store_path_index
            (0, Bytes::from(resp))
        }
        // ServiceQueryFetchOne / ServiceQueryUpdate
        102 | 103 => {
            let mut resp = Vec::with_capacity(FDFS_GROUP_NAME_MAX_LEN + IP_ADDRESS_SIZE + 8);
            resp.extend_from_slice(&pad_string(&store.group, FDFS_GROUP_NAME_MAX_LEN));
            resp.extend_from_slice(&pad_string("127.0.0.1", IP_ADDRESS_SIZE));
            resp.extend_from_slice(&encode_int64(store.store_port.load(Ordering::SeqCst) as u64));
            (0, Bytes::from(resp))
        }
        // UploadFile / UploadAppenderFile
        11 | 23 => {
            let ext = unpad_string(&body[1..7]);
            let data = body[7..].to_vec();
            let path = store.next_path(&ext);
            let kind = if cmd == 23 { FileKind::Appender } else { FileKind::Normal };
            store.files.lock().unwrap().insert(
                MockFastDFS::key(&store.group, &path),
                StoredFile {
                    data,
                    kind,
                    metadata: HashMap::new(),
                    created: SystemTime::now(),
                },
            );
            upload_response(&store.group, &path)
        }
        // UploadSlaveFile
        21 => {
            let master_len = decode_int64(&body[0..8]).unwrap() as usize;
            let data_len = decode_int64(&body[8..16]).unwrap() as usize;
            let ext = unpad_string(&body[32..38]);
            let data = body[38 + master_len..38 + master_len + data_len].to_vec();
            let path = store.next_path(&ext);
            store.files.lock().unwrap().insert(
                MockFastDFS::key(&store.group, &path),
                StoredFile {
                    data,
                    kind: FileKind::Slave,
                    metadata: HashMap::new(),
                    created: SystemTime::now(),
                },
            );
            upload_response(&store.group, &path)
        }
        // DownloadFile
        14 => {
            let offset = decode_int64(&body[0..8]).unwrap() as usize;
            let length = decode_int64(&body[8..16]).unwrap() as usize;
            let group = unpad_string(&body[16..32]);
            let remote_path = String::from_utf8_lossy(&body[32..]).to_string();
            let files = store.files.lock().unwrap();
            match files.get(&MockFastDFS::key(&group, &remote_path)) {
                None => (NOT_FOUND, Bytes::new()),
                Some(f) => {
                    let start = offset.min(f.data.len());
                    let end = if length == 0 { f.data.len() } else { (start + length).min(f.data.len()) };
                    (0, Bytes::copy_from_slice(&f.data[start..end]))
                }
            }
        }
        // DeleteFile
        12 => {
            let group = unpad_string(&body[0..16]);
            let remote_path = String::from_utf8_lossy(&body[16..]).to_string();
            let removed = store
                .files
                .lock()
                .unwrap()
                .remove(&MockFastDFS::key(&group, &remote_path))
                .is_some();
            if removed { (0, Bytes::new()) } else { (NOT_FOUND, Bytes::new()) }
        }
        // AppendFile
        24 => {
            let remote_len = decode_int64(&body[0..8]).unwrap() as usize;
            let data_len = decode_int64(&body[8..16]).unwrap() as usize;
            let group = unpad_string(&body[16..32]);
            let remote_path = String::from_utf8_lossy(&body[32..32 + remote_len]).to_string();
            let data = &body[32 + remote_len..32 + remote_len + data_len];
            let mut files = store.files.lock().unwrap();
            match files.get_mut(&MockFastDFS::key(&group, &remote_path)) {
                None => (NOT_FOUND, Bytes::new()),
                Some(f) => {
                    f.data.extend_from_slice(data);
                    (0, Bytes::new())
                }
            }
        }
        // ModifyFile
        34 => {
            let remote_len = decode_int64(&body[0..8]).unwrap() as usize;
            let offset = decode_int64(&body[8..16]).unwrap() as usize;
            let data_len = decode_int64(&body[16..24]).unwrap() as usize;
            let group = unpad_string(&body[24..40]);
            let remote_path = String::from_utf8_lossy(&body[40..40 + remote_len]).to_string();
            let data = &body[40 + remote_len..40 + remote_len + data_len];
            let mut files = store.files.lock().unwrap();
            match files.get_mut(&MockFastDFS::key(&group, &remote_path)) {
                None => (NOT_FOUND, Bytes::new()),
                Some(f) => {
                    let end = offset + data.len();
                    if f.data.len() < end {
                        f.data.resize(end, 0);
                    }
                    f.data[offset..end].copy_from_slice(data);
                    (0, Bytes::new())
                }
            }
        }
        // TruncateFile
        36 => {
            let remote_len = decode_int64(&body[0..8]).unwrap() as usize;
            let size = decode_int64(&body[8..16]).unwrap() as usize;
            let group = unpad_string(&body[16..32]);
            let remote_path = String::from_utf8_lossy(&body[32..32 + remote_len]).to_string();
            let mut files = store.files.lock().unwrap();
            match files.get_mut(&MockFastDFS::key(&group, &remote_path)) {
                None => (NOT_FOUND, Bytes::new()),
                Some(f) => {
                    f.data.resize(size, 0);
                    (0, Bytes::new())
                }
            }
        }
        // SetMetadata
        13 => {
            let remote_len = decode_int64(&body[0..8]).unwrap() as usize;
            let meta_len = decode_int64(&body[8..16]).unwrap() as usize;
            let flag = body[16];
            let group = unpad_string(&body[17..33]);
            let remote_path = String::from_utf8_lossy(&body[33..33 + remote_len]).to_string();
            let meta_bytes = &body[33 + remote_len..33 + remote_len + meta_len];
            let incoming = decode_metadata(meta_bytes).unwrap();
            let mut files = store.files.lock().unwrap();
            match files.get_mut(&MockFastDFS::key(&group, &remote_path)) {
                None => (NOT_FOUND, Bytes::new()),
                Some(f) => {
                    if flag == MetadataFlag::Overwrite as u8 {
                        f.metadata = incoming;
                    } else {
                        f.metadata.extend(incoming);
                    }
                    (0, Bytes::new())
                }
            }
        }
        // GetMetadata
        15 => {
            let group = unpad_string(&body[0..16]);
            let remote_path = String::from_utf8_lossy(&body[16..]).to_string();
            let files = store.files.lock().unwrap();
            match files.get(&MockFastDFS::key(&group, &remote_path)) {
                None => (NOT_FOUND, Bytes::new()),
                Some(f) => (0, encode_metadata(&f.metadata)),
            }
        }
        // QueryFileInfo
        22 => {
            let group = unpad_string(&body[0..16]);
            let remote_path = String::from_utf8_lossy(&body[16..]).to_string();
            let files = store.files.lock().unwrap();
            match files.get(&MockFastDFS::key(&group, &remote_path)) {
                None => (NOT_FOUND, Bytes::new()),
                Some(f) => {
                    let created_ts = f
                        .created
                        .duration_since(std::time::UNIX_EPOCH)
                        .unwrap()
                        .as_secs();
                    let mut resp = Vec::with_capacity(8 + 8 + 4 + IP_ADDRESS_SIZE + 1);
                    resp.extend_from_slice(&encode_int64(f.data.len() as u64));
                    resp.extend_from_slice(&encode_int64(created_ts));
                    resp.extend_from_slice(&encode_int32(compute_crc32(&f.data)));
                    resp.extend_from_slice(&pad_string("127.0.0.1", IP_ADDRESS_SIZE));
                    resp.push(encode_file_kind(f.kind));
                    (0, Bytes::from(resp))
                }
            }
        }
        other => panic!("mock server received unhandled command code {}", other),
    }
}

fn upload_response(group: &str, path: &str) -> (u8, Bytes) {
    let mut resp = Vec::with_capacity(FDFS_GROUP_NAME_MAX_LEN + path.len());
    resp.extend_from_slice(&pad_string(group, FDFS_GROUP_NAME_MAX_LEN));
    resp.extend_from_slice(path.as_bytes());
    (0, Bytes::from(resp))
}

/// Spawns a mock tracker+storage pair and returns a `Client` wired to talk to it.
async fn mock_client() -> (Client, Arc<MockFastDFS>) {
    let store = MockFastDFS::new("group1");
    let endpoint = spawn_mock(store.clone()).await;
    let config = ClientConfig::new(vec![endpoint.to_string()]);
    let client = Client::new(config).unwrap();
    (client, store)
}

/// S1: upload, download, delete round-trip, ending with a not-found check.
#[tokio::test]
async fn test_s1_upload_download_delete_cycle() {
    let (client, _store) = mock_client().await;

    let test_data = b"Hello, FastDFS! This is a test file.";
    let file_id = client
        .upload_buffer(test_data, "txt", None)
        .await
        .expect("Upload should succeed");

    assert!(!file_id.is_empty(), "File ID should not be empty after upload");
    assert!(file_id.contains('/'), "File ID should contain group separator");

    let downloaded_data = client
        .download_file(&file_id)
        .await
        .expect("Download should succeed");
    assert_eq!(downloaded_data.as_ref(), test_data, "Downloaded data should match uploaded data");

    client.delete_file(&file_id).await.expect("Delete should succeed");

    let exists = client.file_exists(&file_id).await;
    assert!(!exists, "File should not exist after deletion");

    client.close().await;
}

/// S1 variant: uploading straight from a local file on disk.
#[tokio::test]
async fn test_upload_file_from_disk() {
    let (client, _store) = mock_client().await;

    let temp_dir = std::env::temp_dir();
    let temp_file = temp_dir.join(format!("test-{}.txt", chrono::Utc::now().timestamp_nanos_opt().unwrap()));
    let test_data = b"Test file content from disk";
    std::fs::write(&temp_file, test_data).expect("Failed to write temp file");

    let file_id = client
        .upload_file(temp_file.to_str().unwrap(), None)
        .await
        .expect("Upload should succeed");
    assert!(!file_id.is_empty(), "File ID should not be empty");

    let downloaded_data = client.download_file(&file_id).await.expect("Download should succeed");
    assert_eq!(downloaded_data.as_ref(), test_data, "Downloaded data should match file content");

    client.delete_file(&file_id).await.ok();
    std::fs::remove_file(&temp_file).ok();
    client.close().await;
}

/// S1 variant: downloading straight to a local file on disk.
#[tokio::test]
async fn test_download_to_file() {
    let (client, _store) = mock_client().await;

    let test_data = b"Test data for download to file";
    let file_id = client.upload_buffer(test_data, "bin", None).await.expect("Upload should succeed");

    let temp_dir = std::env::temp_dir();
    let temp_file = temp_dir.join(format!("download-{}.bin", chrono::Utc::now().timestamp_nanos_opt().unwrap()));

    client
        .download_to_file(&file_id, temp_file.to_str().unwrap())
        .await
        .expect("Download to file should succeed");

    let downloaded_data = std::fs::read(&temp_file).expect("Failed to read downloaded file");
    assert_eq!(downloaded_data.as_slice(), test_data, "Downloaded file should contain correct data");

    std::fs::remove_file(&temp_file).ok();
    client.delete_file(&file_id).await.ok();
    client.close().await;
}

/// S2: set metadata at upload time, read it back, then overwrite it and confirm the
/// old keys are gone.
#[tokio::test]
async fn test_s2_metadata_merge_then_overwrite() {
    let (client, _store) = mock_client().await;

    let test_data = b"File with metadata";
    let mut metadata = HashMap::new();
    metadata.insert("author".to_string(), "Test User".to_string());
    metadata.insert("date".to_string(), "2025-01-15".to_string());
    metadata.insert("version".to_string(), "1.0".to_string());

    let file_id = client
        .upload_buffer(test_data, "txt", Some(&metadata))
        .await
        .expect("Upload should succeed");

    let retrieved_metadata = client.get_metadata(&file_id).await.expect("Get metadata should succeed");
    assert_eq!(retrieved_metadata.len(), metadata.len(), "Retrieved metadata should have same number of entries");
    for (key, value) in &metadata {
        assert_eq!(retrieved_metadata.get(key), Some(value), "Metadata key '{}' should have correct value", key);
    }

    let mut new_metadata = HashMap::new();
    new_metadata.insert("author".to_string(), "Updated User".to_string());
    new_metadata.insert("status".to_string(), "modified".to_string());

    client
        .set_metadata(&file_id, &new_metadata, MetadataFlag::Overwrite)
        .await
        .expect("Set metadata should succeed");

    let updated_metadata = client.get_metadata(&file_id).await.expect("Get metadata should succeed");
    assert_eq!(updated_metadata.len(), new_metadata.len(), "Updated metadata should have new number of entries");
    assert_eq!(updated_metadata.get("author"), Some(&"Updated User".to_string()), "Author should be updated");
    assert_eq!(updated_metadata.get("status"), Some(&"modified".to_string()), "Status should be set");
    assert_eq!(updated_metadata.get("date"), None, "Overwrite should drop keys absent from the new map");

    client.delete_file(&file_id).await.ok();
    client.close().await;
}

/// Verifies file-info reports size, a non-zero CRC32, and a source IP.
#[tokio::test]
async fn test_get_file_info() {
    let (client, _store) = mock_client().await;

    let test_data = b"Test data for file info";
    let file_id = client.upload_buffer(test_data, "bin", None).await.expect("Upload should succeed");

    let file_info = client.get_file_info(&file_id).await.expect("Get file info should succeed");
    assert_eq!(file_info.file_size, test_data.len() as u64, "File size should match uploaded data size");
    assert!(file_info.crc32 > 0, "CRC32 should be calculated and non-zero");
    assert!(!file_info.source_ip_addr.is_empty(), "Source IP address should be set");
    assert_eq!(file_info.file_kind, FileKind::Normal);

    client.delete_file(&file_id).await.ok();
    client.close().await;
}

/// Verifies `file_exists` flips from true to false across a delete.
#[tokio::test]
async fn test_file_exists() {
    let (client, _store) = mock_client().await;

    let test_data = b"Test existence check";
    let file_id = client.upload_buffer(test_data, "txt", None).await.expect("Upload should succeed");

    assert!(client.file_exists(&file_id).await, "File should exist after upload");
    client.delete_file(&file_id).await.expect("Delete should succeed");
    assert!(!client.file_exists(&file_id).await, "File should not exist after deletion");

    client.close().await;
}

/// S3: download a specific byte range out of a larger file.
#[tokio::test]
async fn test_s3_download_range() {
    let (client, _store) = mock_client().await;

    let test_data = b"0123456789".repeat(10); // 100 bytes total
    let file_id = client.upload_buffer(&test_data, "bin", None).await.expect("Upload should succeed");

    let offset = 10u64;
    let length = 20u64;
    let range_data = client
        .download_file_range(&file_id, offset, length)
        .await
        .expect("Range download should succeed");

    assert_eq!(range_data.len(), length as usize, "Downloaded range should have requested length");
    assert_eq!(
        range_data.as_ref(),
        &test_data[offset as usize..(offset + length) as usize],
        "Downloaded range should match original data slice"
    );

    client.delete_file(&file_id).await.ok();
    client.close().await;
}

/// S4: appender file lifecycle — append, modify, truncate.
#[tokio::test]
async fn test_s4_appender_file_lifecycle() {
    let (client, _store) = mock_client().await;

    let file_id = client
        .upload_appender_buffer(b"initial-", "txt", None)
        .await
        .expect("Appender upload should succeed");

    client.append_file(&file_id, b"appended").await.expect("Append should succeed");
    let after_append = client.download_file(&file_id).await.expect("Download after append should succeed");
    assert_eq!(after_append.as_ref(), b"initial-appended");

    client.modify_file(&file_id, 0, b"INITIAL-").await.expect("Modify should succeed");
    let after_modify = client.download_file(&file_id).await.expect("Download after modify should succeed");
    assert_eq!(after_modify.as_ref(), b"INITIAL-appended");

    client.truncate_file(&file_id, 8).await.expect("Truncate should succeed");
    let after_truncate = client.download_file(&file_id).await.expect("Download after truncate should succeed");
    assert_eq!(after_truncate.as_ref(), b"INITIAL-");

    let info = client.get_file_info(&file_id).await.unwrap();
    assert_eq!(info.file_kind, FileKind::Appender);

    client.delete_file(&file_id).await.ok();
    client.close().await;
}

/// S5: a slave file uploaded against a master stays independently fetchable and
/// deletable — deleting the master doesn't touch it.
#[tokio::test]
async fn test_s5_upload_slave_file() {
    let (client, _store) = mock_client().await;

    let master_id = client.upload_buffer(b"master content", "jpg", None).await.expect("Master upload should succeed");

    let slave_id = client
        .upload_slave_file(&master_id, "_thumb", "jpg", b"thumbnail bytes", None)
        .await
        .expect("Slave upload should succeed");

    let master_data = client.download_file(&master_id).await.unwrap();
    assert_eq!(master_data.as_ref(), b"master content");

    let slave_data = client.download_file(&slave_id).await.unwrap();
    assert_eq!(slave_data.as_ref(), b"thumbnail bytes");

    let info = client.get_file_info(&slave_id).await.unwrap();
    assert_eq!(info.file_kind, FileKind::Slave);

    client.delete_file(&master_id).await.expect("Deleting the master should succeed");
    let slave_still_there = client.download_file(&slave_id).await;
    assert!(slave_still_there.is_ok(), "Slave file must survive its master's deletion");

    client.delete_file(&slave_id).await.ok();
    client.close().await;
}

/// An in-flight download observes a pre-cancelled `CancellationToken` instead of
/// completing normally.
#[tokio::test]
async fn test_download_file_cancellable() {
    let (client, _store) = mock_client().await;

    let file_id = client.upload_buffer(b"cancellable download", "bin", None).await.expect("Upload should succeed");

    let cancellation = CancellationToken::new();
    cancellation.cancel();

    let result = client.download_file_cancellable(&file_id, &cancellation).await;
    assert!(result.is_err(), "Pre-cancelled download should fail");

    client.delete_file(&file_id).await.ok();
    client.close().await;
}

/// `pool_enabled(false)` must not change observable behavior, only connection reuse.
#[tokio::test]
async fn test_pool_disabled_round_trip() {
    let store = MockFastDFS::new("group1");
    let endpoint = spawn_mock(store.clone()).await;
    let config = ClientConfig::new(vec![endpoint.to_string()]).with_pool_enabled(false);
    let client = Client::new(config).unwrap();

    let file_id = client.upload_buffer(b"no pooling", "txt", None).await.expect("Upload should succeed");
    let data = client.download_file(&file_id).await.expect("Download should succeed");
    assert_eq!(data.as_ref(), b"no pooling");

    client.delete_file(&file_id).await.ok();
    client.close().await;
}

/// S6: the first configured tracker refuses every connection; the client must still
/// complete the operation by round-robining to the second, live tracker.
#[tokio::test]
async fn test_s6_tracker_failover() {
    let store = MockFastDFS::new("group1");
    let live = spawn_mock(store.clone()).await;
    let dead = dead_endpoint().await;

    // Index 0 (dead) is tried first; round-robin hands the retry attempt index 1 (live).
    let config = ClientConfig::new(vec![dead.to_string(), live.to_string()]).with_retry_count(2);
    let client = Client::new(config).unwrap();

    let file_id = client
        .upload_buffer(b"failover content", "bin", None)
        .await
        .expect("Upload should succeed once the round-robin reaches the live tracker");

    let data = client.download_file(&file_id).await.expect("Download should succeed via the live tracker");
    assert_eq!(data.as_ref(), b"failover content");

    client.delete_file(&file_id).await.ok();
    client.close().await;
}
