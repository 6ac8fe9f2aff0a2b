//! FastDFS Protocol Types and Constants
//!
//! This module defines all protocol-level constants, command codes, and data structures
//! used in communication with FastDFS tracker and storage servers.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime};

use crate::errors::{FastDFSError, Result};

/// Default network ports for FastDFS servers
pub const TRACKER_DEFAULT_PORT: u16 = 22122;
pub const STORAGE_DEFAULT_PORT: u16 = 23000;

/// Protocol header size
pub const FDFS_PROTO_HEADER_LEN: usize = 10;

/// Field size limits
pub const FDFS_GROUP_NAME_MAX_LEN: usize = 16;
pub const FDFS_FILE_EXT_NAME_MAX_LEN: usize = 6;
pub const FDFS_MAX_META_NAME_LEN: usize = 64;
pub const FDFS_MAX_META_VALUE_LEN: usize = 256;
pub const FDFS_FILE_PREFIX_MAX_LEN: usize = 16;
pub const FDFS_STORAGE_ID_MAX_SIZE: usize = 16;
pub const FDFS_VERSION_SIZE: usize = 8;
pub const IP_ADDRESS_SIZE: usize = 16;

/// Protocol separators
pub const FDFS_RECORD_SEPARATOR: u8 = 0x01;
pub const FDFS_FIELD_SEPARATOR: u8 = 0x02;

/// Tracker protocol commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TrackerCommand {
    ServiceQueryStoreWithoutGroupOne = 101,
    ServiceQueryFetchOne = 102,
    ServiceQueryUpdate = 103,
    ServiceQueryStoreWithGroupOne = 104,
    ServiceQueryFetchAll = 105,
    ServiceQueryStoreWithoutGroupAll = 106,
    ServiceQueryStoreWithGroupAll = 107,
    ServerListOneGroup = 90,
    ServerListAllGroups = 91,
    ServerListStorage = 92,
    ServerDeleteStorage = 93,
    StorageReportIpChanged = 94,
    StorageReportStatus = 95,
    StorageReportDiskUsage = 96,
    StorageSyncTimestamp = 97,
    StorageSyncReport = 98,
}

impl From<TrackerCommand> for u8 {
    fn from(cmd: TrackerCommand) -> u8 {
        cmd as u8
    }
}

/// Storage protocol commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StorageCommand {
    UploadFile = 11,
    DeleteFile = 12,
    SetMetadata = 13,
    DownloadFile = 14,
    GetMetadata = 15,
    UploadSlaveFile = 21,
    QueryFileInfo = 22,
    UploadAppenderFile = 23,
    AppendFile = 24,
    ModifyFile = 34,
    TruncateFile = 36,
}

impl From<StorageCommand> for u8 {
    fn from(cmd: StorageCommand) -> u8 {
        cmd as u8
    }
}

/// Storage server status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StorageStatus {
    Init = 0,
    WaitSync = 1,
    Syncing = 2,
    IpChanged = 3,
    Deleted = 4,
    Offline = 5,
    Online = 6,
    Active = 7,
    Recovery = 9,
    None = 99,
}

/// Metadata operation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MetadataFlag {
    /// Replace all existing metadata with new values
    Overwrite = b'O',
    /// Merge new metadata with existing metadata
    Merge = b'M',
}

impl From<MetadataFlag> for u8 {
    fn from(flag: MetadataFlag) -> u8 {
        flag as u8
    }
}

/// The kind of file a `FileInfo` or upload describes.
///
/// Decoded from the flag byte FastDFS storage servers pack into a file-info response;
/// carried separately from the upload-time parameters (a slave upload needs a master
/// `FileId` and a prefix, neither of which the server echoes back here).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Normal,
    Appender,
    Slave,
}

/// A tracker or storage server address.
///
/// Thin value type over "host:port" so parsing and range-validation happen once, at
/// construction, instead of being re-parsed at every pool/routing call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
        let host = host.into();
        if host.is_empty() {
            return Err(FastDFSError::InvalidArgument(
                "endpoint host must not be empty".to_string(),
            ));
        }
        if port == 0 {
            return Err(FastDFSError::InvalidArgument(
                "endpoint port must be in 1..=65535".to_string(),
            ));
        }
        Ok(Self { host, port })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for Endpoint {
    type Err = FastDFSError;

    fn from_str(s: &str) -> Result<Self> {
        let (host, port) = s.rsplit_once(':').ok_or_else(|| {
            FastDFSError::InvalidArgument(format!("endpoint '{}' is missing a port", s))
        })?;
        let port: u16 = port.parse().map_err(|_| {
            FastDFSError::InvalidArgument(format!("endpoint '{}' has an invalid port", s))
        })?;
        Endpoint::new(host, port)
    }
}

/// A durable handle to a stored file: `group_name` + `remote_path`.
///
/// `FileId::to_string()` is the public-facing file id string (`"group/M00/.../file"`);
/// `FileId::parse` is its inverse. Group names are 1..=16 printable bytes; the remote
/// path is non-empty and opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId {
    pub group_name: String,
    pub remote_path: String,
}

impl FileId {
    pub fn new(group_name: impl Into<String>, remote_path: impl Into<String>) -> Result<Self> {
        let group_name = group_name.into();
        let remote_path = remote_path.into();

        if group_name.is_empty() || group_name.len() > FDFS_GROUP_NAME_MAX_LEN {
            return Err(FastDFSError::InvalidFileId(format!(
                "{}/{}",
                group_name, remote_path
            )));
        }
        if !group_name.is_ascii() || group_name.chars().any(|c| c.is_ascii_control()) {
            return Err(FastDFSError::InvalidFileId(format!(
                "{}/{}",
                group_name, remote_path
            )));
        }
        if remote_path.is_empty() {
            return Err(FastDFSError::InvalidFileId(format!(
                "{}/{}",
                group_name, remote_path
            )));
        }

        Ok(Self {
            group_name,
            remote_path,
        })
    }

    /// Parses a `"group/remote_path"` file id, splitting on the first `/`.
    pub fn parse(file_id: &str) -> Result<Self> {
        if file_id.is_empty() {
            return Err(FastDFSError::InvalidFileId(file_id.to_string()));
        }
        let (group, remote) = file_id
            .split_once('/')
            .ok_or_else(|| FastDFSError::InvalidFileId(file_id.to_string()))?;
        FileId::new(group, remote)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group_name, self.remote_path)
    }
}

/// Information about a file stored in FastDFS
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Size of the file in bytes
    pub file_size: u64,
    /// Timestamp when the file was created
    pub create_time: SystemTime,
    /// CRC32 checksum of the file
    pub crc32: u32,
    /// IP address of the source storage server
    pub source_ip_addr: String,
    /// Kind of file (normal / appender / slave)
    pub file_kind: FileKind,
}

/// A storage server endpoint plus a chosen store-path, as returned by a tracker
/// query for an upload.
#[derive(Debug, Clone)]
pub struct StorageLocation {
    pub group_name: String,
    pub endpoint: Endpoint,
    pub store_path_index: u8,
}

/// Response from an upload operation
#[derive(Debug, Clone)]
pub struct UploadResponse {
    /// Storage group where the file was stored
    pub group_name: String,
    /// Path and filename on the storage server
    pub remote_filename: String,
}

/// Client configuration options
///
/// Derives `serde::Deserialize` so callers can load it from a TOML/JSON file or from
/// environment-derived key/value maps; the crate itself never reads a file or the
/// environment directly (§6) — only a validated `ClientConfig` crosses into `Client::new`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// List of tracker server addresses in format "host:port"
    pub tracker_addrs: Vec<String>,
    /// Maximum number of connections per endpoint (tracker or storage)
    #[serde(default = "default_max_conns")]
    pub max_conns: usize,
    /// Timeout for establishing connections in milliseconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Timeout for network I/O operations in milliseconds
    #[serde(default = "default_network_timeout")]
    pub network_timeout: u64,
    /// Timeout for idle connections in the pool in milliseconds
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: u64,
    /// Number of retries for failed operations
    #[serde(default = "default_retry_count")]
    pub retry_count: usize,
    /// Whether connection pooling is enabled; when `false` every operation opens and
    /// closes a fresh connection instead of reusing one from the pool.
    #[serde(default = "default_pool_enabled")]
    pub pool_enabled: bool,
}

fn default_max_conns() -> usize {
    10
}
fn default_connect_timeout() -> u64 {
    5_000
}
fn default_network_timeout() -> u64 {
    30_000
}
fn default_idle_timeout() -> u64 {
    60_000
}
fn default_retry_count() -> usize {
    3
}
fn default_pool_enabled() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tracker_addrs: Vec::new(),
            max_conns: default_max_conns(),
            connect_timeout: default_connect_timeout(),
            network_timeout: default_network_timeout(),
            idle_timeout: default_idle_timeout(),
            retry_count: default_retry_count(),
            pool_enabled: default_pool_enabled(),
        }
    }
}

impl ClientConfig {
    /// Creates a new client configuration with tracker addresses
    pub fn new(tracker_addrs: Vec<String>) -> Self {
        Self {
            tracker_addrs,
            ..Default::default()
        }
    }

    /// Sets the maximum number of connections per endpoint
    pub fn with_max_conns(mut self, max_conns: usize) -> Self {
        self.max_conns = max_conns;
        self
    }

    /// Sets the connection timeout in milliseconds
    pub fn with_connect_timeout(mut self, timeout: u64) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the network timeout in milliseconds
    pub fn with_network_timeout(mut self, timeout: u64) -> Self {
        self.network_timeout = timeout;
        self
    }

    /// Sets the idle timeout in milliseconds
    pub fn with_idle_timeout(mut self, timeout: u64) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Sets the retry count
    pub fn with_retry_count(mut self, count: usize) -> Self {
        self.retry_count = count;
        self
    }

    /// Disables connection pooling (every operation uses a fresh connection)
    pub fn with_pool_enabled(mut self, enabled: bool) -> Self {
        self.pool_enabled = enabled;
        self
    }

    pub(crate) fn connect_timeout_duration(&self) -> Duration {
        Duration::from_millis(self.connect_timeout)
    }

    pub(crate) fn idle_timeout_duration(&self) -> Duration {
        Duration::from_millis(self.idle_timeout)
    }

    /// Validates the configuration against the rules in the design's client-lifecycle
    /// section: at least one tracker endpoint, bounded pool size and retry count, and
    /// strictly positive timeouts.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.tracker_addrs.is_empty() {
            return Err(FastDFSError::ConfigError(
                "at least one tracker address is required".to_string(),
            ));
        }
        for addr in &self.tracker_addrs {
            Endpoint::from_str(addr).map_err(|_| {
                FastDFSError::ConfigError(format!("invalid tracker address: {}", addr))
            })?;
        }
        if !(1..=1000).contains(&self.max_conns) {
            return Err(FastDFSError::ConfigError(
                "max_conns must be in 1..=1000".to_string(),
            ));
        }
        if self.connect_timeout == 0 {
            return Err(FastDFSError::ConfigError(
                "connect_timeout must be > 0".to_string(),
            ));
        }
        if self.network_timeout == 0 {
            return Err(FastDFSError::ConfigError(
                "network_timeout must be > 0".to_string(),
            ));
        }
        if self.idle_timeout == 0 {
            return Err(FastDFSError::ConfigError(
                "idle_timeout must be > 0".to_string(),
            ));
        }
        if self.retry_count > 10 {
            return Err(FastDFSError::ConfigError(
                "retry_count must be in 0..=10".to_string(),
            ));
        }
        Ok(())
    }
}

/// Metadata dictionary type
pub type Metadata = std::collections::HashMap<String, String>;

/// Validates a metadata map against the wire-format field limits (§4.1): names up to
/// 64 bytes, values up to 256 bytes. Returns `InvalidArgument` instead of silently
/// truncating, so callers find out before bytes go on the wire.
pub fn validate_metadata(metadata: &Metadata) -> Result<()> {
    for (key, value) in metadata {
        if key.is_empty() || key.len() > FDFS_MAX_META_NAME_LEN {
            return Err(FastDFSError::InvalidArgument(format!(
                "metadata name '{}' exceeds {} bytes",
                key, FDFS_MAX_META_NAME_LEN
            )));
        }
        if value.len() > FDFS_MAX_META_VALUE_LEN {
            return Err(FastDFSError::InvalidArgument(format!(
                "metadata value for '{}' exceeds {} bytes",
                key, FDFS_MAX_META_VALUE_LEN
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_parses_host_port() {
        let ep: Endpoint = "192.168.1.100:22122".parse().unwrap();
        assert_eq!(ep.host, "192.168.1.100");
        assert_eq!(ep.port, 22122);
        assert_eq!(ep.to_string(), "192.168.1.100:22122");
    }

    #[test]
    fn endpoint_rejects_missing_port() {
        assert!("192.168.1.100".parse::<Endpoint>().is_err());
    }

    #[test]
    fn endpoint_rejects_zero_port() {
        assert!(Endpoint::new("host", 0).is_err());
    }

    #[test]
    fn file_id_round_trips() {
        let id = FileId::new("group1", "M00/00/00/test.jpg").unwrap();
        let text = id.to_string();
        let parsed = FileId::parse(&text).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn file_id_rejects_oversized_group() {
        let long_group = "a".repeat(FDFS_GROUP_NAME_MAX_LEN + 1);
        assert!(FileId::new(long_group, "path").is_err());
    }

    #[test]
    fn file_id_rejects_empty_remote_path() {
        assert!(FileId::new("group1", "").is_err());
    }

    #[test]
    fn config_validation_requires_tracker() {
        let config = ClientConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_validation_rejects_bad_retry_count() {
        let config = ClientConfig::new(vec!["127.0.0.1:22122".to_string()]).with_retry_count(11);
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_validation_accepts_defaults_with_tracker() {
        let config = ClientConfig::new(vec!["127.0.0.1:22122".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn metadata_validation_rejects_oversized_name() {
        let mut m = Metadata::new();
        m.insert("a".repeat(FDFS_MAX_META_NAME_LEN + 1), "v".to_string());
        assert!(validate_metadata(&m).is_err());
    }

    #[test]
    fn metadata_validation_accepts_limits() {
        let mut m = Metadata::new();
        m.insert(
            "a".repeat(FDFS_MAX_META_NAME_LEN),
            "v".repeat(FDFS_MAX_META_VALUE_LEN),
        );
        assert!(validate_metadata(&m).is_ok());
    }
}
