//! Shared types for the FTP backend crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ─── Timeouts ────────────────────────────────────────────────────────

/// Overall per-operation timeout (half an hour).
pub const CONNECTION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Inactivity timeout for reads and writes within an operation.
pub const ACTIVITY_TIMEOUT: Duration = Duration::from_secs(5 * 60);

// ─── Directory Listing ───────────────────────────────────────────────

/// One entry from a remote directory listing, normalised across the
/// server-dependent LIST output dialects.
///
/// Exactly one of `size` / `is_folder` is meaningful: a folder never
/// carries a size, and a sized entry is never a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Entry name exactly as reported by the server.
    pub name: String,
    pub is_folder: bool,
    /// Size in bytes; `None` for folders.
    pub size: Option<u64>,
    /// Listing timestamp. LIST output carries a single timestamp, so
    /// modification and access are always set to the same value.
    pub last_modification: Option<DateTime<Utc>>,
    pub last_access: Option<DateTime<Utc>>,
}

impl FileEntry {
    /// A fresh entry with only the name filled in.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_folder: false,
            size: None,
            last_modification: None,
            last_access: None,
        }
    }
}

// ─── Connection Parameters ───────────────────────────────────────────

/// Username/password pair sent with every transport request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

/// Data-channel mode requested from the transport.
///
/// `Default` leaves the choice to the transport. When both force
/// options are configured the later-evaluated one wins, so
/// `ftp-regular` overrides `ftp-passive` (see `config`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferMode {
    Default,
    Passive,
    Active,
}

impl Default for TransferMode {
    fn default() -> Self {
        Self::Default
    }
}

/// Immutable per-backend connection parameters. Resolved once from the
/// endpoint URL and option map; every operation derives a fresh
/// [`TransportRequest`] from them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionParameters {
    /// Base address, always terminated with `/`. Userinfo is stripped;
    /// credentials travel separately.
    pub base_url: String,
    pub credentials: Option<Credentials>,
    pub transfer_mode: TransferMode,
    pub use_ssl: bool,
}

// ─── Transport Request ───────────────────────────────────────────────

/// The operation verb of a single transport exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestMethod {
    ListDirectoryDetails,
    DownloadFile,
    UploadFile,
    DeleteFile,
    MakeDirectory,
}

impl RequestMethod {
    /// The FTP command this verb maps onto, for logging.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::ListDirectoryDetails => "LIST",
            Self::DownloadFile => "RETR",
            Self::UploadFile => "STOR",
            Self::DeleteFile => "DELE",
            Self::MakeDirectory => "MKD",
        }
    }
}

/// A fully-specified single exchange handed to the transport. Built
/// fresh per operation — the transport binds one exchange to one
/// remote path, so nothing here is reused.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Full remote URL (base address plus entry name).
    pub url: String,
    pub method: RequestMethod,
    pub credentials: Option<Credentials>,
    pub transfer_mode: TransferMode,
    pub use_ssl: bool,
    /// Binary (image) type for transfers, ASCII for listings.
    pub binary: bool,
    pub timeout: Duration,
    pub activity_timeout: Duration,
}
