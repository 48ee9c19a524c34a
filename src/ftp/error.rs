//! FTP-specific error type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// FTP reply 550 — requested action not taken, file unavailable. The
/// one status the backend reinterprets (missing remote folder).
const FILE_UNAVAILABLE: u16 = 550;

/// Categorised FTP error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FtpError {
    pub kind: FtpErrorKind,
    pub message: String,
    /// FTP reply code that triggered the error, if any.
    pub code: Option<u16>,
    /// Remote path the failing operation addressed, if known.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FtpErrorKind {
    /// TCP / DNS resolution failure.
    ConnectionFailed,
    /// TLS negotiation failure.
    TlsFailed,
    /// Wrong username/password.
    AuthFailed,
    /// Server returned a 4xx/5xx for a command.
    CommandRejected,
    /// Transfer aborted, incomplete, or the data channel dropped.
    TransferFailed,
    /// Server sent an un-parseable response.
    ProtocolError,
    /// An I/O error on the local side (file read/write).
    IoError,
    /// Operation timed out.
    Timeout,
    /// The remote folder addressed by the operation does not exist.
    FolderMissing,
    /// Config / parameter validation error.
    InvalidConfig,
    /// Catch-all.
    Unknown,
}

pub type FtpResult<T> = Result<T, FtpError>;

// ── Construction helpers ─────────────────────────────────────────────

impl FtpError {
    pub fn new(kind: FtpErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            message: msg.into(),
            code: None,
            path: None,
        }
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    // ── Convenience constructors ─────────────────────────────────

    pub fn connection_failed(msg: impl Into<String>) -> Self {
        Self::new(FtpErrorKind::ConnectionFailed, msg)
    }

    pub fn tls_failed(msg: impl Into<String>) -> Self {
        Self::new(FtpErrorKind::TlsFailed, msg)
    }

    pub fn auth_failed(msg: impl Into<String>) -> Self {
        Self::new(FtpErrorKind::AuthFailed, msg)
    }

    pub fn command_rejected(code: u16, msg: impl Into<String>) -> Self {
        Self::new(FtpErrorKind::CommandRejected, msg).with_code(code)
    }

    pub fn transfer_failed(msg: impl Into<String>) -> Self {
        Self::new(FtpErrorKind::TransferFailed, msg)
    }

    pub fn protocol_error(msg: impl Into<String>) -> Self {
        Self::new(FtpErrorKind::ProtocolError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(FtpErrorKind::IoError, msg)
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::new(FtpErrorKind::Timeout, msg)
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(FtpErrorKind::InvalidConfig, msg)
    }

    /// A missing remote folder, carrying the path the operation
    /// addressed and the transport's own message.
    pub fn folder_missing(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::new(FtpErrorKind::FolderMissing, msg)
            .with_code(FILE_UNAVAILABLE)
            .with_path(path)
    }

    /// Whether this failure carries the "action not taken, file
    /// unavailable" reply the backend maps to [`FtpErrorKind::FolderMissing`].
    pub fn is_file_unavailable(&self) -> bool {
        self.code == Some(FILE_UNAVAILABLE)
    }

    /// Classify an FTP reply code into the most appropriate error kind.
    pub fn from_reply(code: u16, text: &str) -> Self {
        let kind = match code {
            421 => FtpErrorKind::ConnectionFailed,
            425 | 426 => FtpErrorKind::TransferFailed,
            430 | 530 => FtpErrorKind::AuthFailed,
            451 | 452 | 552 => FtpErrorKind::TransferFailed,
            500..=504 => FtpErrorKind::CommandRejected,
            _ if code >= 400 => FtpErrorKind::CommandRejected,
            _ => FtpErrorKind::Unknown,
        };
        Self {
            kind,
            message: text.to_string(),
            code: Some(code),
            path: None,
        }
    }
}

impl fmt::Display for FtpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.path.as_deref()) {
            (Some(code), Some(path)) => {
                write!(f, "[FTP {:?} {}] {}: {}", self.kind, code, path, self.message)
            }
            (Some(code), None) => write!(f, "[FTP {:?} {}] {}", self.kind, code, self.message),
            (None, Some(path)) => write!(f, "[FTP {:?}] {}: {}", self.kind, path, self.message),
            (None, None) => write!(f, "[FTP {:?}] {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for FtpError {}

impl From<std::io::Error> for FtpError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::TimedOut {
            Self::timeout(format!("I/O timeout: {}", e))
        } else {
            Self::io_error(e.to_string())
        }
    }
}
