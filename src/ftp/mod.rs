//! # FTP storage backend
//!
//! A blocking backup-storage backend speaking FTP through a pluggable
//! transport session abstraction.
//!
//! Architecture:
//! - `types` — all data structures, enums, connection parameters
//! - `error` — FTP-specific error type and reply-code classification
//! - `parser` — multi-dialect LIST response parsing
//! - `stream` — read-completeness guard over response streams
//! - `config` — connection parameter resolution from URL + options
//! - `transport` — one-shot transport exchange abstraction
//! - `backend` — operation facade (list, put, get, delete, mkdir, probe)

pub mod backend;
pub mod config;
pub mod error;
pub mod parser;
pub mod stream;
pub mod transport;
pub mod types;

// Re-exports for lib.rs consumers
pub use backend::{FtpBackend, PROTOCOL_KEY};
pub use error::{FtpError, FtpErrorKind, FtpResult};
pub use stream::StreamReadGuard;
pub use transport::{Connector, Exchange, PayloadSink};
pub use types::*;
