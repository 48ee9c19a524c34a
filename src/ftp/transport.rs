//! One-shot transport exchange abstraction.
//!
//! The backend does not speak FTP on the wire itself. It hands a fully
//! specified [`TransportRequest`] to a [`Connector`], which performs
//! connection, login and data-channel negotiation and returns an
//! [`Exchange`] bound to that one request. An exchange is consumed by
//! exactly one of `fetch`, `store` or `run` — the transport binds each
//! session to a single remote path, so exchanges are never pooled or
//! reused across operations.
//!
//! Connection and stream teardown rides on ownership: dropping a
//! response or payload on any exit path releases the transport handle.

use crate::ftp::error::FtpResult;
use crate::ftp::types::TransportRequest;
use std::io::{Read, Write};

/// Builds one single-use exchange per backend operation.
pub trait Connector {
    type Exchange: Exchange;

    fn open(&self, request: TransportRequest) -> FtpResult<Self::Exchange>;
}

/// A single transport exchange, consumed exactly once.
pub trait Exchange: Sized {
    /// Response body stream of a fetch-style exchange (LIST, RETR).
    type Response: Read;
    /// Request body sink of a store-style exchange (STOR).
    type Payload: PayloadSink;

    /// Execute the request and return its response body.
    fn fetch(self) -> FtpResult<Self::Response>;

    /// Execute the request and return the writable request body.
    fn store(self) -> FtpResult<Self::Payload>;

    /// Execute a bodiless request (DELE, MKD), draining the reply.
    fn run(self) -> FtpResult<()>;
}

/// Writable request body of an upload exchange.
///
/// `commit` flushes buffered bytes and reads the transfer-completion
/// reply, so a rejected transfer surfaces as an error instead of being
/// lost in `Drop`.
pub trait PayloadSink: Write + Sized {
    fn commit(self) -> FtpResult<()>;
}
