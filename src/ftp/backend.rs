//! Operation facade — the public backend contract.
//!
//! Every operation opens one independent transport exchange from the
//! immutable connection parameters, runs it to completion and releases
//! it before returning. Calls block for the duration of the network
//! exchange, bounded by the fixed connection/inactivity timeouts; a
//! backend instance holds no mutable state and callers serialise
//! operations per instance.

use crate::ftp::error::{FtpError, FtpResult};
use crate::ftp::parser;
use crate::ftp::stream::StreamReadGuard;
use crate::ftp::transport::{Connector, Exchange, PayloadSink};
use crate::ftp::types::{ConnectionParameters, FileEntry, RequestMethod};
use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

/// Scheme identifying this backend.
pub const PROTOCOL_KEY: &str = "ftp";

/// FTP storage backend over a pluggable transport.
pub struct FtpBackend<C: Connector> {
    params: ConnectionParameters,
    connector: C,
}

impl<C: Connector> FtpBackend<C> {
    /// Build a backend from an `ftp://` endpoint and flat option map.
    pub fn new(
        endpoint: &str,
        options: &HashMap<String, String>,
        connector: C,
    ) -> FtpResult<Self> {
        Ok(Self {
            params: ConnectionParameters::from_options(endpoint, options)?,
            connector,
        })
    }

    /// The resolved, immutable connection parameters.
    pub fn params(&self) -> &ConnectionParameters {
        &self.params
    }

    // ─── LIST ────────────────────────────────────────────────────

    /// List the base folder. Lines matching no known listing dialect
    /// are skipped; a 550 reply surfaces as folder-missing.
    pub fn list(&self) -> FtpResult<Vec<FileEntry>> {
        let request = self.params.request("", RequestMethod::ListDirectoryDetails);
        let path = request.url.clone();
        log::debug!("FTP {} {}", request.method.verb(), path);

        let response = self
            .connector
            .open(request)
            .and_then(|exchange| exchange.fetch())
            .map_err(|e| reclassify_missing(&path, e))?;

        let mut entries = Vec::new();
        let reader = BufReader::new(StreamReadGuard::new(response));
        for line in reader.lines() {
            if let Some(entry) = parser::parse_line(&line?) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    // ─── STOR ────────────────────────────────────────────────────

    /// Upload the full source stream to `remote_name`. Returns the
    /// number of bytes written. A 550 reply surfaces as folder-missing.
    pub fn put(&self, remote_name: &str, source: &mut dyn Read) -> FtpResult<u64> {
        let request = self.params.request(remote_name, RequestMethod::UploadFile);
        let path = request.url.clone();
        log::debug!("FTP {} {}", request.method.verb(), path);

        let mut payload = self
            .connector
            .open(request)
            .and_then(|exchange| exchange.store())
            .map_err(|e| reclassify_missing(&path, e))?;
        let written = io::copy(source, &mut payload)?;
        payload.commit().map_err(|e| reclassify_missing(&path, e))?;
        Ok(written)
    }

    /// Upload a local file.
    pub fn put_file(&self, remote_name: &str, local_path: &Path) -> FtpResult<u64> {
        let mut file = fs::File::open(local_path)?;
        self.put(remote_name, &mut file)
    }

    // ─── RETR ────────────────────────────────────────────────────

    /// Download `remote_name` into the destination sink, reading the
    /// response through the completion guard. Returns the number of
    /// bytes copied.
    pub fn get(&self, remote_name: &str, destination: &mut dyn Write) -> FtpResult<u64> {
        let request = self.params.request(remote_name, RequestMethod::DownloadFile);
        log::debug!("FTP {} {}", request.method.verb(), request.url);

        let response = self.connector.open(request).and_then(|exchange| exchange.fetch())?;
        let mut guarded = StreamReadGuard::new(response);
        Ok(io::copy(&mut guarded, destination)?)
    }

    /// Download to a local file, creating or truncating it.
    pub fn get_file(&self, remote_name: &str, local_path: &Path) -> FtpResult<u64> {
        let mut file = fs::File::create(local_path)?;
        self.get(remote_name, &mut file)
    }

    // ─── DELE ────────────────────────────────────────────────────

    /// Delete a remote file.
    pub fn delete(&self, remote_name: &str) -> FtpResult<()> {
        let request = self.params.request(remote_name, RequestMethod::DeleteFile);
        log::debug!("FTP {} {}", request.method.verb(), request.url);
        self.connector.open(request).and_then(|exchange| exchange.run())
    }

    // ─── MKD ─────────────────────────────────────────────────────

    /// Create the backend's base folder.
    pub fn create_folder(&self) -> FtpResult<()> {
        let request = self.params.request("", RequestMethod::MakeDirectory);
        log::debug!("FTP {} {}", request.method.verb(), request.url);
        self.connector.open(request).and_then(|exchange| exchange.run())
    }

    // ─── Probe ───────────────────────────────────────────────────

    /// Connectivity and credential probe: a listing that succeeds
    /// without error.
    pub fn test(&self) -> FtpResult<()> {
        self.list().map(|_| ())
    }
}

/// Upgrade a "file unavailable" transport failure to folder-missing,
/// keeping the requested path; every other failure passes unchanged.
fn reclassify_missing(path: &str, err: FtpError) -> FtpError {
    if err.is_file_unavailable() {
        FtpError::folder_missing(path, err.message)
    } else {
        err
    }
}
