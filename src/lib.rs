//! # sorng-ftp-backend — FTP storage backend
//!
//! Backup-storage backend over FTP/FTPS transports providing:
//!   • Multi-dialect LIST interpretation (Unix and DOS/IIS layouts,
//!     named or numeric owners, short- and long-year timestamps)
//!   • Read-completeness guarding over unreliable response streams
//!   • Connection parameter resolution from URL + flat option map
//!   • Blocking operation facade: list, upload, download, delete,
//!     create-folder, connectivity probe
//!   • Domain error classification (folder-missing vs. transport failure)

pub mod ftp;
