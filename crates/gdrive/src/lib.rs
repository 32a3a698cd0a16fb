//! # gdrive
//!
//! Blocking Google Drive v3 client with interactive OAuth login.
//!
//! This crate provides:
//! - The installed-app OAuth 2.0 consent flow with PKCE, receiving the
//!   redirect on a loopback listener
//! - Paginated `files.list` enumeration with a narrow field projection
//! - `files.delete` for single files
//!
//! ## Example
//!
//! ```no_run
//! use gdrive::{Authenticator, ClientSecrets, DriveClient};
//! use std::path::Path;
//!
//! let secrets = ClientSecrets::load(Path::new("./credentials.json"))?;
//! let token = Authenticator::new(secrets).login()?;
//!
//! let client = DriveClient::new(token);
//! let files = client.list_all(|n| eprint!("\rListing files... {n}"))?;
//! println!("\n{} files visible", files.len());
//! # Ok::<(), gdrive::Error>(())
//! ```

mod auth;
mod client;
mod credentials;
mod error;
mod types;

pub use auth::{Authenticator, CALLBACK_PORT, DRIVE_SCOPE, PkceVerifier};
pub use client::{DriveClient, filter_unshared};
pub use credentials::{ClientSecrets, InstalledApp};
pub use error::{Error, Result};
pub use types::{DriveFile, FileList, TokenResponse};
