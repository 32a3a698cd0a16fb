//! Client-credential file loading.
//!
//! The credential file is the JSON downloaded from the Google Cloud
//! Console for an "installed app" OAuth client. It is externally
//! supplied and only ever read.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Contents of a client secrets file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecrets {
    pub installed: InstalledApp,
}

/// The `installed` section of the credential file.
#[derive(Debug, Clone, Deserialize)]
pub struct InstalledApp {
    pub client_id: String,
    pub client_secret: String,
    pub auth_uri: String,
    pub token_uri: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

impl ClientSecrets {
    /// Load and parse a client secrets file.
    ///
    /// A missing or malformed file is fatal: the run cannot proceed
    /// without credentials.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Credentials(format!("could not read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            Error::Credentials(format!("invalid client secrets in {}: {e}", path.display()))
        })
    }
}
