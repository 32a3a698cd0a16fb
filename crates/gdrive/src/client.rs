//! Blocking Drive v3 REST client.

use crate::error::Result;
use crate::types::{DriveFile, FileList};

/// Drive v3 API base URL.
const API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Page size for `files.list`; the API maximum.
const PAGE_SIZE: &str = "1000";

/// Field projection: exactly what duplicate detection needs.
const LIST_FIELDS: &str = "nextPageToken, files(id, name, parents, shared, modifiedTime)";

/// Bearer-authenticated Drive client.
///
/// One outstanding request at a time; pagination and deletion are both
/// strictly sequential.
///
/// # Example
///
/// ```no_run
/// use gdrive::DriveClient;
///
/// let client = DriveClient::new("ya29.token");
/// let files = client.list_all(|n| eprint!("\rListing files... {n}")).unwrap();
/// println!("{} files", files.len());
/// ```
pub struct DriveClient {
    /// HTTP agent for requests.
    agent: ureq::Agent,
    /// API base URL.
    api_base: String,
    /// Bearer token from the OAuth flow.
    token: String,
}

impl DriveClient {
    /// Create a client against the real API.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(API_BASE, token)
    }

    /// Create a client with a custom API base (for testing).
    #[must_use]
    pub fn with_api_base(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        let agent = ureq::Agent::new_with_defaults();
        Self {
            agent,
            api_base: api_base.into(),
            token: token.into(),
        }
    }

    /// Get the current API base URL.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn files_url(&self) -> String {
        format!("{}/files", self.api_base)
    }

    fn file_url(&self, file_id: &str) -> String {
        format!("{}/files/{}", self.api_base, file_id)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Fetch one page of file metadata.
    ///
    /// Passes the continuation token from the previous page, if any;
    /// the response carries the next token until the listing is
    /// exhausted.
    pub fn list_page(&self, page_token: Option<&str>) -> Result<FileList> {
        let mut request = self
            .agent
            .get(&self.files_url())
            .header("Authorization", self.bearer())
            .query("pageSize", PAGE_SIZE)
            .query("fields", LIST_FIELDS);
        if let Some(token) = page_token {
            request = request.query("pageToken", token);
        }

        Ok(request.call()?.body_mut().read_json()?)
    }

    /// Fetch every page of file metadata.
    ///
    /// `on_progress` runs after each page with the running record count
    /// so callers can render an in-place progress line. Any API error
    /// mid-pagination is fatal; there is no partial-result recovery.
    pub fn list_all(&self, mut on_progress: impl FnMut(usize)) -> Result<Vec<DriveFile>> {
        let mut files: Vec<DriveFile> = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_page(page_token.as_deref())?;
            files.extend(page.files);
            on_progress(files.len());

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(files)
    }

    /// Permanently delete a file by id.
    pub fn delete(&self, file_id: &str) -> Result<()> {
        self.agent
            .delete(&self.file_url(file_id))
            .header("Authorization", self.bearer())
            .call()?;
        Ok(())
    }
}

/// Keep only records that are not shared with the account.
///
/// Builds a fresh vector; removing from the input while iterating it
/// skips the neighbours of removed elements.
#[must_use]
pub fn filter_unshared(files: Vec<DriveFile>) -> Vec<DriveFile> {
    files.into_iter().filter(|f| !f.shared).collect()
}
