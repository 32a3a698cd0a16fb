//! Wire types for the Drive v3 API.

use serde::Deserialize;

/// File metadata as returned by `files.list`.
///
/// Only the fields the sweep projects; `parents` and `modifiedTime` can
/// be absent on some records and are validated downstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parents: Option<Vec<String>>,
    #[serde(default)]
    pub shared: bool,
    #[serde(default)]
    pub modified_time: Option<String>,
}

/// One page of a `files.list` response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<DriveFile>,
    pub next_page_token: Option<String>,
}

/// Token endpoint response for the authorization-code exchange.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_file() {
        let json = r#"{
            "id": "1abc",
            "name": "report.txt",
            "parents": ["0root"],
            "shared": true,
            "modifiedTime": "2023-01-01T00:00:00.000Z"
        }"#;

        let file: DriveFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.id, "1abc");
        assert_eq!(file.parents.as_deref(), Some(&["0root".to_string()][..]));
        assert!(file.shared);
        assert_eq!(
            file.modified_time.as_deref(),
            Some("2023-01-01T00:00:00.000Z")
        );
    }

    #[test]
    fn test_deserialize_file_sparse() {
        // Records can come back without parents, shared or modifiedTime
        let json = r#"{"id": "1abc", "name": "orphan"}"#;

        let file: DriveFile = serde_json::from_str(json).unwrap();
        assert!(file.parents.is_none());
        assert!(!file.shared);
        assert!(file.modified_time.is_none());
    }

    #[test]
    fn test_deserialize_list_with_token() {
        let json = r#"{
            "nextPageToken": "opaque-cursor",
            "files": [{"id": "1", "name": "a"}, {"id": "2", "name": "b"}]
        }"#;

        let list: FileList = serde_json::from_str(json).unwrap();
        assert_eq!(list.files.len(), 2);
        assert_eq!(list.next_page_token.as_deref(), Some("opaque-cursor"));
    }

    #[test]
    fn test_deserialize_last_page() {
        let json = r#"{"files": []}"#;

        let list: FileList = serde_json::from_str(json).unwrap();
        assert!(list.files.is_empty());
        assert!(list.next_page_token.is_none());
    }

    #[test]
    fn test_deserialize_token_response() {
        let json = r#"{
            "access_token": "ya29.token",
            "expires_in": 3599,
            "token_type": "Bearer"
        }"#;

        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "ya29.token");
        assert_eq!(token.expires_in, Some(3599));
        assert_eq!(token.token_type.as_deref(), Some("Bearer"));
    }
}
