use anyhow::Result;
use std::path::PathBuf;

/// Resolve the OAuth client credentials path, expanding `~`.
///
/// The file is externally supplied (the OAuth client JSON downloaded
/// from the Google Cloud Console) and is only ever read.
pub fn credentials_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(raw);
    let path = PathBuf::from(expanded.as_ref());

    if !path.exists() {
        anyhow::bail!(
            "credentials file not found: {}\n\
             Download the OAuth client JSON from the Google Cloud Console \
             and save it there, or pass --credentials.",
            path.display()
        );
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_existing_path_resolves() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let raw = file.path().to_string_lossy().to_string();
        let resolved = credentials_path(&raw).unwrap();
        assert_eq!(resolved, file.path());
    }

    #[test]
    fn test_missing_path_errors() {
        let err = credentials_path("/nonexistent/credentials.json").unwrap_err();
        assert!(err.to_string().contains("credentials file not found"));
    }
}
