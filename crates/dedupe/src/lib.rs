//! # dedupe
//!
//! Duplicate detection and deletion selection for remote file listings.
//!
//! This crate provides the pure logic of the sweep:
//! - Convert raw API records into validated [`FileEntry`] values,
//!   skipping malformed ones
//! - Group files that share a name and a parent-folder set
//! - Pick every copy that is not the most recently modified
//!
//! ## Example
//!
//! ```
//! use dedupe::{find_duplicates, select_deletions, FileEntry};
//!
//! let files = vec![
//!     FileEntry::from_parts(
//!         "id-old".into(),
//!         "report.txt".into(),
//!         Some(vec!["folder".into()]),
//!         Some("2023-01-01T00:00:00.000Z".into()),
//!     )?,
//!     FileEntry::from_parts(
//!         "id-new".into(),
//!         "report.txt".into(),
//!         Some(vec!["folder".into()]),
//!         Some("2023-01-02T00:00:00.000Z".into()),
//!     )?,
//! ];
//!
//! let groups = find_duplicates(&files);
//! let deletions = select_deletions(&groups);
//! assert_eq!(deletions.len(), 1);
//! assert_eq!(deletions[0].id, "id-old");
//! # Ok::<(), dedupe::RecordError>(())
//! ```

mod error;
mod groups;
mod select;
mod types;

pub use error::{RecordError, Result};
pub use groups::find_duplicates;
pub use select::select_deletions;
pub use types::{DuplicateGroup, FileEntry};
