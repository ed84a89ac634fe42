//! # chatrecap-archive
//!
//! **Tier 1 (Archive Loading)**
//!
//! Reads an exported `conversations.json` (a JSON array of conversation
//! trees) and flattens every conversation into a bag of messages.
//!
//! Only two situations are fatal: the file cannot be read, or it is not a
//! JSON array. Anything odd inside a conversation (missing author, missing
//! content, a non-numeric timestamp, a node that is not an object) is
//! treated as absent data.

mod error;
mod record;
mod text;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chatrecap_types::Archive;
use serde_json::Value;

pub use error::ArchiveError;
pub use text::{extract_content_text, extract_text, stringify_value};

/// Load and flatten the archive at `path`.
pub fn load_archive(path: &Path) -> Result<Archive, ArchiveError> {
    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ArchiveError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ArchiveError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let archive = parse_archive(&raw, &path.display().to_string())?;
    tracing::debug!(
        conversations = archive.len(),
        path = %path.display(),
        "loaded archive"
    );
    Ok(archive)
}

/// Parse archive JSON already held in memory. `origin` names the source in errors.
pub fn parse_archive(raw: &str, origin: &str) -> Result<Archive, ArchiveError> {
    let value: Value = serde_json::from_str(raw).map_err(|source| ArchiveError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    let Value::Array(items) = value else {
        return Err(ArchiveError::NotAnArray {
            origin: origin.to_string(),
        });
    };

    let conversations = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| record::conversation_from_value(index, item))
        .collect();
    Ok(Archive::new(conversations))
}
