use std::io;
use std::path::PathBuf;

/// Fatal archive loading failures. Each variant names the failed precondition.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("archive file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read archive `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse archive `{origin}` as JSON")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("archive `{origin}` must be a JSON array of conversations")]
    NotAnArray { origin: String },
}
