use std::path::PathBuf;

/// Unexpected failure inside a checkpoint.
///
/// Missing prerequisite files are *not* errors -- checkpoints report those
/// as `failed` outcomes naming the file. This type covers the genuinely
/// unexpected cases (an existing file that cannot be read, an unreadable
/// directory), which the runner downgrades to a synthetic failed result.
#[derive(Debug, thiserror::Error)]
pub enum QaError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl QaError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
