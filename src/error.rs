use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of tree listing and comparison dispatch.
///
/// The comparison recovers nothing locally: the first failure aborts the
/// current operation and surfaces to the immediate caller.
#[derive(Debug, Error)]
pub enum CompareError {
    /// A comparison root is unusable (missing, not a directory, or not
    /// readable). Raised before any traversal work starts.
    #[error("invalid comparison root {path:?}: {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    /// A directory read failed mid-traversal.
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A caller-supplied handler failed; passed through uninterpreted.
    #[error(transparent)]
    Callback(#[from] anyhow::Error),
}
