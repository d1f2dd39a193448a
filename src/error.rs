use std::path::PathBuf;

/// Error type for persisting the task list.
///
/// Loading never fails (see [`crate::db::Database::load`]), so only the save path has errors.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
