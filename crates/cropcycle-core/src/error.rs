//! Error types for the crop planner library.
//!
//! Mutations on plans never fail: missing ids and empty labels are no-ops by
//! policy. The errors below only surface from infrastructure work such as
//! opening the database or reading a templates file.

use std::path::PathBuf;

use thiserror::Error;

/// Failures from opening storage or loading templates.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// No template with the given name exists in the catalog
    #[error("Template '{name}' not found")]
    TemplateNotFound { name: String },
}

impl PlannerError {
    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Attaches a message to rusqlite failures.
pub trait DatabaseResultExt<T> {
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|source| PlannerError::Database {
            message: message.to_string(),
            source,
        })
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
