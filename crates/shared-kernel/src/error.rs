// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DirsizeError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DirsizeError>,
    },

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl DirsizeError {
    /// Walks through any `Context` layers to the application error underneath, if there is one.
    pub fn application(&self) -> Option<&ApplicationError> {
        match self {
            Self::Context { source, .. } => source.application(),
            Self::Application(err) => Some(err),
            Self::Infrastructure(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirsizeError>;

/// Application-layer errors. These are the only failures that abort a listing.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Invalid directory path: '{path}'")]
    InvalidPath { path: PathBuf },

    #[error("Failed to list directory '{path}': {source}")]
    ListingFailed {
        path: PathBuf,
        #[source]
        source: InfrastructureError,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl InfrastructureError {
    pub fn file_system(operation: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystemOperation { operation: operation.into(), path: path.into(), source }
    }
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for DirsizeError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DirsizeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DirsizeError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}
