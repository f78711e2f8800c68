use docgraph::GraphError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, DocgenError>;

/// Errors that can occur while generating documentation
#[derive(Error, Debug)]
pub enum DocgenError {
    /// Could not create the source or output directory
    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    /// Could not read a source file
    #[error("Failed to read file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// Could not write a markdown file
    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// Graph lookup failed while rendering
    #[error("Graph operation failed: {0}")]
    Graph(#[from] GraphError),

    /// Invalid generator configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DocgenError {
    /// Create a CreateDir error
    pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DocgenError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a Read error
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DocgenError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a Write error
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DocgenError::Write {
            path: path.into(),
            source,
        }
    }
}
