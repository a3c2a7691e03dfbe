//! Error types for binding resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while constructing a resolver or reading bindings.
///
/// Probe failures during filtering never show up here: a binding whose `type` or
/// `provider` entry cannot be read is simply not a match.
#[derive(Debug, Error)]
pub enum BindingError {
  #[error("environment variable not set: {0}")]
  MissingRoot(&'static str),

  #[error("failed to list binding root {path}: {source}")]
  ReadRoot {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to list binding directory {path}: {source}")]
  ReadBinding {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to read binding entry {path}: {source}")]
  ReadFile {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl BindingError {
  /// Whether this error comes from the resolver configuration rather than the filesystem.
  pub fn is_configuration(&self) -> bool {
    matches!(self, BindingError::MissingRoot(_))
  }

  /// The path that failed, for filesystem errors.
  pub fn path(&self) -> Option<&PathBuf> {
    match self {
      BindingError::MissingRoot(_) => None,
      BindingError::ReadRoot { path, .. }
      | BindingError::ReadBinding { path, .. }
      | BindingError::ReadFile { path, .. } => Some(path),
    }
  }
}

pub type Result<T> = std::result::Result<T, BindingError>;
