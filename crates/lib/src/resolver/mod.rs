//! Filesystem-backed binding resolution.
//!
//! # Layout
//!
//! ```text
//! {root}/
//! ├── <binding-name>/
//! │   ├── type        # optional, matched exactly by `bindings`
//! │   ├── provider    # optional, matched exactly by `bindings_with_provider`
//! │   └── <key>       # file content is the value
//! └── ...
//! ```
//!
//! Binding directories are visited in name order. Each call lists the root again; nothing is
//! cached between calls.

mod filter;
mod fs;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::api::ServiceBinding;
use crate::binding::Binding;
use crate::env::binding_root;
use crate::error::Result;

use filter::BindingFilter;
use fs::{binding_dirs, read_binding};

/// Reads bindings from a fixed root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingResolver {
  root: PathBuf,
}

impl BindingResolver {
  /// Create a resolver over `root`. The directory is not touched until the first lookup.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Create a resolver over the root named by `SERVICE_BINDING_ROOT`.
  ///
  /// Fails with [`BindingError::MissingRoot`](crate::BindingError::MissingRoot) when the
  /// variable is unset or empty.
  pub fn from_env() -> Result<Self> {
    let root = binding_root()?;
    debug!(root = %root.display(), "using binding root from environment");
    Ok(Self::new(root))
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  fn collect(&self, filter: Option<BindingFilter<'_>>) -> Result<Vec<Binding>> {
    let mut result = Vec::new();

    for dir in binding_dirs(&self.root)? {
      if let Some(filter) = &filter
        && !filter.matches(&dir)
      {
        continue;
      }
      result.push(read_binding(&dir)?);
    }

    debug!(root = %self.root.display(), filter = ?filter, count = result.len(), "resolved bindings");
    Ok(result)
  }
}

impl ServiceBinding for BindingResolver {
  fn all_bindings(&self) -> Result<Vec<Binding>> {
    self.collect(None)
  }

  fn bindings(&self, binding_type: &str) -> Result<Vec<Binding>> {
    self.collect(Some(BindingFilter::by_type(binding_type)))
  }

  fn bindings_with_provider(&self, binding_type: &str, provider: &str) -> Result<Vec<Binding>> {
    self.collect(Some(BindingFilter::with_provider(binding_type, provider)))
  }
}
