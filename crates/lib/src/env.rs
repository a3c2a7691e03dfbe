//! Environment lookup for the binding root.

use std::path::PathBuf;

use crate::consts::SERVICE_BINDING_ROOT;
use crate::error::{BindingError, Result};

/// Returns the binding root named by `SERVICE_BINDING_ROOT`.
///
/// An unset or empty variable is a configuration error. The path itself is not checked;
/// a missing directory only surfaces once a resolver tries to list it.
pub fn binding_root() -> Result<PathBuf> {
  root_from_var(SERVICE_BINDING_ROOT)
}

fn root_from_var(var: &'static str) -> Result<PathBuf> {
  match std::env::var_os(var) {
    Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
    _ => Err(BindingError::MissingRoot(var)),
  }
}
