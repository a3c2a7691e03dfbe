//! Filesystem helpers behind the resolver.
//!
//! `read_binding` is strict and propagates every failure, including entries whose metadata
//! cannot be read. `probe` is best-effort and reports any failure as "no match".
//! Classification follows symlinks, so projected entries that link into a data directory are
//! read like plain files; a link that cannot be resolved is an error, not a skip.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::binding::Binding;
use crate::error::{BindingError, Result};

/// Lists the binding directories directly under `root`, sorted by name.
pub(super) fn binding_dirs(root: &Path) -> Result<Vec<PathBuf>> {
  let read_root = |source| BindingError::ReadRoot {
    path: root.to_path_buf(),
    source,
  };

  let mut dirs = Vec::new();
  for entry in fs::read_dir(root).map_err(read_root)? {
    let path = entry.map_err(read_root)?.path();
    let metadata = fs::metadata(&path).map_err(|source| BindingError::ReadBinding {
      path: path.clone(),
      source,
    })?;
    if !metadata.is_dir() {
      trace!(path = %path.display(), "skipping non-directory entry");
      continue;
    }
    dirs.push(path);
  }

  dirs.sort();
  Ok(dirs)
}

/// Reads every regular file directly inside `dir` into a binding.
pub(super) fn read_binding(dir: &Path) -> Result<Binding> {
  let read_dir = |source| BindingError::ReadBinding {
    path: dir.to_path_buf(),
    source,
  };

  let mut entries = BTreeMap::new();
  for entry in fs::read_dir(dir).map_err(read_dir)? {
    let entry = entry.map_err(read_dir)?;
    let path = entry.path();
    let read_file = |source| BindingError::ReadFile {
      path: path.clone(),
      source,
    };

    let metadata = fs::metadata(&path).map_err(read_file)?;
    if !metadata.is_file() {
      trace!(path = %path.display(), "skipping non-file entry");
      continue;
    }

    let key = entry.file_name().into_string().map_err(|_| {
      read_file(io::Error::new(
        io::ErrorKind::InvalidData,
        "entry name is not valid UTF-8",
      ))
    })?;
    let value = fs::read_to_string(&path).map_err(read_file)?;
    entries.insert(key, value);
  }

  let name = dir
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_default();

  trace!(binding = %name, entries = entries.len(), "read binding");
  Ok(Binding::new(name, entries))
}

/// Whether `dir/key` exists and its content equals `expected` byte for byte.
pub(super) fn probe(dir: &Path, key: &str, expected: &str) -> bool {
  let path = dir.join(key);
  match fs::read(&path) {
    Ok(value) => value == expected.as_bytes(),
    Err(e) if e.kind() == io::ErrorKind::NotFound => false,
    Err(e) => {
      debug!(path = %path.display(), error = %e, "treating unreadable entry as no match");
      false
    }
  }
}
