//! In-memory form of a single projected binding.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::consts::{PROVIDER_KEY, TYPE_KEY};

/// One binding directory read into memory.
///
/// Each direct file child of the directory becomes an entry: the file name is the key and
/// the file content, verbatim, is the value. `type` and `provider` are ordinary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
  /// Name of the directory the binding was read from.
  name: String,
  entries: BTreeMap<String, String>,
}

impl Binding {
  pub fn new(name: impl Into<String>, entries: BTreeMap<String, String>) -> Self {
    Self {
      name: name.into(),
      entries,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Value of the entry named `key`, if present.
  pub fn get(&self, key: &str) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }

  /// Value of the `type` entry.
  pub fn binding_type(&self) -> Option<&str> {
    self.get(TYPE_KEY)
  }

  /// Value of the `provider` entry.
  pub fn provider(&self) -> Option<&str> {
    self.get(PROVIDER_KEY)
  }

  pub fn entries(&self) -> &BTreeMap<String, String> {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
    self.entries.iter()
  }

  pub fn into_entries(self) -> BTreeMap<String, String> {
    self.entries
  }
}

impl<'a> IntoIterator for &'a Binding {
  type Item = (&'a String, &'a String);
  type IntoIter = btree_map::Iter<'a, String, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}
