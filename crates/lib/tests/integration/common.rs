//! Shared helpers for building binding trees on disk.

use std::path::{Path, PathBuf};

use svcbind::Binding;
use tempfile::TempDir;

/// Isolated binding root.
///
/// Each test gets its own temporary directory to project bindings into.
pub struct BindingTree {
  pub temp: TempDir,
}

impl BindingTree {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// The two-database tree most tests start from: `sb1` is mysql, `sb2` is neo4j.
  pub fn mysql_and_neo4j() -> Self {
    let tree = Self::new();
    tree.write_file("junk", "junk text");
    tree.mkdir("sb1/sub1");
    tree.binding(
      "sb1",
      &[
        ("type", "mysql"),
        ("username", "john"),
        ("password", "L&ia6W@n7epi18a"),
        ("url", "mysql://192.168.94.102:3306/school"),
      ],
    );
    tree.binding(
      "sb2",
      &[
        ("type", "neo4j"),
        ("username", "jane"),
        ("password", "o4%bGt#D8v2i0ja"),
        ("url", "neo4j://192.168.94.103:7687/cr"),
      ],
    );
    tree
  }

  /// Two mysql bindings told apart only by provider.
  pub fn two_mysql_providers() -> Self {
    let tree = Self::new();
    tree.write_file("junk", "junk text");
    tree.mkdir("sb1/sub1");
    tree.binding(
      "sb1",
      &[
        ("type", "mysql"),
        ("provider", "oracle"),
        ("username", "john"),
        ("password", "L&ia6W@n7epi18a"),
        ("url", "mysql://192.168.94.102:3306/school"),
      ],
    );
    tree.binding(
      "sb2",
      &[
        ("type", "mysql"),
        ("provider", "mariadb"),
        ("username", "jane"),
        ("password", "o4%bGt#D8v2i0ja"),
        ("url", "mysql://192.168.94.103:7687/school"),
      ],
    );
    tree
  }

  pub fn root(&self) -> &Path {
    self.temp.path()
  }

  pub fn path(&self, relative_path: &str) -> PathBuf {
    self.temp.path().join(relative_path)
  }

  /// Write a file relative to the root, creating parent directories.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.path(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  pub fn mkdir(&self, relative_path: &str) {
    std::fs::create_dir_all(self.path(relative_path)).unwrap();
  }

  /// Project a binding directory named `name` with the given entries.
  pub fn binding(&self, name: &str, entries: &[(&str, &str)]) {
    self.mkdir(name);
    for (key, value) in entries {
      self.write_file(&format!("{}/{}", name, key), value);
    }
  }
}

/// Find the binding read from directory `name`.
pub fn by_name<'a>(bindings: &'a [Binding], name: &str) -> &'a Binding {
  bindings
    .iter()
    .find(|b| b.name() == name)
    .unwrap_or_else(|| panic!("binding {} not found", name))
}
