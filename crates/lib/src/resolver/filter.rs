use std::path::Path;

use crate::consts::{PROVIDER_KEY, TYPE_KEY};

use super::fs::probe;

/// Type, and optionally provider, that a binding directory must carry to be returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct BindingFilter<'a> {
  binding_type: &'a str,
  provider: Option<&'a str>,
}

impl<'a> BindingFilter<'a> {
  pub(super) fn by_type(binding_type: &'a str) -> Self {
    Self {
      binding_type,
      provider: None,
    }
  }

  pub(super) fn with_provider(binding_type: &'a str, provider: &'a str) -> Self {
    Self {
      binding_type,
      provider: Some(provider),
    }
  }

  /// Probes `dir` for the requested entries. The provider is only probed once the type matched.
  pub(super) fn matches(&self, dir: &Path) -> bool {
    if !probe(dir, TYPE_KEY, self.binding_type) {
      return false;
    }
    match self.provider {
      Some(provider) => probe(dir, PROVIDER_KEY, provider),
      None => true,
    }
  }
}
