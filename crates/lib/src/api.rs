//! Read interface over projected service bindings.

use crate::binding::Binding;
use crate::error::Result;

/// Access to the bindings a platform projects into the application.
///
/// Every call reflects the bindings present at the time of the call. An empty vector means
/// nothing matched; it is never an error.
pub trait ServiceBinding {
  /// All bindings, regardless of type or provider.
  fn all_bindings(&self) -> Result<Vec<Binding>>;

  /// Bindings whose `type` entry equals `binding_type` exactly.
  fn bindings(&self, binding_type: &str) -> Result<Vec<Binding>>;

  /// Bindings whose `type` entry equals `binding_type` and whose `provider` entry equals
  /// `provider`, both exactly.
  fn bindings_with_provider(&self, binding_type: &str, provider: &str) -> Result<Vec<Binding>>;
}
