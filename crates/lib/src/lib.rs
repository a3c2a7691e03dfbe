//! svcbind: read service bindings projected into the application filesystem.
//!
//! A platform projects each binding as a directory under a shared root, one file per entry:
//! - [`BindingResolver`] lists and reads those directories
//! - [`ServiceBinding`] is the lookup interface (all bindings, by type, by type and provider)
//! - [`Binding`] is one directory read into memory
//!
//! ```no_run
//! use svcbind::{BindingResolver, ServiceBinding};
//!
//! let resolver = BindingResolver::from_env()?;
//! for binding in resolver.bindings("postgresql")? {
//!   println!("{}: {:?}", binding.name(), binding.get("host"));
//! }
//! # Ok::<(), svcbind::BindingError>(())
//! ```

pub mod api;
pub mod binding;
pub mod consts;
pub mod env;
pub mod error;
pub mod resolver;

pub use api::ServiceBinding;
pub use binding::Binding;
pub use error::{BindingError, Result};
pub use resolver::BindingResolver;
