//! # Navigation Module
//!
//! Computes the navigation an identity is allowed to see and guards the
//! routes it is allowed to visit:
//! - [`ModuleKey`] enumerates the optional feature areas a tenant can
//!   enable or disable
//! - [`ModuleRegistry`] maps module keys to their primary navigation
//!   entries (insertion order is the nav order)
//! - [`NavResolver`] resolves the ordered entry list for a role and decides
//!   route admission
//!
//! Resolution is pure and synchronous: identity and module configuration
//! are fetched by the caller beforehand and passed in as values, so
//! concurrent resolutions never contend on shared state.
//!
//! ## Example
//!
//! ```rust
//! use hubnav::{ModuleConfig, ModuleKey, NavResolver};
//!
//! let resolver = NavResolver::new();
//! let config = ModuleConfig::default().with(ModuleKey::Messaging, false);
//!
//! let nav = resolver.resolve_nav(Some("Parent"), &config);
//! let labels: Vec<&str> = nav.iter().map(|e| e.label.as_str()).collect();
//! assert_eq!(labels, ["Home", "My Learning", "Portfolio", "More"]);
//! ```

mod registry;
mod resolver;
mod types;

pub use registry::ModuleRegistry;
pub use resolver::NavResolver;
pub use types::{ModuleKey, NavEntry};
