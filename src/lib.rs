//! # Hub Navigation Engine (hubnav)
//!
//! Role-driven navigation and module-visibility resolution for a
//! multi-tenant school platform, with support for:
//! - Total classification of identity-provider role strings
//! - Per-tenant module enablement with forward-compatible configuration
//! - Ordered navigation resolution shared by header and bottom-nav surfaces
//! - Route guarding (nav membership, dashboard adjacency, public routes)
//! - Per-role dashboard routing
//!
//! The resolution core is pure and synchronous; identity and configuration
//! arrive through async provider seams that callers await before resolving.
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
//! assert_eq!(nav.first().map(|e| e.label.as_str()), Some("Home"));
//! assert!(!nav.iter().any(|e| e.href == "/messaging"));
//!
//! assert!(resolver.is_route_allowed(Some("Parent"), "/portfolio", &config));
//! assert!(!resolver.is_route_allowed(Some("Parent"), "/messaging", &config));
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod identity;
pub mod nav;
pub mod role;
pub mod route;

pub use config::{InMemoryConfigStore, ModuleConfig, ModuleConfigStore, TenantId};
pub use dashboard::{dashboard_for, dashboard_route};
pub use error::{HubnavError, Result};
pub use identity::{Identity, IdentityProvider, StaticIdentityProvider};
pub use nav::{ModuleKey, ModuleRegistry, NavEntry, NavResolver};
pub use role::{classify, RoleCategory, RoleName};
pub use route::{Route, RouteError};
