//! Navigation resolution and route guarding
//!
//! The resolver turns (role, module configuration) into the ordered list of
//! visible navigation entries, and answers whether a candidate route is
//! permitted. Both operations are pure functions over their inputs: no
//! caching, no shared mutable state, safe to call from any number of
//! concurrent request handlers.

use wildmatch::WildMatch;

use crate::config::ModuleConfig;
use crate::dashboard::dashboard_for;
use crate::role::{classify, RoleCategory};
use crate::route::Route;

use super::registry::ModuleRegistry;
use super::types::NavEntry;

/// Routes open to everyone, signed in or not
const PUBLIC_ROUTE_PATTERNS: [&str; 3] = ["/", "/auth", "/auth/*"];

/// Resolves visible navigation and guards route access
///
/// # Examples
///
/// ```
/// use hubnav::{ModuleConfig, NavResolver};
///
/// let resolver = NavResolver::new();
/// let config = ModuleConfig::default();
///
/// // Platform operators never see tenant navigation.
/// let nav = resolver.resolve_nav(Some("SuperAdmin"), &config);
/// assert_eq!(nav.len(), 1);
/// assert_eq!(nav[0].href, "/super-admin/dashboard");
///
/// // Teachers reach their own pages through the role area.
/// assert!(resolver.is_route_allowed(Some("Teacher"), "/teacher/assignments/create", &config));
/// ```
#[derive(Debug, Clone)]
pub struct NavResolver {
    registry: ModuleRegistry,
    public_routes: Vec<WildMatch>,
}

impl NavResolver {
    /// Creates a resolver over the default module registry
    pub fn new() -> Self {
        Self::with_registry(ModuleRegistry::new())
    }

    /// Creates a resolver over a specific registry
    pub fn with_registry(registry: ModuleRegistry) -> Self {
        let public_routes = PUBLIC_ROUTE_PATTERNS
            .iter()
            .map(|pattern| WildMatch::new(pattern))
            .collect();
        Self {
            registry,
            public_routes,
        }
    }

    /// Returns the registry this resolver reads from
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Resolves the ordered navigation entries visible to a role
    ///
    /// Platform-management roles get exactly one entry, the dashboard of
    /// their exact role name, regardless of what the tenant configuration
    /// enables. Every other category gets the fixed Home entry, the enabled
    /// modules with a primary surface in registry order, and the fixed More
    /// entry. Unrecognized roles resolve like parent-facing ones.
    ///
    /// Deterministic: identical inputs yield list-equal outputs.
    pub fn resolve_nav(&self, role: Option<&str>, config: &ModuleConfig) -> Vec<NavEntry> {
        let category = classify(role);

        if category == RoleCategory::PlatformManagement {
            tracing::debug!(?role, "platform role resolves to dashboard-only nav");
            let href = dashboard_for(role);
            return vec![NavEntry::new(href, "Dashboard", "layout-dashboard")];
        }

        let mut entries = Vec::with_capacity(self.registry.len() + 2);
        entries.push(self.registry.home_entry());

        for key in self.registry.all_module_keys() {
            if !config.is_enabled(key) {
                continue;
            }
            if let Some(entry) = self.registry.lookup_nav_entry(key) {
                entries.push(entry.clone());
            }
        }

        entries.push(self.registry.more_entry());
        entries
    }

    /// Decides whether a role may visit a route
    ///
    /// A route is allowed when any of the following holds:
    /// - it matches a public pattern (`/`, the auth pages)
    /// - it is the `href` of an entry in [`Self::resolve_nav`] for the same
    ///   role and configuration
    /// - it is the role's own dashboard, or lives in the dashboard's role
    ///   area (same leading path segment) when that dashboard is not the
    ///   root route
    ///
    /// Everything else is denied. Total: malformed candidate routes deny
    /// instead of erroring, so the guard can be fed raw request paths.
    pub fn is_route_allowed(&self, role: Option<&str>, route: &str, config: &ModuleConfig) -> bool {
        if self.is_public_route(route) {
            return true;
        }

        let candidate = match Route::new(route) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(%route, %err, "denying malformed route");
                return false;
            }
        };

        if self
            .resolve_nav(role, config)
            .iter()
            .any(|entry| entry.href == candidate.as_str())
        {
            return true;
        }

        let dashboard = dashboard_for(role);
        if dashboard == candidate.as_str() {
            return true;
        }

        // Dashboard adjacency: the dashboard's leading segment names the
        // role's area, and every route in that area is reachable. The root
        // dashboard has no area and admits nothing beyond itself.
        if let Ok(dash) = Route::new(dashboard) {
            if !dash.is_root() && dash.first_segment() == candidate.first_segment() {
                return true;
            }
        }

        tracing::debug!(?role, %route, "route denied");
        false
    }

    fn is_public_route(&self, route: &str) -> bool {
        self.public_routes.iter().any(|pattern| pattern.matches(route))
    }
}

impl Default for NavResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::types::ModuleKey;

    #[test]
    fn test_parent_nav_default_config() {
        let resolver = NavResolver::new();
        let nav = resolver.resolve_nav(Some("Parent"), &ModuleConfig::default());

        let labels: Vec<&str> = nav.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Messages", "My Learning", "Portfolio", "More"]);
    }

    #[test]
    fn test_disabled_module_absent() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default().with(ModuleKey::Messaging, false);

        let nav = resolver.resolve_nav(Some("Parent"), &config);
        let labels: Vec<&str> = nav.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Home", "My Learning", "Portfolio", "More"]);
    }

    #[test]
    fn test_platform_isolation_with_everything_enabled() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default();

        for role in crate::role::PLATFORM_ROLES {
            let nav = resolver.resolve_nav(Some(role.as_str()), &config);
            assert_eq!(nav.len(), 1, "{role}");
            assert_eq!(nav[0].label, "Dashboard");
            assert_eq!(nav[0].href, dashboard_for(Some(role.as_str())));
        }
    }

    #[test]
    fn test_unknown_role_gets_parent_facing_nav() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default();

        let unknown = resolver.resolve_nav(Some("Headmaster"), &config);
        let parent = resolver.resolve_nav(Some("Parent"), &config);
        assert_eq!(unknown, parent);
    }

    #[test]
    fn test_anonymous_gets_parent_facing_nav() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default();

        let anonymous = resolver.resolve_nav(None, &config);
        let parent = resolver.resolve_nav(Some("Parent"), &config);
        assert_eq!(anonymous, parent);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default().with(ModuleKey::Portfolio, false);

        let first = resolver.resolve_nav(Some("Teacher"), &config);
        let second = resolver.resolve_nav(Some("Teacher"), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_public_routes_allowed_for_everyone() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default();

        for role in [None, Some("Parent"), Some("SuperAdmin"), Some("Headmaster")] {
            assert!(resolver.is_route_allowed(role, "/", &config));
            assert!(resolver.is_route_allowed(role, "/auth", &config));
            assert!(resolver.is_route_allowed(role, "/auth/sign-in", &config));
        }
    }

    #[test]
    fn test_nav_membership_allows_route() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default();
        assert!(resolver.is_route_allowed(Some("Parent"), "/portfolio", &config));
    }

    #[test]
    fn test_disabled_module_route_denied() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default().with(ModuleKey::Messaging, false);
        assert!(!resolver.is_route_allowed(Some("Parent"), "/messaging", &config));
    }

    #[test]
    fn test_dashboard_adjacency() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default();

        assert!(resolver.is_route_allowed(Some("Teacher"), "/teacher/dashboard", &config));
        assert!(resolver.is_route_allowed(Some("Teacher"), "/teacher/assignments/create", &config));
        assert!(!resolver.is_route_allowed(Some("Parent"), "/teacher/assignments/create", &config));
    }

    #[test]
    fn test_root_dashboard_grants_no_area() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default().with(ModuleKey::EventBooking, false);

        // Parents dashboard is the home feed; that must not open arbitrary routes.
        assert!(!resolver.is_route_allowed(Some("Parent"), "/event-booking", &config));
        assert!(!resolver.is_route_allowed(None, "/school-admin/dashboard", &config));
    }

    #[test]
    fn test_platform_role_denied_tenant_module_routes() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default();

        assert!(!resolver.is_route_allowed(Some("SuperAdmin"), "/messaging", &config));
        assert!(resolver.is_route_allowed(Some("SuperAdmin"), "/super-admin/dashboard", &config));
    }

    #[test]
    fn test_malformed_route_denied() {
        let resolver = NavResolver::new();
        let config = ModuleConfig::default();

        assert!(!resolver.is_route_allowed(Some("Teacher"), "teacher/dashboard", &config));
        assert!(!resolver.is_route_allowed(Some("Teacher"), "/teacher//dashboard", &config));
        assert!(!resolver.is_route_allowed(Some("Teacher"), "/teacher/bad page", &config));
    }
}
