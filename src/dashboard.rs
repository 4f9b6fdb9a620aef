//! Per-role dashboard routing
//!
//! Each role lands on one canonical dashboard after sign-in. The mapping is
//! an explicit per-role table, not derived from categories: roles within
//! one category legitimately resolve to different dashboards, and two
//! platform roles deliberately collapse onto one route (Sales shares the
//! finance dashboard, Support shares the management dashboard).

use crate::role::RoleName;

/// Returns the dashboard route for a role
///
/// Exhaustive over the role enumeration.
pub fn dashboard_route(role: RoleName) -> &'static str {
    match role {
        RoleName::SuperAdmin => "/super-admin/dashboard",
        RoleName::AppManagerManagement | RoleName::AppManagerSupport => {
            "/app-manager/management/dashboard"
        }
        RoleName::AppManagerSales | RoleName::AppManagerFinance => {
            "/app-manager/finance/dashboard"
        }
        RoleName::SchoolAdmin => "/school-admin/dashboard",
        RoleName::SchoolDataEditor => "/school-data-editor/dashboard",
        RoleName::SchoolFinanceManager => "/school-finance-manager/dashboard",
        RoleName::ClassTeacher | RoleName::Teacher => "/teacher/dashboard",
        RoleName::Parent | RoleName::Subscriber => "/",
    }
}

/// Returns the dashboard route for a raw role string
///
/// Total: unrecognized or absent roles land on the home feed.
///
/// # Examples
///
/// ```
/// use hubnav::dashboard_for;
///
/// assert_eq!(dashboard_for(Some("SchoolFinanceManager")), "/school-finance-manager/dashboard");
/// assert_eq!(dashboard_for(Some("AppManager_Sales")), "/app-manager/finance/dashboard");
/// assert_eq!(dashboard_for(None), "/");
/// ```
pub fn dashboard_for(role: Option<&str>) -> &'static str {
    match role.and_then(|raw| raw.parse::<RoleName>().ok()) {
        Some(name) => dashboard_route(name),
        None => "/",
    }
}
