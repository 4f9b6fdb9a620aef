//! Total classification of raw role strings
//!
//! The identity provider hands over the role as a plain string. Anything it
//! issues, plus anything a stale or buggy client might issue, has to land in
//! exactly one category without ever failing. Recognized names go through
//! the closed per-role table; unrecognized non-empty strings become
//! `Unknown`; an absent or empty role is an anonymous visitor and gets the
//! parent-facing default.

use super::types::{RoleCategory, RoleName};

/// Roles that operate the platform itself
pub const PLATFORM_ROLES: [RoleName; 5] = [
    RoleName::SuperAdmin,
    RoleName::AppManagerManagement,
    RoleName::AppManagerSales,
    RoleName::AppManagerFinance,
    RoleName::AppManagerSupport,
];

/// Roles that administer a single school tenant
pub const SCHOOL_ADMIN_ROLES: [RoleName; 3] = [
    RoleName::SchoolAdmin,
    RoleName::SchoolDataEditor,
    RoleName::SchoolFinanceManager,
];

/// Teaching-staff roles
pub const TEACHER_ROLES: [RoleName; 2] = [RoleName::ClassTeacher, RoleName::Teacher];

/// Parent-facing roles
pub const PARENT_ROLES: [RoleName; 2] = [RoleName::Parent, RoleName::Subscriber];

impl RoleName {
    /// Returns the category this role belongs to
    ///
    /// Exhaustive over the role enumeration: a new role name does not
    /// compile until it is placed in a category here.
    pub fn category(self) -> RoleCategory {
        match self {
            RoleName::SuperAdmin
            | RoleName::AppManagerManagement
            | RoleName::AppManagerSales
            | RoleName::AppManagerFinance
            | RoleName::AppManagerSupport => RoleCategory::PlatformManagement,

            RoleName::SchoolAdmin | RoleName::SchoolDataEditor | RoleName::SchoolFinanceManager => {
                RoleCategory::SchoolAdmin
            }

            RoleName::ClassTeacher | RoleName::Teacher => RoleCategory::Teacher,

            RoleName::Parent | RoleName::Subscriber => RoleCategory::ParentFacing,
        }
    }
}

/// Classifies a raw role string into a role category
///
/// Total over every possible input:
/// - a recognized role name yields its category
/// - an unrecognized non-empty string yields `Unknown`
/// - an absent or empty role yields `ParentFacing` (anonymous visitors see
///   the least-privileged navigation, not an empty one)
///
/// # Examples
///
/// ```
/// use hubnav::{classify, RoleCategory};
///
/// assert_eq!(classify(Some("SchoolFinanceManager")), RoleCategory::SchoolAdmin);
/// assert_eq!(classify(Some("AppManager_Sales")), RoleCategory::PlatformManagement);
/// assert_eq!(classify(Some("Headmaster")), RoleCategory::Unknown);
/// assert_eq!(classify(None), RoleCategory::ParentFacing);
/// ```
pub fn classify(role: Option<&str>) -> RoleCategory {
    let raw = match role {
        Some(r) if !r.is_empty() => r,
        _ => return RoleCategory::ParentFacing,
    };

    match raw.parse::<RoleName>() {
        Ok(name) => name.category(),
        Err(()) => RoleCategory::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_platform_roles() {
        for role in PLATFORM_ROLES {
            assert_eq!(classify(Some(role.as_str())), RoleCategory::PlatformManagement);
        }
    }

    #[test]
    fn test_classify_school_admin_roles() {
        for role in SCHOOL_ADMIN_ROLES {
            assert_eq!(classify(Some(role.as_str())), RoleCategory::SchoolAdmin);
        }
    }

    #[test]
    fn test_classify_teacher_roles() {
        for role in TEACHER_ROLES {
            assert_eq!(classify(Some(role.as_str())), RoleCategory::Teacher);
        }
    }

    #[test]
    fn test_classify_parent_roles() {
        for role in PARENT_ROLES {
            assert_eq!(classify(Some(role.as_str())), RoleCategory::ParentFacing);
        }
    }

    #[test]
    fn test_classify_absent_and_empty() {
        assert_eq!(classify(None), RoleCategory::ParentFacing);
        assert_eq!(classify(Some("")), RoleCategory::ParentFacing);
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify(Some("Headmaster")), RoleCategory::Unknown);
        assert_eq!(classify(Some("schooladmin")), RoleCategory::Unknown);
        assert_eq!(classify(Some("AppManager_")), RoleCategory::Unknown);
    }

    #[test]
    fn test_role_sets_cover_enumeration() {
        let covered = PLATFORM_ROLES.len()
            + SCHOOL_ADMIN_ROLES.len()
            + TEACHER_ROLES.len()
            + PARENT_ROLES.len();
        assert_eq!(covered, RoleName::ALL.len());
    }

    #[test]
    fn test_role_sets_agree_with_category_table() {
        for role in PLATFORM_ROLES {
            assert_eq!(role.category(), RoleCategory::PlatformManagement);
        }
        for role in SCHOOL_ADMIN_ROLES {
            assert_eq!(role.category(), RoleCategory::SchoolAdmin);
        }
        for role in TEACHER_ROLES {
            assert_eq!(role.category(), RoleCategory::Teacher);
        }
        for role in PARENT_ROLES {
            assert_eq!(role.category(), RoleCategory::ParentFacing);
        }
    }
}
