//! Module-level tests for role classification

use super::*;
use proptest::prelude::*;
use test_case::test_case;

#[test_case("SuperAdmin", RoleCategory::PlatformManagement ; "super admin")]
#[test_case("AppManager_Management", RoleCategory::PlatformManagement ; "app manager management")]
#[test_case("AppManager_Sales", RoleCategory::PlatformManagement ; "app manager sales")]
#[test_case("AppManager_Finance", RoleCategory::PlatformManagement ; "app manager finance")]
#[test_case("AppManager_Support", RoleCategory::PlatformManagement ; "app manager support")]
#[test_case("SchoolAdmin", RoleCategory::SchoolAdmin ; "school admin")]
#[test_case("SchoolDataEditor", RoleCategory::SchoolAdmin ; "school data editor")]
#[test_case("SchoolFinanceManager", RoleCategory::SchoolAdmin ; "school finance manager")]
#[test_case("ClassTeacher", RoleCategory::Teacher ; "class teacher")]
#[test_case("Teacher", RoleCategory::Teacher ; "teacher")]
#[test_case("Parent", RoleCategory::ParentFacing ; "parent")]
#[test_case("Subscriber", RoleCategory::ParentFacing ; "subscriber")]
#[test_case("Headmaster", RoleCategory::Unknown ; "unrecognized role")]
fn classifies_role(raw: &str, expected: RoleCategory) {
    assert_eq!(classify(Some(raw)), expected);
}

#[test]
fn every_role_maps_to_exactly_one_category() {
    for role in RoleName::ALL {
        let category = role.category();
        let memberships = [
            PLATFORM_ROLES.contains(&role),
            SCHOOL_ADMIN_ROLES.contains(&role),
            TEACHER_ROLES.contains(&role),
            PARENT_ROLES.contains(&role),
        ];
        assert_eq!(memberships.iter().filter(|&&m| m).count(), 1, "{role}");
        assert_ne!(category, RoleCategory::Unknown);
    }
}

#[test]
fn platform_and_parent_facing_are_disjoint() {
    for role in PLATFORM_ROLES {
        assert!(!PARENT_ROLES.contains(&role));
    }
    for role in PARENT_ROLES {
        assert!(!PLATFORM_ROLES.contains(&role));
    }
}

proptest! {
    #[test]
    fn classify_is_total_over_arbitrary_strings(raw in ".*") {
        let category = classify(Some(raw.as_str()));
        prop_assert!(RoleCategory::ALL.contains(&category));
    }

    #[test]
    fn classify_never_yields_unknown_for_known_roles(idx in 0usize..RoleName::ALL.len()) {
        let role = RoleName::ALL[idx];
        prop_assert_ne!(classify(Some(role.as_str())), RoleCategory::Unknown);
    }
}
