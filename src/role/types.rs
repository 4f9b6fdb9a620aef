//! Role name and category enums
//!
//! `RoleName` is the closed set of roles the identity provider can issue,
//! spelled on the wire exactly as the provider spells them
//! (`AppManager_Management` and friends). `RoleCategory` is the coarse
//! partition used to isolate platform-operator UI from tenant UI.

use serde::{Deserialize, Serialize};

/// A role issued by the identity provider
///
/// Every `RoleName` maps to exactly one [`RoleCategory`]; the mapping is an
/// exhaustive `match` in the classifier, so adding a variant here fails to
/// compile until the category table is extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    SuperAdmin,
    #[serde(rename = "AppManager_Management")]
    AppManagerManagement,
    #[serde(rename = "AppManager_Sales")]
    AppManagerSales,
    #[serde(rename = "AppManager_Finance")]
    AppManagerFinance,
    #[serde(rename = "AppManager_Support")]
    AppManagerSupport,
    SchoolAdmin,
    SchoolDataEditor,
    SchoolFinanceManager,
    ClassTeacher,
    Teacher,
    Parent,
    Subscriber,
}

impl RoleName {
    /// All role names, in declaration order
    pub const ALL: [RoleName; 12] = [
        RoleName::SuperAdmin,
        RoleName::AppManagerManagement,
        RoleName::AppManagerSales,
        RoleName::AppManagerFinance,
        RoleName::AppManagerSupport,
        RoleName::SchoolAdmin,
        RoleName::SchoolDataEditor,
        RoleName::SchoolFinanceManager,
        RoleName::ClassTeacher,
        RoleName::Teacher,
        RoleName::Parent,
        RoleName::Subscriber,
    ];

    /// Returns the wire spelling of this role
    pub fn as_str(self) -> &'static str {
        match self {
            RoleName::SuperAdmin => "SuperAdmin",
            RoleName::AppManagerManagement => "AppManager_Management",
            RoleName::AppManagerSales => "AppManager_Sales",
            RoleName::AppManagerFinance => "AppManager_Finance",
            RoleName::AppManagerSupport => "AppManager_Support",
            RoleName::SchoolAdmin => "SchoolAdmin",
            RoleName::SchoolDataEditor => "SchoolDataEditor",
            RoleName::SchoolFinanceManager => "SchoolFinanceManager",
            RoleName::ClassTeacher => "ClassTeacher",
            RoleName::Teacher => "Teacher",
            RoleName::Parent => "Parent",
            RoleName::Subscriber => "Subscriber",
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleName {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SuperAdmin" => Ok(RoleName::SuperAdmin),
            "AppManager_Management" => Ok(RoleName::AppManagerManagement),
            "AppManager_Sales" => Ok(RoleName::AppManagerSales),
            "AppManager_Finance" => Ok(RoleName::AppManagerFinance),
            "AppManager_Support" => Ok(RoleName::AppManagerSupport),
            "SchoolAdmin" => Ok(RoleName::SchoolAdmin),
            "SchoolDataEditor" => Ok(RoleName::SchoolDataEditor),
            "SchoolFinanceManager" => Ok(RoleName::SchoolFinanceManager),
            "ClassTeacher" => Ok(RoleName::ClassTeacher),
            "Teacher" => Ok(RoleName::Teacher),
            "Parent" => Ok(RoleName::Parent),
            "Subscriber" => Ok(RoleName::Subscriber),
            _ => Err(()),
        }
    }
}

/// Coarse partition of the role space
///
/// `PlatformManagement` and `ParentFacing` are mutually exclusive: no role
/// name belongs to both. `Unknown` covers unrecognized non-empty role
/// strings and is resolved to the same navigation as `ParentFacing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleCategory {
    PlatformManagement,
    SchoolAdmin,
    Teacher,
    ParentFacing,
    Unknown,
}

impl RoleCategory {
    /// All categories, in declaration order
    pub const ALL: [RoleCategory; 5] = [
        RoleCategory::PlatformManagement,
        RoleCategory::SchoolAdmin,
        RoleCategory::Teacher,
        RoleCategory::ParentFacing,
        RoleCategory::Unknown,
    ];
}
