//! Module keys and navigation entries

use serde::{Deserialize, Serialize};

/// An optional feature area a tenant can enable or disable
///
/// The set is closed; new feature areas extend the enum. Declaration order
/// is significant: it is the order modules appear in navigation. Wire names
/// are camelCase, matching the persisted tenant configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleKey {
    Messaging,
    MyLearning,
    Portfolio,
    EventBooking,
    Resources,
    StatementOfAccount,
    EService,
    Settings,
    AdminManageStudents,
    TeacherSmartUpdate,
    PaymentGateway,
}

impl ModuleKey {
    /// All module keys, in navigation order
    pub const ALL: [ModuleKey; 11] = [
        ModuleKey::Messaging,
        ModuleKey::MyLearning,
        ModuleKey::Portfolio,
        ModuleKey::EventBooking,
        ModuleKey::Resources,
        ModuleKey::StatementOfAccount,
        ModuleKey::EService,
        ModuleKey::Settings,
        ModuleKey::AdminManageStudents,
        ModuleKey::TeacherSmartUpdate,
        ModuleKey::PaymentGateway,
    ];

    /// Returns the wire name of this key
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKey::Messaging => "messaging",
            ModuleKey::MyLearning => "myLearning",
            ModuleKey::Portfolio => "portfolio",
            ModuleKey::EventBooking => "eventBooking",
            ModuleKey::Resources => "resources",
            ModuleKey::StatementOfAccount => "statementOfAccount",
            ModuleKey::EService => "eService",
            ModuleKey::Settings => "settings",
            ModuleKey::AdminManageStudents => "adminManageStudents",
            ModuleKey::TeacherSmartUpdate => "teacherSmartUpdate",
            ModuleKey::PaymentGateway => "paymentGateway",
        }
    }
}

impl std::fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModuleKey {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "messaging" => Ok(ModuleKey::Messaging),
            "myLearning" => Ok(ModuleKey::MyLearning),
            "portfolio" => Ok(ModuleKey::Portfolio),
            "eventBooking" => Ok(ModuleKey::EventBooking),
            "resources" => Ok(ModuleKey::Resources),
            "statementOfAccount" => Ok(ModuleKey::StatementOfAccount),
            "eService" => Ok(ModuleKey::EService),
            "settings" => Ok(ModuleKey::Settings),
            "adminManageStudents" => Ok(ModuleKey::AdminManageStudents),
            "teacherSmartUpdate" => Ok(ModuleKey::TeacherSmartUpdate),
            "paymentGateway" => Ok(ModuleKey::PaymentGateway),
            _ => Err(()),
        }
    }
}

/// One renderable navigation link
///
/// Derived on every resolution, never persisted. The icon reference is a
/// symbolic name resolved by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub href: String,
    pub label: String,
    pub icon_ref: String,
}

impl NavEntry {
    pub fn new(
        href: impl Into<String>,
        label: impl Into<String>,
        icon_ref: impl Into<String>,
    ) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            icon_ref: icon_ref.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_key_string_roundtrip() {
        for key in ModuleKey::ALL {
            let parsed: ModuleKey = key.as_str().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn test_module_key_from_str_unknown() {
        assert!("futureModule".parse::<ModuleKey>().is_err());
        assert!("MESSAGING".parse::<ModuleKey>().is_err());
        assert!("".parse::<ModuleKey>().is_err());
    }

    #[test]
    fn test_module_key_serde_matches_as_str() {
        for key in ModuleKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_nav_entry_serde_wire_format() {
        let entry = NavEntry::new("/my-learning", "My Learning", "book-open");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["href"], "/my-learning");
        assert_eq!(json["label"], "My Learning");
        assert_eq!(json["iconRef"], "book-open");
    }
}
