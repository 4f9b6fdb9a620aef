//! Identity value type and provider seam
//!
//! The engine performs no credential validation: identities arrive already
//! authenticated from an external provider and are treated as immutable
//! session-scoped values. The role travels as the raw provider string so
//! unrecognized values reach the classifier instead of failing at parse
//! time.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An authenticated (or anonymous) session identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub email: String,
    /// Raw role string as issued by the provider; `None` for visitors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: Option<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role,
        }
    }

    /// The role as a borrowed string, ready for classification
    pub fn role_str(&self) -> Option<&str> {
        self.role.as_deref()
    }
}

/// Source of the current session identity
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the current identity, or `None` when nobody is signed in
    async fn current_identity(&self) -> Result<Option<Identity>>;
}

/// Identity provider with a fixed answer
///
/// Useful in tests and in composition roots that resolve the identity once
/// per request before calling into the engine.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityProvider {
    identity: Option<Identity>,
}

impl StaticIdentityProvider {
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }

    /// Provider for a signed-out session
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    /// Provider for a fixed signed-in session
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_identity(&self) -> Result<Option<Identity>> {
        Ok(self.identity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_serde_wire_format() {
        let identity = Identity::new("u-17", "parent@example.com", Some("Parent".to_string()));
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["id"], "u-17");
        assert_eq!(json["email"], "parent@example.com");
        assert_eq!(json["role"], "Parent");
    }

    #[test]
    fn test_identity_role_omitted_when_absent() {
        let identity = Identity::new("u-18", "visitor@example.com", None);
        let json = serde_json::to_value(&identity).unwrap();
        assert!(json.get("role").is_none());
    }

    #[tokio::test]
    async fn test_static_provider_anonymous() {
        let provider = StaticIdentityProvider::anonymous();
        assert_eq!(provider.current_identity().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_static_provider_signed_in() {
        let identity = Identity::new("u-19", "t@example.com", Some("Teacher".to_string()));
        let provider = StaticIdentityProvider::signed_in(identity.clone());
        assert_eq!(provider.current_identity().await.unwrap(), Some(identity));
    }
}
