//! Tenant module configuration
//!
//! Each tenant (one school) carries a map of module keys to booleans. Keys
//! absent from persisted configuration default to enabled, and keys written
//! by a newer schema version are skipped on read, so old engines keep
//! working against new data.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::nav::ModuleKey;

/// Identifier of one school tenant within the platform
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-tenant module enablement
///
/// Only explicit overrides are stored; every key not present is enabled.
/// The default value therefore means "all modules enabled".
///
/// # Examples
///
/// ```
/// use hubnav::{ModuleConfig, ModuleKey};
///
/// let config = ModuleConfig::default().with(ModuleKey::Messaging, false);
/// assert!(!config.is_enabled(ModuleKey::Messaging));
/// assert!(config.is_enabled(ModuleKey::Portfolio));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleConfig {
    #[serde(flatten)]
    overrides: BTreeMap<ModuleKey, bool>,
}

impl ModuleConfig {
    /// Configuration with every module enabled
    pub fn all_enabled() -> Self {
        Self::default()
    }

    /// Whether a module is enabled for this tenant
    pub fn is_enabled(&self, key: ModuleKey) -> bool {
        self.overrides.get(&key).copied().unwrap_or(true)
    }

    /// Sets a module's enablement
    pub fn set(&mut self, key: ModuleKey, enabled: bool) {
        self.overrides.insert(key, enabled);
    }

    /// Builder form of [`Self::set`]
    pub fn with(mut self, key: ModuleKey, enabled: bool) -> Self {
        self.set(key, enabled);
        self
    }

    /// Number of explicit overrides
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Parses persisted configuration from a JSON object
    ///
    /// Unknown keys are skipped, so configuration written by a newer schema
    /// version reads cleanly. Malformed JSON is the only error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hubnav::{ModuleConfig, ModuleKey};
    ///
    /// let config = ModuleConfig::from_json(
    ///     r#"{"messaging": false, "futureModule": true}"#,
    /// ).unwrap();
    /// assert!(!config.is_enabled(ModuleKey::Messaging));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, bool> = serde_json::from_str(json)
            .map_err(crate::error::HubnavError::InvalidConfig)?;
        Ok(Self::from_raw(raw))
    }

    /// Builds configuration from raw key/value pairs, skipping unknown keys
    pub fn from_raw(raw: impl IntoIterator<Item = (String, bool)>) -> Self {
        let mut config = Self::default();
        for (key, enabled) in raw {
            match key.parse::<ModuleKey>() {
                Ok(parsed) => config.set(parsed, enabled),
                Err(()) => {
                    tracing::debug!(%key, "ignoring unknown module key in configuration");
                }
            }
        }
        config
    }
}

/// Source of per-tenant module configuration
///
/// Implementations own fetching and caching; callers resolve a config once
/// per request and pass the value into the resolver.
#[async_trait]
pub trait ModuleConfigStore: Send + Sync {
    /// Returns the module configuration for a tenant
    ///
    /// Tenants with no persisted configuration resolve to the all-enabled
    /// default rather than an error.
    async fn module_config(&self, tenant: &TenantId) -> Result<ModuleConfig>;
}

/// Thread-safe in-memory configuration store
///
/// Cloning shares the underlying map, so one store can serve many request
/// handlers concurrently.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigStore {
    configs: Arc<DashMap<String, ModuleConfig>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a tenant's configuration
    pub fn put(&self, tenant: TenantId, config: ModuleConfig) {
        self.configs.insert(tenant.0, config);
    }

    /// Removes a tenant's configuration, reverting it to the default
    pub fn remove(&self, tenant: &TenantId) {
        self.configs.remove(tenant.as_str());
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

#[async_trait]
impl ModuleConfigStore for InMemoryConfigStore {
    async fn module_config(&self, tenant: &TenantId) -> Result<ModuleConfig> {
        Ok(self
            .configs
            .get(tenant.as_str())
            .map(|entry| entry.clone())
            .unwrap_or_default())
    }
}
