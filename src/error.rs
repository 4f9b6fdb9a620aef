//! Error types for the navigation engine

use thiserror::Error;

/// Result type alias for navigation engine operations
pub type Result<T> = std::result::Result<T, HubnavError>;

/// Errors surfaced at the engine's boundaries.
///
/// The resolution core itself is total and never fails: unrecognized roles
/// classify as `Unknown`, unrecognized module keys are skipped, malformed
/// candidate routes are denied. Errors exist only at the seams where
/// identity and configuration are fetched or parsed.
#[derive(Error, Debug)]
pub enum HubnavError {
    /// The identity provider could not produce an identity
    #[error("identity provider unavailable: {reason}")]
    IdentityUnavailable { reason: String },

    /// The configuration store could not produce a tenant's module config
    #[error("module configuration for tenant '{tenant}' unavailable: {reason}")]
    ConfigUnavailable { tenant: String, reason: String },

    /// Persisted module configuration failed to parse
    #[error("invalid module configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// A route string failed validation
    #[error(transparent)]
    Route(#[from] crate::route::RouteError),

    /// Generic internal error
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for HubnavError {
    fn from(err: anyhow::Error) -> Self {
        HubnavError::Internal {
            message: err.to_string(),
        }
    }
}
