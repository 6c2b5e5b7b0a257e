//! Ports and Adapters Infrastructure
//!
//! Foundational types for the hexagonal architecture (ports and adapters)
//! pattern. Each domain defines its own port trait for the collaborators it
//! needs (e.g. a repository); adapters implement those traits outside the
//! domain layer.
//!
//! ```rust,ignore
//! // In domain_profile/src/ports.rs
//! #[async_trait]
//! pub trait ProfileRepository: DomainPort {
//!     async fn get(&self, id: ProfileId) -> PortResult<Profile>;
//!     async fn save(&self, profile: &Profile) -> PortResult<()>;
//! }
//! ```

use thiserror::Error;

/// Error type for port operations
///
/// A unified error type that all port implementations must use, ensuring
/// consistent error handling across adapters.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// Data could not be serialized or deserialized
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// An unexpected internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PortError {
    /// Creates a not-found error for an entity
    pub fn not_found(entity_type: impl Into<String>, id: impl std::fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }
}

/// Result alias for port operations
pub type PortResult<T> = Result<T, PortError>;

/// Marker trait for domain ports
///
/// Implemented by every port trait so adapters can be enumerated and
/// identified uniformly.
pub trait DomainPort {
    /// Returns a short name identifying the port, e.g. "profile_repository"
    fn port_name(&self) -> &'static str;
}
