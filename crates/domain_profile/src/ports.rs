//! Profile Domain Ports
//!
//! Port interfaces for the profile domain, enabling swappable
//! implementations (relational database, document store, in-memory mock).
//!
//! # Contract
//!
//! The engine itself is synchronous and in-memory; the repository adapter
//! owns everything around it:
//!
//! - Loads may return lines in any order; the aggregate re-sorts
//!   defensively before every recalculation
//! - Saves must persist the profile and all lines, including every updated
//!   totals snapshot, atomically
//! - At most one mutation may be in flight per profile identity
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_profile::ports::ProfileRepository;
//! use std::sync::Arc;
//!
//! pub struct ProfileService {
//!     repository: Arc<dyn ProfileRepository>,
//! }
//!
//! impl ProfileService {
//!     pub async fn add_line(&self, id: ProfileId, cmd: AddLine) -> Result<(), PortError> {
//!         let mut profile = self.repository.get(id).await?;
//!         // ...mutate, then persist profile + lines atomically
//!         self.repository.save(&profile).await
//!     }
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, PortResult, ProfileId};

use crate::aggregate::Profile;

/// Repository port for loading and persisting profiles
#[async_trait]
pub trait ProfileRepository: DomainPort + Send + Sync {
    /// Loads a profile with all its lines
    async fn get(&self, id: ProfileId) -> PortResult<Profile>;

    /// Persists a profile and all its lines atomically
    async fn save(&self, profile: &Profile) -> PortResult<()>;

    /// Deletes a profile and all its lines
    async fn delete(&self, id: ProfileId) -> PortResult<()>;

    /// Lists all stored profiles
    async fn list(&self) -> PortResult<Vec<Profile>>;
}
