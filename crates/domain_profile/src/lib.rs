//! Profile Domain - cost-basis accounting for a single tracked holding
//!
//! This crate implements the core cost-basis engine, following
//! Domain-Driven Design (DDD) and Hexagonal Architecture principles.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic, containing only business logic:
//! - **Aggregate**: Profile is the aggregate root owning the ledger lines
//! - **Value Objects**: Line, LineTotals, CostLot
//! - **Strategies**: WeightedAverage and Fifo behind one recalculation contract
//! - **Domain Events**: LineAdded, LineRemoved, LineTotalsUpdated
//!
//! # Recalculation protocol
//!
//! Every structural mutation re-sorts the full history by
//! `(date, display_order)` and recomputes one totals snapshot per line
//! from scratch. Recomputing everything trades performance for a strict
//! correctness guarantee: editing any line, including historical ones, can
//! never leave a stale downstream snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_profile::{CalculationMethod, LineType, ProfileBuilder};
//!
//! let mut profile = ProfileBuilder::new()
//!     .name("BTC Stack")
//!     .asset(Asset::new("BTC", 8)?)
//!     .calculation_method(CalculationMethod::Fifo)
//!     .build()?;
//!
//! profile.add_line(date, 0, LineType::Buy, qty, price, "first buy")?;
//! let totals = profile.current_totals();
//! ```

pub mod aggregate;
pub mod line;
pub mod calculation;
pub mod weighted_average;
pub mod fifo;
pub mod events;
pub mod error;
pub mod ports;

pub use aggregate::{Profile, ProfileBuilder};
pub use line::{Line, LineTotals, LineType};
pub use calculation::{CalculationError, CalculationMethod, CalculationStrategy};
pub use weighted_average::WeightedAverageStrategy;
pub use fifo::{CostLot, FifoStrategy};
pub use events::ProfileEvent;
pub use error::ProfileError;
pub use ports::ProfileRepository;
