//! Core Kernel - Foundational types and utilities for the cost-basis system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Asset descriptors controlling precision-aware rounding
//! - Display currencies for formatting computed totals
//! - Common identifiers and value objects

pub mod asset;
pub mod currency;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use asset::{Asset, AssetError, MAX_PRECISION};
pub use currency::Currency;
pub use identifiers::{LineId, ProfileId};
pub use ports::{DomainPort, PortError, PortResult};
pub use error::CoreError;
