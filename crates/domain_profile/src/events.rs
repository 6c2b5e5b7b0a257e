//! Domain events for the profile aggregate
//!
//! Events capture every significant state change in a profile's lifecycle.
//! They are used for:
//! - Audit trails
//! - Event-driven integrations
//! - Keeping read models in sync with recomputed totals

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, LineId, ProfileId};

use crate::calculation::CalculationMethod;
use crate::line::{LineTotals, LineType};

/// Domain events emitted by the Profile aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProfileEvent {
    /// A profile has been created
    ProfileCreated {
        profile_id: ProfileId,
        name: String,
        method: CalculationMethod,
        timestamp: DateTime<Utc>,
    },

    /// The profile has been renamed
    ProfileRenamed {
        profile_id: ProfileId,
        name: String,
        timestamp: DateTime<Utc>,
    },

    /// The profile's visibility flag has changed
    VisibilityChanged {
        profile_id: ProfileId,
        visible: bool,
        timestamp: DateTime<Utc>,
    },

    /// The profile's display icon has changed
    IconChanged {
        profile_id: ProfileId,
        icon: String,
        timestamp: DateTime<Utc>,
    },

    /// The profile's display currency has changed
    CurrencyChanged {
        profile_id: ProfileId,
        currency: Currency,
        timestamp: DateTime<Utc>,
    },

    /// The active calculation method has been swapped
    ///
    /// Emitting this event does not imply recomputation; existing totals
    /// still reflect the previous method until the next structural
    /// mutation or an explicit recalculate.
    CalculationMethodChanged {
        profile_id: ProfileId,
        method: CalculationMethod,
        timestamp: DateTime<Utc>,
    },

    /// A ledger line has been added
    LineAdded {
        profile_id: ProfileId,
        line_id: LineId,
        line_type: LineType,
        date: NaiveDate,
        quantity: Decimal,
        unit_price: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// A ledger line has been removed
    LineRemoved {
        profile_id: ProfileId,
        line_id: LineId,
        timestamp: DateTime<Utc>,
    },

    /// A line's computed totals have changed after recalculation
    LineTotalsUpdated {
        profile_id: ProfileId,
        line_id: LineId,
        totals: LineTotals,
        timestamp: DateTime<Utc>,
    },
}

impl ProfileEvent {
    /// Returns the profile ID associated with this event
    pub fn profile_id(&self) -> ProfileId {
        match self {
            ProfileEvent::ProfileCreated { profile_id, .. } => *profile_id,
            ProfileEvent::ProfileRenamed { profile_id, .. } => *profile_id,
            ProfileEvent::VisibilityChanged { profile_id, .. } => *profile_id,
            ProfileEvent::IconChanged { profile_id, .. } => *profile_id,
            ProfileEvent::CurrencyChanged { profile_id, .. } => *profile_id,
            ProfileEvent::CalculationMethodChanged { profile_id, .. } => *profile_id,
            ProfileEvent::LineAdded { profile_id, .. } => *profile_id,
            ProfileEvent::LineRemoved { profile_id, .. } => *profile_id,
            ProfileEvent::LineTotalsUpdated { profile_id, .. } => *profile_id,
        }
    }

    /// Returns the timestamp of this event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ProfileEvent::ProfileCreated { timestamp, .. } => *timestamp,
            ProfileEvent::ProfileRenamed { timestamp, .. } => *timestamp,
            ProfileEvent::VisibilityChanged { timestamp, .. } => *timestamp,
            ProfileEvent::IconChanged { timestamp, .. } => *timestamp,
            ProfileEvent::CurrencyChanged { timestamp, .. } => *timestamp,
            ProfileEvent::CalculationMethodChanged { timestamp, .. } => *timestamp,
            ProfileEvent::LineAdded { timestamp, .. } => *timestamp,
            ProfileEvent::LineRemoved { timestamp, .. } => *timestamp,
            ProfileEvent::LineTotalsUpdated { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            ProfileEvent::ProfileCreated { .. } => "ProfileCreated",
            ProfileEvent::ProfileRenamed { .. } => "ProfileRenamed",
            ProfileEvent::VisibilityChanged { .. } => "VisibilityChanged",
            ProfileEvent::IconChanged { .. } => "IconChanged",
            ProfileEvent::CurrencyChanged { .. } => "CurrencyChanged",
            ProfileEvent::CalculationMethodChanged { .. } => "CalculationMethodChanged",
            ProfileEvent::LineAdded { .. } => "LineAdded",
            ProfileEvent::LineRemoved { .. } => "LineRemoved",
            ProfileEvent::LineTotalsUpdated { .. } => "LineTotalsUpdated",
        }
    }
}
