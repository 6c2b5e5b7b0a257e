//! Ledger lines and their computed totals
//!
//! A line is one buy/sell/setup event in a profile's history. Lines are
//! owned exclusively by their profile; the totals snapshot on a line is
//! written only by the profile when a calculation strategy has processed
//! the full ordered history.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::LineId;

/// The kind of ledger event a line records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineType {
    /// Acquire quantity at a unit price
    Buy,
    /// Dispose of quantity
    Sell,
    /// Hard reset: quantity becomes the new absolute holding and the unit
    /// price the asserted average cost, discarding prior history
    Setup,
}

impl LineType {
    /// Returns the type name as used in serialized commands
    pub fn as_str(&self) -> &'static str {
        match self {
            LineType::Buy => "Buy",
            LineType::Sell => "Sell",
            LineType::Setup => "Setup",
        }
    }
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value snapshot produced after processing one line
///
/// `LineTotals::ZERO` is the sentinel for "not yet computed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    /// Per-unit average acquisition cost, rounded to asset precision
    pub average_cost: Decimal,
    /// Total cost basis, rounded to asset precision
    pub total_cost: Decimal,
    /// Running holding after this line
    pub quantity: Decimal,
}

impl LineTotals {
    /// The zero sentinel representing "not yet computed"
    pub const ZERO: LineTotals = LineTotals {
        average_cost: Decimal::ZERO,
        total_cost: Decimal::ZERO,
        quantity: Decimal::ZERO,
    };

    /// Creates a totals snapshot
    pub fn new(average_cost: Decimal, total_cost: Decimal, quantity: Decimal) -> Self {
        Self {
            average_cost,
            total_cost,
            quantity,
        }
    }

    /// Returns true if this is the zero sentinel
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Default for LineTotals {
    fn default() -> Self {
        Self::ZERO
    }
}

/// One ledger event in a profile's history
///
/// Ordering within a profile is always ascending by `(date, display_order)`;
/// `display_order` exists purely to break same-date ties, e.g. a Setup
/// processed before a Buy on the same day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    id: LineId,
    date: NaiveDate,
    display_order: u32,
    line_type: LineType,
    quantity: Decimal,
    unit_price: Decimal,
    comment: String,
    totals: LineTotals,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Line {
    /// Creates a new line with uncomputed totals
    ///
    /// Quantity and price validation is the caller's responsibility; the
    /// engine only interprets the values.
    pub fn new(
        date: NaiveDate,
        display_order: u32,
        line_type: LineType,
        quantity: Decimal,
        unit_price: Decimal,
        comment: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: LineId::new_v7(),
            date,
            display_order,
            line_type,
            quantity,
            unit_price,
            comment: comment.into(),
            totals: LineTotals::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the line ID
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Returns the calendar date of the event
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the same-date tie-break order
    pub fn display_order(&self) -> u32 {
        self.display_order
    }

    /// Returns the event type
    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    /// Returns the traded quantity (for Setup: the new absolute holding)
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Returns the trade price (for Setup: the asserted average cost)
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Returns the free-form comment
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the computed totals snapshot
    pub fn totals(&self) -> &LineTotals {
        &self.totals
    }

    /// Returns the chronological sort key
    pub fn sort_key(&self) -> (NaiveDate, u32) {
        (self.date, self.display_order)
    }

    /// Writes a new totals snapshot. Only the owning profile calls this,
    /// and only with strategy output.
    pub(crate) fn set_totals(&mut self, totals: LineTotals) {
        self.totals = totals;
        self.updated_at = Utc::now();
    }
}
