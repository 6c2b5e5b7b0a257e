//! Profile Aggregate Root
//!
//! The Profile aggregate is the consistency boundary for one tracked
//! holding. It owns the ledger lines, the active calculation method, and
//! the asset descriptor that fixes rounding precision.
//!
//! # Invariants
//!
//! - Lines are processed ascending by `(date, display_order)`
//! - Every structural mutation recomputes the entire ordered sequence, so
//!   no line ever carries a stale totals snapshot
//! - A sell may never exceed the holding accumulated before it; a mutation
//!   that would create such a history is rolled back untouched
//! - Exactly one calculation method is active; switching it does not by
//!   itself recompute existing totals

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Asset, Currency, LineId, ProfileId};

use crate::calculation::{CalculationError, CalculationMethod};
use crate::error::ProfileError;
use crate::events::ProfileEvent;
use crate::line::{Line, LineTotals, LineType};

/// Maximum profile name length in characters
const MAX_NAME_LEN: usize = 30;

/// The Profile aggregate root
///
/// Tracks the running average acquisition cost and total cost basis of a
/// single holding as its buy/sell/setup history is edited. The enclosing
/// repository layer is responsible for serializing mutations per profile
/// identity and persisting the profile with all lines atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique profile identifier
    id: ProfileId,
    /// Display name (1-30 characters)
    name: String,
    /// Whether the profile is shown in overviews
    visible: bool,
    /// Display icon
    icon: String,
    /// Display currency for formatting totals
    currency: Currency,
    /// Asset descriptor controlling rounding
    asset: Asset,
    /// Active calculation method
    method: CalculationMethod,
    /// Ledger lines, kept sorted by `(date, display_order)`
    lines: Vec<Line>,
    /// Domain events to be published
    #[serde(skip)]
    events: Vec<ProfileEvent>,
    /// Version for optimistic concurrency
    version: u32,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Profile {
    /// Returns the profile ID
    pub fn id(&self) -> ProfileId {
        self.id
    }

    /// Returns the profile name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the profile is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the display icon
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Returns the display currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the asset descriptor
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// Returns the active calculation method
    pub fn calculation_method(&self) -> CalculationMethod {
        self.method
    }

    /// Returns the lines ascending by `(date, display_order)`
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns a line by ID
    pub fn line(&self, line_id: LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id() == line_id)
    }

    /// Returns the holding quantity after the last line, zero for an
    /// empty ledger
    pub fn holding_quantity(&self) -> Decimal {
        self.current_totals().quantity
    }

    /// Returns the totals snapshot of the last line, or the zero sentinel
    /// for an empty ledger
    pub fn current_totals(&self) -> LineTotals {
        self.lines
            .last()
            .map(|l| *l.totals())
            .unwrap_or(LineTotals::ZERO)
    }

    /// Returns the aggregate version
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns accumulated domain events and clears them
    pub fn take_events(&mut self) -> Vec<ProfileEvent> {
        std::mem::take(&mut self.events)
    }

    /// Adds a ledger line and recomputes the full history
    ///
    /// The line is inserted, the sequence re-sorted by
    /// `(date, display_order)`, and every line's totals recomputed under
    /// the active method. Quantity/price/date validation is upstream
    /// responsibility; the one check the engine owns is the over-sell
    /// rule.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Calculation`] if the resulting history
    /// contains a sell exceeding the holding before it. The aggregate is
    /// left unchanged in that case.
    pub fn add_line(
        &mut self,
        date: NaiveDate,
        display_order: u32,
        line_type: LineType,
        quantity: Decimal,
        unit_price: Decimal,
        comment: impl Into<String>,
    ) -> Result<LineId, ProfileError> {
        let line = Line::new(date, display_order, line_type, quantity, unit_price, comment);
        let line_id = line.id();

        self.lines.push(line);
        self.sort_lines();

        if let Err(e) = self.run_recalculation() {
            self.lines.retain(|l| l.id() != line_id);
            return Err(e.into());
        }

        let now = Utc::now();
        self.touch(now);
        self.events.push(ProfileEvent::LineAdded {
            profile_id: self.id,
            line_id,
            line_type,
            date,
            quantity,
            unit_price,
            timestamp: now,
        });

        Ok(line_id)
    }

    /// Removes a ledger line and recomputes the full history
    ///
    /// # Errors
    ///
    /// - [`ProfileError::LineNotFound`] if the line is not on this profile
    /// - [`ProfileError::Calculation`] if the remaining history would
    ///   over-sell (removing a historical buy can strand a later sell);
    ///   the aggregate is left unchanged in that case
    pub fn remove_line(&mut self, line_id: LineId) -> Result<(), ProfileError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.id() == line_id)
            .ok_or_else(|| ProfileError::line_not_found(line_id))?;

        let removed = self.lines.remove(index);
        self.sort_lines();

        if let Err(e) = self.run_recalculation() {
            self.lines.push(removed);
            self.sort_lines();
            return Err(e.into());
        }

        let now = Utc::now();
        self.touch(now);
        self.events.push(ProfileEvent::LineRemoved {
            profile_id: self.id,
            line_id,
            timestamp: now,
        });

        Ok(())
    }

    /// Swaps the active calculation method
    ///
    /// Existing totals still reflect the previous method: switching does
    /// not recompute. The next structural mutation uses the new method,
    /// or call [`Profile::recalculate`] to restate history immediately.
    pub fn change_calculation_method(&mut self, method: CalculationMethod) {
        if self.method == method {
            return;
        }

        self.method = method;
        let now = Utc::now();
        self.touch(now);
        self.events.push(ProfileEvent::CalculationMethodChanged {
            profile_id: self.id,
            method,
            timestamp: now,
        });
    }

    /// Recomputes every line's totals under the active method
    ///
    /// Emits an updated-event per line whose snapshot actually changed.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Calculation`] if the history over-sells
    /// under the active method; totals are left untouched in that case.
    pub fn recalculate(&mut self) -> Result<(), ProfileError> {
        self.sort_lines();
        self.run_recalculation()?;
        Ok(())
    }

    /// Renames the profile
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or longer than 30 characters
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ProfileError> {
        let name = name.into();
        validate_name(&name)?;

        if self.name == name {
            return Ok(());
        }

        self.name = name.clone();
        let now = Utc::now();
        self.touch(now);
        self.events.push(ProfileEvent::ProfileRenamed {
            profile_id: self.id,
            name,
            timestamp: now,
        });

        Ok(())
    }

    /// Sets the visibility flag
    pub fn set_visibility(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }

        self.visible = visible;
        let now = Utc::now();
        self.touch(now);
        self.events.push(ProfileEvent::VisibilityChanged {
            profile_id: self.id,
            visible,
            timestamp: now,
        });
    }

    /// Sets the display icon
    pub fn set_icon(&mut self, icon: impl Into<String>) {
        let icon = icon.into();
        if self.icon == icon {
            return;
        }

        self.icon = icon.clone();
        let now = Utc::now();
        self.touch(now);
        self.events.push(ProfileEvent::IconChanged {
            profile_id: self.id,
            icon,
            timestamp: now,
        });
    }

    /// Sets the display currency
    ///
    /// The currency is formatting metadata; computed totals are unaffected.
    pub fn set_currency(&mut self, currency: Currency) {
        if self.currency == currency {
            return;
        }

        self.currency = currency;
        let now = Utc::now();
        self.touch(now);
        self.events.push(ProfileEvent::CurrencyChanged {
            profile_id: self.id,
            currency,
            timestamp: now,
        });
    }

    /// Sorts lines ascending by `(date, display_order)`
    ///
    /// The sort is stable, so lines with a fully equal key keep their
    /// insertion order.
    fn sort_lines(&mut self) {
        self.lines.sort_by_key(|l| l.sort_key());
    }

    /// Runs the active strategy over the full sequence and applies the
    /// snapshots
    fn run_recalculation(&mut self) -> Result<(), CalculationError> {
        debug!(
            profile_id = %self.id,
            method = %self.method,
            lines = self.lines.len(),
            "recalculating line totals"
        );

        let snapshots = self.method.recalculate(&self.lines, &self.asset)?;
        self.apply_snapshots(snapshots);
        Ok(())
    }

    /// Writes snapshots back onto the lines, emitting an updated-event per
    /// line whose totals actually changed
    fn apply_snapshots(&mut self, snapshots: Vec<LineTotals>) {
        let mut changed = Vec::new();
        for (line, totals) in self.lines.iter_mut().zip(snapshots) {
            if *line.totals() != totals {
                line.set_totals(totals);
                changed.push((line.id(), totals));
            }
        }

        let now = Utc::now();
        for (line_id, totals) in changed {
            self.events.push(ProfileEvent::LineTotalsUpdated {
                profile_id: self.id,
                line_id,
                totals,
                timestamp: now,
            });
        }
    }

    /// Bumps the version and update timestamp after a successful mutation
    fn touch(&mut self, now: DateTime<Utc>) {
        self.version += 1;
        self.updated_at = now;
    }
}

/// Validates the 1-30 character profile name rule
fn validate_name(name: &str) -> Result<(), ProfileError> {
    let len = name.chars().count();
    if len == 0 {
        return Err(ProfileError::validation("profile name must not be empty"));
    }
    if len > MAX_NAME_LEN {
        return Err(ProfileError::validation(format!(
            "profile name must be at most {MAX_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Builder for creating new profiles
///
/// # Example
///
/// ```rust,ignore
/// let profile = ProfileBuilder::new()
///     .name("BTC Stack")
///     .asset(Asset::new("BTC", 8)?)
///     .currency(Currency::EUR)
///     .calculation_method(CalculationMethod::Fifo)
///     .build()?;
/// ```
pub struct ProfileBuilder {
    name: Option<String>,
    asset: Option<Asset>,
    currency: Currency,
    icon: String,
    visible: bool,
    method: CalculationMethod,
}

impl ProfileBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: None,
            asset: None,
            currency: Currency::USD,
            icon: String::new(),
            visible: true,
            method: CalculationMethod::WeightedAverage,
        }
    }

    /// Sets the profile name (required, 1-30 characters)
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the asset descriptor (required)
    pub fn asset(mut self, asset: Asset) -> Self {
        self.asset = Some(asset);
        self
    }

    /// Sets the display currency
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the display icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Sets the visibility flag
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the calculation method
    pub fn calculation_method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    /// Builds the profile
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing or the name violates
    /// the 1-30 character rule
    pub fn build(self) -> Result<Profile, ProfileError> {
        let name = self
            .name
            .ok_or_else(|| ProfileError::MissingRequiredField("name".to_string()))?;
        validate_name(&name)?;
        let asset = self
            .asset
            .ok_or_else(|| ProfileError::MissingRequiredField("asset".to_string()))?;

        let now = Utc::now();
        let profile_id = ProfileId::new_v7();

        Ok(Profile {
            id: profile_id,
            name: name.clone(),
            visible: self.visible,
            icon: self.icon,
            currency: self.currency,
            asset,
            method: self.method,
            lines: Vec::new(),
            events: vec![ProfileEvent::ProfileCreated {
                profile_id,
                name,
                method: self.method,
                timestamp: now,
            }],
            version: 1,
            created_at: now,
            updated_at: now,
        })
    }
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
