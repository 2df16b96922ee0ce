//! Weight tracking log shown on the dashboard card.
//!
//! Entries are newest-first. Each entry records its change against the entry
//! that was on top when it was added, so the list reads as a running delta.

#[cfg(test)]
#[path = "weight_test.rs"]
mod weight_test;

use time::{Duration, PrimitiveDateTime};

use crate::util::clock::{format_entry_date, format_entry_time};

#[derive(Clone, Debug, PartialEq)]
pub struct WeightEntry {
    pub id: u64,
    pub recorded_at: PrimitiveDateTime,
    pub weight_kg: f64,
    pub change_kg: f64,
    /// Added during this session rather than present at load.
    pub inserted: bool,
}

impl WeightEntry {
    pub fn is_gain(&self) -> bool {
        self.change_kg >= 0.0
    }

    /// e.g. "70 kg", "68.5 kg".
    pub fn weight_label(&self) -> String {
        format!("{} kg", self.weight_kg)
    }

    /// Signed one-decimal change, e.g. "+1.5 kg", "-1.5 kg".
    pub fn change_label(&self) -> String {
        let sign = if self.is_gain() { "+" } else { "" };
        format!("{sign}{:.1} kg", self.change_kg)
    }

    pub fn change_class(&self) -> &'static str {
        if self.is_gain() { "positive" } else { "negative" }
    }

    pub fn arrow_icon(&self) -> &'static str {
        if self.is_gain() { "fa-arrow-up" } else { "fa-arrow-down" }
    }

    pub fn date_label(&self, today: time::Date) -> String {
        format_entry_date(self.recorded_at.date(), today)
    }

    pub fn time_label(&self) -> String {
        format_entry_time(self.recorded_at)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightLog {
    next_id: u64,
    pub entries: Vec<WeightEntry>,
}

impl WeightLog {
    /// Sample history ending at `now`, oldest first: three daily weigh-ins.
    pub fn seeded(now: PrimitiveDateTime) -> Self {
        let mut log = Self::default();
        for (days_ago, weight) in [(2, 69.2), (1, 68.9), (0, 68.5)] {
            log.push(weight, now - Duration::days(days_ago), false);
        }
        log
    }

    /// Record a weigh-in logged during this session.
    pub fn add(&mut self, weight_kg: f64, at: PrimitiveDateTime) -> &WeightEntry {
        self.push(weight_kg, at, true)
    }

    fn push(&mut self, weight_kg: f64, at: PrimitiveDateTime, inserted: bool) -> &WeightEntry {
        let previous = self.entries.first().map_or(0.0, |e| e.weight_kg);
        let change = weight_kg - previous;
        self.next_id += 1;
        self.entries.insert(
            0,
            WeightEntry {
                id: self.next_id,
                recorded_at: at,
                weight_kg,
                // Normalize -0.0 so an unchanged weight reads "+0.0 kg".
                change_kg: if change == 0.0 { 0.0 } else { change },
                inserted,
            },
        );
        &self.entries[0]
    }

    pub fn latest(&self) -> Option<&WeightEntry> {
        self.entries.first()
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WeightInputError {
    #[error("weight is not a number: {0:?}")]
    NotANumber(String),
    #[error("weight must be positive, got {0}")]
    OutOfRange(f64),
}

/// Parse the card's weight field.
///
/// # Errors
///
/// Returns [`WeightInputError`] for non-numeric, non-finite, or non-positive input.
pub fn parse_weight_input(raw: &str) -> Result<f64, WeightInputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| WeightInputError::NotANumber(trimmed.to_owned()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(WeightInputError::OutOfRange(value));
    }
    Ok(value)
}
