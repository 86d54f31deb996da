//! Forecast grouping
//!
//! Reduces the flat 3-hourly sample list to one representative sample per
//! calendar day. The selection rule mirrors what the UI shows on the per-day
//! cards: the midday sample when a date has one, otherwise the first sample
//! seen for that date.

use crate::entities::{DailyForecast, ForecastSample};
use crate::errors::DomainError;
use std::collections::HashMap;

/// Group a chronological sample list into one representative sample per day
///
/// A single fold over the input builds an ordered map keyed by date:
/// the first sample seen for a date is selected, and a later sample replaces
/// it only when that sample marks midday ("12:00:00"). Repeated midday
/// samples re-overwrite, so the last midday wins. Output follows the
/// first-seen order of dates, which keeps results deterministic even for
/// non-chronological input.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` for any sample whose timestamp
/// lacks the date/time separator. This is a contract violation by the
/// caller, not a user-facing condition.
pub fn group_by_day(samples: &[ForecastSample]) -> Result<Vec<DailyForecast>, DomainError> {
    let mut days: Vec<DailyForecast> = Vec::new();
    let mut index_by_date: HashMap<String, usize> = HashMap::new();

    for sample in samples {
        let date = sample.date_key()?;
        match index_by_date.get(date) {
            None => {
                index_by_date.insert(date.to_string(), days.len());
                days.push(DailyForecast {
                    date: date.to_string(),
                    sample: sample.clone(),
                });
            },
            Some(&i) if sample.is_midday() => {
                days[i].sample = sample.clone();
            },
            Some(_) => {},
        }
    }

    Ok(days)
}
