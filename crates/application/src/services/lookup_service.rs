//! Weather lookup service
//!
//! Drives one city-lookup submission: both provider calls are issued
//! together and awaited together, the forecast list is grouped per day, and
//! the view state is swapped in a single step. Either both display slots fill
//! or both stay empty; there is no partial-success state.
//!
//! Overlapping submissions are resolved by generation tagging: every
//! submission takes a fresh generation, and a completion is dropped unless
//! its generation is still the latest. A stale slower response can therefore
//! never overwrite a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::WeatherPort;
use domain::entities::{CurrentConditions, DailyForecast};
use domain::group_by_day;
use domain::value_objects::UnitSystem;

/// Everything one successful lookup renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Current conditions card
    pub current: CurrentConditions,
    /// One representative sample per calendar day, first-seen date order
    pub daily: Vec<DailyForecast>,
    /// Unit system the report's values are expressed in
    pub units: UnitSystem,
}

/// View state for the lookup flow
///
/// Explicit transitions Idle → Loading → {Ready, Failed} drive a pure render
/// function in the presentation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A submission is in flight
    Loading,
    /// Both calls succeeded; report swapped in atomically
    Ready(WeatherReport),
    /// Either call failed; both display slots are cleared
    Failed(String),
}

/// Orchestrates weather lookups against the provider port
pub struct LookupService {
    port: Arc<dyn WeatherPort>,
    state: Mutex<LookupState>,
    generation: AtomicU64,
}

impl std::fmt::Debug for LookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupService")
            .field("state", &*self.state.lock())
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl LookupService {
    /// Create a new lookup service over the given weather port
    #[must_use]
    pub fn new(port: Arc<dyn WeatherPort>) -> Self {
        Self {
            port,
            state: Mutex::new(LookupState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current view state
    #[must_use]
    pub fn state(&self) -> LookupState {
        self.state.lock().clone()
    }

    /// Run one lookup submission for a city
    ///
    /// Returns the report for this submission. The shared view state is
    /// updated only if no newer submission has started in the meantime.
    ///
    /// # Errors
    ///
    /// Returns the underlying `ApplicationError`; callers show
    /// [`ApplicationError::user_message`] for fetch failures.
    #[instrument(skip(self), fields(city = %city, units = %units))]
    pub async fn lookup(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<WeatherReport, ApplicationError> {
        let generation = self.begin();
        let result = self.fetch_report(city, units).await;

        if let Err(err) = &result {
            warn!(error = %err, "weather lookup failed");
        }
        if !self.finish(generation, &result) {
            debug!(generation, "dropping stale lookup completion");
        }
        result
    }

    /// Fetch both responses, then derive the grouped report
    async fn fetch_report(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<WeatherReport, ApplicationError> {
        let (current, samples) = future::try_join(
            self.port.current_conditions(city, units),
            self.port.forecast(city, units),
        )
        .await?;

        let daily = group_by_day(&samples)?;
        debug!(samples = samples.len(), days = daily.len(), "forecast grouped");

        Ok(WeatherReport {
            current,
            daily,
            units,
        })
    }

    /// Start a new submission: bump the generation and enter Loading
    ///
    /// The bump happens under the state lock so no completion can observe a
    /// current generation and then write after a newer submission started.
    fn begin(&self) -> u64 {
        let mut state = self.state.lock();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *state = LookupState::Loading;
        generation
    }

    /// Apply a submission's outcome unless a newer submission superseded it
    ///
    /// The generation is compared while holding the state lock, so the check
    /// and the write are one atomic step with respect to `begin`.
    ///
    /// Returns whether the outcome was applied.
    fn finish(
        &self,
        generation: u64,
        result: &Result<WeatherReport, ApplicationError>,
    ) -> bool {
        let mut state = self.state.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        *state = match result {
            Ok(report) => LookupState::Ready(report.clone()),
            Err(err) => LookupState::Failed(err.user_message()),
        };
        true
    }
}
