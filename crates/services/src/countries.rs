use std::sync::Arc;

use quiz_core::{CountryFilter, CountryReport};
use storage::NameRepository;

use crate::error::CountryServiceError;

/// Runs the country projections over a name source.
#[derive(Clone)]
pub struct CountryService {
    names: Arc<dyn NameRepository>,
    filter: CountryFilter,
}

impl CountryService {
    #[must_use]
    pub fn new(names: Arc<dyn NameRepository>, filter: CountryFilter) -> Self {
        Self { names, filter }
    }

    #[must_use]
    pub fn filter(&self) -> &CountryFilter {
        &self.filter
    }

    /// Load the names and compute both projections.
    ///
    /// Nothing is returned when the source cannot be read; there is no partial report.
    ///
    /// # Errors
    ///
    /// Returns `CountryServiceError::Storage` if the names cannot be loaded.
    pub async fn report(&self) -> Result<CountryReport, CountryServiceError> {
        let records = self.names.load_names().await.inspect_err(|err| {
            log::warn!("country list unavailable: {err}");
        })?;
        let report = self.filter.report(&records);
        log::info!(
            "country report: {} of {} record(s) by initial, {} by vowel count",
            report.by_initial.len(),
            records.len(),
            report.by_vowel_count.len()
        );
        Ok(report)
    }
}
