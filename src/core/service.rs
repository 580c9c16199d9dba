use crate::domain::model::{PrecipitationReading, TemperatureObservation, TemperatureSummary};
use crate::domain::ports::ClimateStore;
use crate::utils::error::{ClimateError, Result};
use chrono::{Duration, NaiveDate};

/// Station served by the tobs route.
pub const TOBS_STATION: &str = "USC00519281";

/// Last date (inclusive) served by the tobs route.
pub const TOBS_CUTOFF_DATE: &str = "2016-08-23";

/// Size of the precipitation window, counted back from the latest measurement.
pub const PRECIPITATION_WINDOW_DAYS: i64 = 365;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `date` minus [`PRECIPITATION_WINDOW_DAYS`], as `YYYY-MM-DD`.
pub fn one_year_before(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| {
        ClimateError::InvalidStoredDate {
            value: date.to_string(),
            source,
        }
    })?;

    let cutoff = parsed - Duration::days(PRECIPITATION_WINDOW_DAYS);
    Ok(cutoff.format(DATE_FORMAT).to_string())
}

/// The operations behind each route, independent of HTTP.
pub struct ClimateService<S: ClimateStore> {
    store: S,
}

impl<S: ClimateStore> ClimateService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Precipitation for the year ending at the latest measurement, boundary
    /// day included.
    pub async fn precipitation_last_year(&self) -> Result<Vec<PrecipitationReading>> {
        let latest = self.store.most_recent_measurement_date().await?;
        let cutoff = one_year_before(&latest)?;
        tracing::debug!("Latest measurement {}, precipitation cutoff {}", latest, cutoff);

        self.store.measurements_since(&cutoff).await
    }

    pub async fn station_codes(&self) -> Result<Vec<String>> {
        self.store.distinct_station_codes().await
    }

    pub async fn station_temperature_observations(&self) -> Result<Vec<TemperatureObservation>> {
        self.store
            .temperature_observations_for_station(TOBS_STATION, TOBS_CUTOFF_DATE)
            .await
    }

    pub async fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary> {
        tracing::debug!("Temperature summary from {} to {:?}", start, end);
        self.store.temperature_summary(start, end).await
    }
}
