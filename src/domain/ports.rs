use crate::domain::model::{PrecipitationReading, TemperatureObservation, TemperatureSummary};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only queries over the station and measurement tables.
///
/// Date arguments are raw `YYYY-MM-DD` strings compared as text by the
/// backing store; they are never parsed or validated here.
#[async_trait]
pub trait ClimateStore: Send + Sync {
    /// Latest `date` in the measurement table. `ClimateError::NoMeasurements`
    /// when the table is empty.
    async fn most_recent_measurement_date(&self) -> Result<String>;

    /// Every `(date, prcp)` pair with `date >= since`, in no particular order.
    async fn measurements_since(&self, since: &str) -> Result<Vec<PrecipitationReading>>;

    async fn distinct_station_codes(&self) -> Result<Vec<String>>;

    /// Observations for one station up to and including `on_or_before`,
    /// ascending by date.
    async fn temperature_observations_for_station(
        &self,
        station: &str,
        on_or_before: &str,
    ) -> Result<Vec<TemperatureObservation>>;

    async fn temperature_summary(&self, start: &str, end: Option<&str>)
        -> Result<TemperatureSummary>;
}

pub trait ConfigProvider: Send + Sync {
    fn database_path(&self) -> &str;
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn max_connections(&self) -> u32;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
