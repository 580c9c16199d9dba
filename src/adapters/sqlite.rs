use crate::domain::model::{PrecipitationReading, TemperatureObservation, TemperatureSummary};
use crate::domain::ports::ClimateStore;
use crate::utils::error::{ClimateError, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const MOST_RECENT_DATE: &str = "SELECT MAX(date) FROM measurement";

// Numeric columns are cast to REAL: files with NUMERIC or untyped columns
// hand back INTEGER values, which do not decode into f64.
const MEASUREMENTS_SINCE: &str =
    "SELECT date, CAST(prcp AS REAL) AS prcp FROM measurement WHERE date >= ?";

const DISTINCT_STATIONS: &str = "SELECT DISTINCT station FROM station";

const STATION_OBSERVATIONS: &str = "SELECT CAST(prcp AS REAL) AS prcp, date, CAST(tobs AS REAL) AS tobs \
     FROM measurement \
     WHERE station = ? AND date <= ? \
     ORDER BY date ASC";

const SUMMARY_SINCE: &str = "SELECT CAST(MIN(tobs) AS REAL) AS min_temp, AVG(tobs) AS avg_temp, \
     CAST(MAX(tobs) AS REAL) AS max_temp \
     FROM measurement WHERE date >= ?";

const SUMMARY_BETWEEN: &str = "SELECT CAST(MIN(tobs) AS REAL) AS min_temp, AVG(tobs) AS avg_temp, \
     CAST(MAX(tobs) AS REAL) AS max_temp \
     FROM measurement WHERE date >= ? AND date <= ?";

/// `ClimateStore` over a read-only SQLite file, backed by a connection pool
/// that lives for the whole process.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open `path` read-only. A missing file is an error, never an empty
    /// database.
    pub async fn connect(path: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        tracing::info!(
            "🗄️  Opened {} read-only ({} max connections)",
            path,
            max_connections
        );

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("🗄️  Connection pool closed");
    }
}

#[async_trait]
impl ClimateStore for SqliteStore {
    async fn most_recent_measurement_date(&self) -> Result<String> {
        let latest = sqlx::query_scalar::<_, Option<String>>(MOST_RECENT_DATE)
            .fetch_one(&self.pool)
            .await?;

        latest.ok_or(ClimateError::NoMeasurements)
    }

    async fn measurements_since(&self, since: &str) -> Result<Vec<PrecipitationReading>> {
        let rows = sqlx::query_as::<_, PrecipitationReading>(MEASUREMENTS_SINCE)
            .bind(since)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("{} measurements on or after {}", rows.len(), since);
        Ok(rows)
    }

    async fn distinct_station_codes(&self) -> Result<Vec<String>> {
        let codes = sqlx::query_scalar::<_, String>(DISTINCT_STATIONS)
            .fetch_all(&self.pool)
            .await?;

        Ok(codes)
    }

    async fn temperature_observations_for_station(
        &self,
        station: &str,
        on_or_before: &str,
    ) -> Result<Vec<TemperatureObservation>> {
        let rows = sqlx::query_as::<_, TemperatureObservation>(STATION_OBSERVATIONS)
            .bind(station)
            .bind(on_or_before)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            "{} observations for {} on or before {}",
            rows.len(),
            station,
            on_or_before
        );
        Ok(rows)
    }

    async fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary> {
        let query = match end {
            Some(end) => sqlx::query_as::<_, TemperatureSummary>(SUMMARY_BETWEEN)
                .bind(start)
                .bind(end),
            None => sqlx::query_as::<_, TemperatureSummary>(SUMMARY_SINCE).bind(start),
        };

        // Aggregates always produce exactly one row, NULLs included.
        let summary = query.fetch_one(&self.pool).await?;
        Ok(summary)
    }
}
