use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `station` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Station {
    /// Station code, e.g. "USC00519281". Unique across the table.
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// A row of the `measurement` table: one day at one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Measurement {
    pub station: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TemperatureObservation {
    pub prcp: Option<f64>,
    pub date: String,
    pub tobs: f64,
}

/// Min / average / max of `tobs` over a date range. All three are `None`
/// when no measurement falls in the range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TemperatureSummary {
    #[serde(rename = "Min Temperature")]
    pub min_temp: Option<f64>,
    #[serde(rename = "Average Temperature")]
    pub avg_temp: Option<f64>,
    #[serde(rename = "Max Temperature")]
    pub max_temp: Option<f64>,
}

impl From<&Measurement> for PrecipitationReading {
    fn from(m: &Measurement) -> Self {
        Self {
            date: m.date.clone(),
            prcp: m.prcp,
        }
    }
}

impl From<&Measurement> for TemperatureObservation {
    fn from(m: &Measurement) -> Self {
        Self {
            prcp: m.prcp,
            date: m.date.clone(),
            tobs: m.tobs,
        }
    }
}
