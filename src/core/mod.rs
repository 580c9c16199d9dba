pub mod service;

pub use crate::domain::model::{
    Measurement, PrecipitationReading, Station, TemperatureObservation, TemperatureSummary,
};
pub use crate::domain::ports::{ClimateStore, ConfigProvider};
pub use crate::utils::error::Result;
