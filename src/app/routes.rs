use crate::core::service::ClimateService;
use crate::domain::model::{PrecipitationReading, TemperatureObservation, TemperatureSummary};
use crate::domain::ports::ClimateStore;
use crate::utils::error::Result;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

const WELCOME: &str = "Available Routes:<br/>\
/api/v1.0/precipitation<br/>\
/api/v1.0/stations<br/>\
/api/v1.0/tobs<br/>\
/api/v1.0/[start_date format:yyyy-mm-dd]<br/>\
/api/v1.0/[start_date format:yyyy-mm-dd]/[end_date format:yyyy-mm-dd]";

type SharedService<S> = State<Arc<ClimateService<S>>>;

/// Build the read-only API. Static routes win over the `{start}` capture, so
/// `/api/v1.0/stations` never reaches the summary handler.
pub fn router<S: ClimateStore + 'static>(service: Arc<ClimateService<S>>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/api/v1.0/precipitation", get(precipitation::<S>))
        .route("/api/v1.0/stations", get(stations::<S>))
        .route("/api/v1.0/tobs", get(tobs::<S>))
        .route("/api/v1.0/{start}", get(summary_since::<S>))
        .route("/api/v1.0/{start}/{end}", get(summary_between::<S>))
        .with_state(service)
}

async fn welcome() -> Html<&'static str> {
    Html(WELCOME)
}

async fn precipitation<S: ClimateStore>(
    State(service): SharedService<S>,
) -> Result<Json<Vec<PrecipitationReading>>> {
    let readings = service.precipitation_last_year().await?;
    tracing::debug!("GET precipitation -> {} rows", readings.len());
    Ok(Json(readings))
}

async fn stations<S: ClimateStore>(State(service): SharedService<S>) -> Result<Json<Vec<String>>> {
    Ok(Json(service.station_codes().await?))
}

async fn tobs<S: ClimateStore>(
    State(service): SharedService<S>,
) -> Result<Json<Vec<TemperatureObservation>>> {
    Ok(Json(service.station_temperature_observations().await?))
}

async fn summary_since<S: ClimateStore>(
    State(service): SharedService<S>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummary>> {
    Ok(Json(service.temperature_summary(&start, None).await?))
}

async fn summary_between<S: ClimateStore>(
    State(service): SharedService<S>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummary>> {
    Ok(Json(service.temperature_summary(&start, Some(&end)).await?))
}
