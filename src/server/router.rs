use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use super::ApiError;
use crate::station_extremes::StationExtremes;
use crate::types::combined::CombinedRecord;

pub fn router(service: StationExtremes) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/:lat/:long", get(nearby_extremes))
        .with_state(service)
}

async fn home() -> &'static str {
    "Home page"
}

async fn nearby_extremes(
    State(service): State<StationExtremes>,
    Path((lat, long)): Path<(String, String)>,
) -> Result<Json<Vec<CombinedRecord>>, ApiError> {
    let records = service.nearby(&lat, &long).await?;
    Ok(Json(records))
}
