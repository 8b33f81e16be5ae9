pub mod router;
pub mod types;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::StationExtremesError;
use crate::stations::error::LocateStationError;

/// A request failure, rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(StationExtremesError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            StationExtremesError::LocateStation(
                LocateStationError::NetworkRequest(..) | LocateStationError::ResponseBody(..),
            ) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StationExtremesError> for ApiError {
    fn from(value: StationExtremesError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        log::error!("{}: {:?}", status, self.0);
        (status, Json(types::ErrorResponse::new(self.0.to_string()))).into_response()
    }
}

impl types::ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
