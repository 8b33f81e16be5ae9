use crate::stations::error::LocateStationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationExtremesError {
    #[error(transparent)]
    LocateStation(#[from] LocateStationError),

    #[error("Failed to build upstream HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
