use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtremeValuesError {
    #[error("Network request failed for station {station}: {source}")]
    NetworkRequest {
        station: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Extreme values request for station {station} failed with status {status}")]
    HttpStatus {
        station: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read extreme values response for station {station}: {source}")]
    ResponseBody {
        station: String,
        #[source]
        source: reqwest::Error,
    },
}
