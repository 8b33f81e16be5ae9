use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateStationError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    // The one failure callers see verbatim
    #[error("Failed to decode JSON from response")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Station directory response has an unexpected shape")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Invalid {field} '{value}' for {subject}")]
    InvalidCoordinate {
        subject: String,
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Non-finite {field} '{value}' for {subject}")]
    NonFiniteCoordinate {
        subject: String,
        field: &'static str,
        value: String,
    },
}
