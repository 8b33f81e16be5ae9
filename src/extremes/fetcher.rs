use crate::extremes::error::ExtremeValuesError;
use crate::types::extreme_values::ExtremeValues;
use crate::utils::{upstream_post, ASHRAE_VERSION};
use bon::bon;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode, Url};

const UNIT_SYSTEM: &str = "SI";

// The upstream body is not reliably valid JSON, so the two values are picked
// out of the raw text.
static MEAN_MIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| extreme_value_pattern("extreme_annual_DB_mean_min"));
static MEAN_MAX_PATTERN: Lazy<Regex> =
    Lazy::new(|| extreme_value_pattern("extreme_annual_DB_mean_max"));

fn extreme_value_pattern(key: &str) -> Regex {
    Regex::new(&format!(r#""{}"\s*:\s*"(-?[\d.]+)""#, regex::escape(key)))
        .expect("extreme value pattern is a valid regex")
}

/// Fetches ASHRAE extreme design temperatures for single stations.
#[derive(Debug, Clone)]
pub struct ExtremeValueFetcher {
    client: Client,
    url: Url,
    referer: String,
}

#[bon]
impl ExtremeValueFetcher {
    #[builder]
    pub fn new(client: Client, url: Url, #[builder(into)] referer: String) -> Self {
        Self {
            client,
            url,
            referer,
        }
    }

    /// Returns the extreme values for `station_id`, or `None` when the upstream
    /// call fails in any way. Failures are logged and never propagated, so one
    /// bad station cannot sink a whole batch.
    pub async fn fetch(&self, station_id: &str) -> Option<ExtremeValues> {
        match self.try_fetch(station_id).await {
            Ok(values) => Some(values),
            Err(e) => {
                warn!("Skipping station {}: {}", station_id, e);
                None
            }
        }
    }

    async fn try_fetch(&self, station_id: &str) -> Result<ExtremeValues, ExtremeValuesError> {
        let form = [
            ("wmo", station_id),
            ("ashrae_version", ASHRAE_VERSION),
            ("si_ip", UNIT_SYSTEM),
        ];

        info!("Requesting extreme values for station {}", station_id);
        let response = upstream_post(&self.client, &self.url, &self.referer)
            .form(&form)
            .send()
            .await
            .map_err(|source| ExtremeValuesError::NetworkRequest {
                station: station_id.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ExtremeValuesError::HttpStatus {
                station: station_id.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ExtremeValuesError::ResponseBody {
                station: station_id.to_string(),
                source,
            })?;

        Ok(parse_extreme_values(station_id, &body))
    }
}

/// Extracts the two design values from a raw response body. Each one is the
/// first match of its pattern, or `None` if the key is missing.
pub fn parse_extreme_values(station_id: &str, body: &str) -> ExtremeValues {
    ExtremeValues {
        station_id: station_id.to_string(),
        extreme_annual_db_mean_min: first_capture(&MEAN_MIN_PATTERN, body),
        extreme_annual_db_mean_max: first_capture(&MEAN_MAX_PATTERN, body),
    }
}

fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}
