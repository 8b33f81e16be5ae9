use crate::distance::{distance_km_ceil, haversine_km};
use crate::stations::error::LocateStationError;
use crate::types::station::{Station, StationDirectory};
use crate::utils::{upstream_post, ASHRAE_VERSION};
use bon::bon;
use log::{info, warn};
use reqwest::{Client, Url};
use serde_json::Value;

const DEFAULT_STATION_LIMIT: usize = 10;

/// Looks up the stations closest to a coordinate through the station directory
/// service and annotates each with its distance from that coordinate.
#[derive(Debug, Clone)]
pub struct StationLocator {
    client: Client,
    url: Url,
    referer: String,
    station_limit: usize,
}

#[bon]
impl StationLocator {
    #[builder]
    pub fn new(
        client: Client,
        url: Url,
        #[builder(into)] referer: String,
        station_limit: Option<usize>,
    ) -> Self {
        Self {
            client,
            url,
            referer,
            station_limit: station_limit.unwrap_or(DEFAULT_STATION_LIMIT),
        }
    }

    /// Fetches the nearby stations for `lat`/`long`.
    ///
    /// The coordinates are forwarded to the directory exactly as given. They are
    /// only parsed as numbers afterwards, to compute each station's distance.
    /// Stations keep the order the directory returned them in.
    pub async fn locate(&self, lat: &str, long: &str) -> Result<Vec<Station>, LocateStationError> {
        let number = self.station_limit.to_string();
        let form = [
            ("lat", lat),
            ("long", long),
            ("number", number.as_str()),
            ("ashrae_version", ASHRAE_VERSION),
        ];

        info!(
            "Requesting up to {} stations near ({}, {}) from {}",
            self.station_limit, lat, long, self.url
        );
        let response = upstream_post(&self.client, &self.url, &self.referer)
            .form(&form)
            .send()
            .await
            .map_err(|e| LocateStationError::NetworkRequest(self.url.to_string(), e))?;

        let status = response.status();
        if !status.is_success() {
            // Error pages are still run through the decoder below
            warn!("Station directory {} answered with status {}", self.url, status);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LocateStationError::ResponseBody(self.url.to_string(), e))?;

        let stations = parse_stations(&body, lat, long)?;
        info!("Station directory returned {} stations", stations.len());
        Ok(stations)
    }
}

/// Decodes a directory response and attaches distances from the query point.
fn parse_stations(body: &[u8], lat: &str, long: &str) -> Result<Vec<Station>, LocateStationError> {
    let json: Value = serde_json::from_slice(body).map_err(LocateStationError::InvalidJson)?;
    let directory: StationDirectory =
        serde_json::from_value(json).map_err(LocateStationError::MalformedResponse)?;

    let query_lat = parse_coordinate("query", "latitude", lat)?;
    let query_lon = parse_coordinate("query", "longitude", long)?;

    directory
        .meteo_stations
        .into_iter()
        .map(|station| {
            let station_lat =
                parse_coordinate(&station.wmo, "latitude", &station.lat.to_string())?;
            let station_lon =
                parse_coordinate(&station.wmo, "longitude", &station.long.to_string())?;
            let raw_km = haversine_km(query_lat, query_lon, station_lat, station_lon);
            Ok(station.with_distance(distance_km_ceil(raw_km)))
        })
        .collect()
}

// "nan" and "inf" parse as f64 but have no distance
fn parse_coordinate(
    subject: &str,
    field: &'static str,
    value: &str,
) -> Result<f64, LocateStationError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|source| LocateStationError::InvalidCoordinate {
            subject: subject.to_string(),
            field,
            value: value.to_string(),
            source,
        })?;
    if !parsed.is_finite() {
        return Err(LocateStationError::NonFiniteCoordinate {
            subject: subject.to_string(),
            field,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}
