//! Main entry point: finds the stations near a coordinate and joins each one
//! with its ASHRAE extreme design temperatures.

use crate::config::Config;
use crate::error::StationExtremesError;
use crate::extremes::fetcher::ExtremeValueFetcher;
use crate::stations::locate_station::StationLocator;
use crate::types::combined::CombinedRecord;
use crate::types::extreme_values::ExtremeValues;
use crate::types::station::Station;
use log::info;
use reqwest::Client;
use std::collections::{HashMap, HashSet};

/// Combines a [`StationLocator`] and an [`ExtremeValueFetcher`].
///
/// Cheap to clone; clones share the underlying HTTP connection pool.
///
/// # Examples
///
/// ```no_run
/// # use station_extremes::{Config, StationExtremes, StationExtremesError};
/// # async fn run() -> Result<(), StationExtremesError> {
/// let config = Config::env().expect("valid environment");
/// let service = StationExtremes::from_config(&config)?;
/// let records = service.nearby("39.95", "-75.17").await?;
/// for record in &records {
///     println!(
///         "{} ({} km): min {:?}, max {:?}",
///         record.station.wmo,
///         record.station.distance.unwrap_or_default(),
///         record.extremes.extreme_annual_db_mean_min,
///         record.extremes.extreme_annual_db_mean_max,
///     );
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StationExtremes {
    locator: StationLocator,
    fetcher: ExtremeValueFetcher,
}

impl StationExtremes {
    pub fn new(locator: StationLocator, fetcher: ExtremeValueFetcher) -> Self {
        Self { locator, fetcher }
    }

    /// Builds both upstream clients from `config`, sharing one HTTP client that
    /// applies the configured timeout to every call.
    pub fn from_config(config: &Config) -> Result<Self, StationExtremesError> {
        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(StationExtremesError::HttpClient)?;

        let locator = StationLocator::builder()
            .client(client.clone())
            .url(config.directory_url.clone())
            .referer(config.referer.as_str())
            .build();
        let fetcher = ExtremeValueFetcher::builder()
            .client(client)
            .url(config.extremes_url.clone())
            .referer(config.referer.as_str())
            .build();

        Ok(Self::new(locator, fetcher))
    }

    /// Returns the stations near `lat`/`long` that have extreme values, in the
    /// order the station directory listed them.
    ///
    /// Extreme values are requested one station at a time. A station whose
    /// request fails is left out of the result; only a failing station lookup
    /// fails the whole call.
    pub async fn nearby(
        &self,
        lat: &str,
        long: &str,
    ) -> Result<Vec<CombinedRecord>, StationExtremesError> {
        let stations = self.locator.locate(lat, long).await?;

        let mut seen = HashSet::new();
        let mut results = Vec::with_capacity(stations.len());
        for station in &stations {
            if !seen.insert(station.wmo.as_str()) {
                continue;
            }
            if let Some(values) = self.fetcher.fetch(&station.wmo).await {
                results.push(values);
            }
        }

        let records = join_records(stations, results);
        info!(
            "Returning {} stations with extreme values near ({}, {})",
            records.len(),
            lat,
            long
        );
        Ok(records)
    }
}

/// Inner join of stations and extreme values on the station id. Keeps the
/// station order and emits each id at most once.
fn join_records(stations: Vec<Station>, results: Vec<ExtremeValues>) -> Vec<CombinedRecord> {
    let mut by_id: HashMap<String, ExtremeValues> = results
        .into_iter()
        .map(|values| (values.station_id.clone(), values))
        .collect();

    stations
        .into_iter()
        .filter_map(|station| {
            let extremes = by_id.remove(&station.wmo)?;
            Some(CombinedRecord { station, extremes })
        })
        .collect()
}
