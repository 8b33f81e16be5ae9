pub mod config;
mod distance;
mod error;
mod extremes;
pub mod server;
mod station_extremes;
mod stations;
#[cfg(test)]
mod test_support;
mod types;
mod utils;

pub use config::Config;
pub use error::StationExtremesError;
pub use station_extremes::*;

pub use distance::{distance_km_ceil, haversine_km};
pub use extremes::fetcher::{parse_extreme_values, ExtremeValueFetcher};
pub use stations::locate_station::StationLocator;

pub use types::combined::CombinedRecord;
pub use types::extreme_values::ExtremeValues;
pub use types::station::Station;

pub use extremes::error::ExtremeValuesError;
pub use stations::error::LocateStationError;
