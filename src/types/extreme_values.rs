use serde::Serialize;

/// ASHRAE extreme annual dry-bulb design temperatures for one station.
///
/// Values are kept as the decimal strings the upstream service returned.
/// Either may be `None` when the upstream payload did not contain it.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ExtremeValues {
    /// The WMO code the values were requested for.
    pub station_id: String,
    /// Mean of the extreme annual minimum dry-bulb temperature (°C).
    #[serde(rename = "extreme_annual_DB_mean_min")]
    pub extreme_annual_db_mean_min: Option<String>,
    /// Mean of the extreme annual maximum dry-bulb temperature (°C).
    #[serde(rename = "extreme_annual_DB_mean_max")]
    pub extreme_annual_db_mean_max: Option<String>,
}
