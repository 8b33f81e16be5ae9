use std::env::VarError;
use std::time::Duration;

use anyhow::{anyhow, Context};
use reqwest::Url;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DIRECTORY_URL: &str = "https://ashrae-meteo.info/v2.0/request_places.php";
pub const DEFAULT_EXTREMES_URL: &str = "https://ashrae-meteo.info/v2.0/request_meteo_parametres.php";
pub const DEFAULT_REFERER: &str = "https://ashrae-meteo.info/v2.0/";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

pub const VARIABLES: [&str; 5] = [
    "LISTEN_ADDR",
    "DIRECTORY_URL",
    "EXTREMES_URL",
    "ASHRAE_REFERER",
    "UPSTREAM_TIMEOUT_SECS",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub directory_url: Url,
    pub extremes_url: Url,
    pub referer: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Builds the config from an arbitrary variable source. Unset variables
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let listen_addr = var_or(&lookup, "LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?;
        let directory_url = url(&lookup, "DIRECTORY_URL", DEFAULT_DIRECTORY_URL)?;
        let extremes_url = url(&lookup, "EXTREMES_URL", DEFAULT_EXTREMES_URL)?;
        let referer = var_or(&lookup, "ASHRAE_REFERER", DEFAULT_REFERER)?;

        let timeout = var_or(
            &lookup,
            "UPSTREAM_TIMEOUT_SECS",
            &DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string(),
        )?;
        let timeout_secs: u64 = timeout
            .trim()
            .parse()
            .with_context(|| format!("UPSTREAM_TIMEOUT_SECS '{timeout}' is not a whole number"))?;
        if timeout_secs == 0 {
            return Err(anyhow!("UPSTREAM_TIMEOUT_SECS must be at least 1"));
        }

        Ok(Self {
            listen_addr,
            directory_url,
            extremes_url,
            referer,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn log(&self) {
        log::info!("Listen address: {}", self.listen_addr);
        log::info!("Station directory: {}", self.directory_url);
        log::info!("Extreme values service: {}", self.extremes_url);
        log::info!("Referer: {}", self.referer);
        log::info!("Upstream timeout: {:?}", self.upstream_timeout);
    }
}

fn var_or<F>(lookup: &F, name: &str, default: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Ok(default.to_string()),
        Err(VarError::NotUnicode(_)) => Err(anyhow!("{name} value is not valid unicode")),
    }
}

fn url<F>(lookup: &F, name: &str, default: &str) -> anyhow::Result<Url>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let value = var_or(lookup, name, default)?;
    value
        .parse()
        .map_err(|e| anyhow!("{name}: {value} is not a valid url: {e}"))
}
