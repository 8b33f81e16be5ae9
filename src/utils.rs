use reqwest::header::{ACCEPT, REFERER};
use reqwest::{Client, RequestBuilder, Url};

/// ASHRAE design conditions edition requested from both upstream services.
pub const ASHRAE_VERSION: &str = "2021";

/// Starts a POST to one of the ASHRAE services with the headers they expect.
pub fn upstream_post(client: &Client, url: &Url, referer: &str) -> RequestBuilder {
    client
        .post(url.clone())
        .header(ACCEPT, "*/*")
        .header(REFERER, referer)
}
