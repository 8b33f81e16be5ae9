//! In-process stand-ins for the upstream ASHRAE services.

use axum::http::header::{ACCEPT, REFERER};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::{Form, Router};
use reqwest::Url;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// What a mock upstream saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub form: HashMap<String, String>,
    pub accept: Option<String>,
    pub referer: Option<String>,
}

pub type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/", addr).parse().unwrap()
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr).parse().unwrap()
}

/// Accepts requests and never answers them.
pub fn hanging_router() -> Router {
    Router::new().fallback(|| async { std::future::pending::<&'static str>().await })
}

/// A URL whose server sends complete headers, then closes the connection
/// halfway through the announced body.
pub async fn truncated_body_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\n{\"meteo_stations\": [")
                .await;
            let _ = socket.shutdown().await;
            // Drain until the client gives up, so the close is a FIN, not a reset
            while matches!(socket.read(&mut buf).await, Ok(n) if n > 0) {}
        }
    });
    format!("http://{}/", addr).parse().unwrap()
}

/// Answers every request with the same status and body, recording each request.
pub fn recording_router(status: StatusCode, body: String) -> (Router, Recorded) {
    let recorded = Recorded::default();
    let seen = recorded.clone();
    let router = Router::new().fallback(
        move |headers: HeaderMap, Form(form): Form<HashMap<String, String>>| {
            let body = body.clone();
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(record(&headers, form));
                (status, body)
            }
        },
    );
    (router, recorded)
}

/// Answers with the canned response registered for the posted `wmo`, or 404.
pub fn extremes_router(responses: &[(&str, StatusCode, String)]) -> (Router, Recorded) {
    let responses: Arc<HashMap<String, (StatusCode, String)>> = Arc::new(
        responses
            .iter()
            .map(|(wmo, status, body)| (wmo.to_string(), (*status, body.clone())))
            .collect(),
    );
    let recorded = Recorded::default();
    let seen = recorded.clone();
    let router = Router::new().fallback(
        move |headers: HeaderMap, Form(form): Form<HashMap<String, String>>| {
            let responses = responses.clone();
            let seen = seen.clone();
            async move {
                let canned = form
                    .get("wmo")
                    .and_then(|wmo| responses.get(wmo))
                    .cloned()
                    .unwrap_or((StatusCode::NOT_FOUND, String::new()));
                seen.lock().unwrap().push(record(&headers, form));
                canned
            }
        },
    );
    (router, recorded)
}

/// An extreme-values payload in the shape the upstream service sends.
pub fn extremes_body(min: &str, max: &str) -> String {
    format!(
        r#"{{"meteo_stations":[{{"wmo":"x","extreme_annual_DB_mean_min":"{}","extreme_annual_DB_mean_max":"{}","extreme_annual_WS_1":"9.6"}}]}}"#,
        min, max
    )
}

fn record(headers: &HeaderMap, form: HashMap<String, String>) -> RecordedRequest {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    RecordedRequest {
        form,
        accept: header(ACCEPT),
        referer: header(REFERER),
    }
}
