use station_extremes::config::{Config, VARIABLES};
use station_extremes::server::router::router;
use station_extremes::StationExtremes;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check the environment variables ({}).",
            VARIABLES.join(", ")
        );
    })?;

    config.log();

    let service = StationExtremes::from_config(&config)?;

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    log::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, router(service)).await?;

    Ok(())
}
