mod config;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env()?;
    if config.api.is_configured() {
        tracing::info!(base_url = %config.api.base_url, "movie API configured");
    } else {
        tracing::warn!("MOVIE_API_KEY not set; the movie list will fail to load");
    }

    let port = config.port;
    let app = routes::app(config.api)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "movie browser listening");
    axum::serve(listener, app).await?;
    Ok(())
}
