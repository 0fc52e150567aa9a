mod config;
mod dataset;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server config");
    let datasets = dataset::Datasets::load(&config).expect("dataset load failed");
    tracing::info!(
        crops = datasets.crops.len(),
        companies = datasets.companies.len(),
        max_results = config.max_results,
        "datasets loaded"
    );

    let app = routes::app(state::AppState::new(datasets, config.max_results));
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "opportunity finder listening");
    axum::serve(listener, app).await.expect("server failed");
}
