pub mod api;
pub mod config;
pub mod corpus;
pub mod middleware;
pub mod ranker;
pub mod server;

use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Dataset error: {0}")]
    Corpus(#[from] corpus::CorpusError),
    #[error("Vectorizer error: {0}")]
    Vectorize(#[from] ranker::VectorizeError),
    #[error("Server error: {0}")]
    Server(String),
}

pub async fn run(
    config_path: &str,
    dataset: Option<String>,
    debug_logs: bool,
) -> Result<(), ServerError> {
    let mut config = config::Config::from_file(config_path)?;
    if let Some(dataset) = dataset {
        config.dataset = dataset;
    }

    info!("Using config file: {}", config_path);
    if debug_logs {
        info!("Debug logging enabled");
    }

    // Fit everything before binding, a server without its vector space is useless.
    let corpus = corpus::Corpus::from_path(&config.dataset)?;
    let recommender = ranker::Recommender::build(corpus, config.recommend.limit)?;
    info!(
        "Indexed {} movies, {} terms",
        recommender.movie_count(),
        recommender.vocabulary_size()
    );

    let addr = config.listen_addr()?;
    let state = server::AppState::new(recommender);
    let app = server::build_router(state);

    if let Some((cert_path, key_path)) = config.tls_paths() {
        info!("Loading TLS certificate from {}", cert_path);
        info!("Loading TLS key from {}", key_path);

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

        info!("Serving HTTPS on {}", addr);

        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    } else {
        info!("Serving HTTP on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    }

    Ok(())
}
