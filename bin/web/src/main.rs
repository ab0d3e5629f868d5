#[cfg(feature = "serve")]
#[tokio::main]
async fn main() {
    use daily_verse_web::{config::ServeConfig, serve};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServeConfig::from_env().expect("failed to load configuration");
    tracing::info!(site_root = %config.site_root.display(), "Loaded configuration");

    let app = serve::router(&config.site_root);

    let listener = tokio::net::TcpListener::bind(&config.site_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.site_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(serve::shutdown_signal())
        .await
        .expect("server error");
}

#[cfg(all(feature = "csr", not(feature = "serve")))]
fn main() {
    daily_verse_web::mount();
}

#[cfg(not(any(feature = "csr", feature = "serve")))]
fn main() {
    // Build with `csr` for the browser bundle or `serve` for the static server.
}
