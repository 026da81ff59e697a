/**
 * Fakecloud Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the Axum app.
 */

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let config = fakecloud::backend::server::load_config()?;

    // RUST_LOG wins over the configured level
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[Startup] Log filter: {}", env_filter);

    let port = config.port;
    let app = fakecloud::backend::server::create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("[Startup] Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    eprintln!("Server requires the 'server' feature to be enabled.");
    eprintln!("Run with: cargo run --bin fakecloud-server --features server");
    std::process::exit(1);
}
