use checkmate_setup::{setup_database, Config};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so DEBUG can pick the level floor.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let level = if config.debug {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    if let Err(e) = setup_database(&config).await {
        eprintln!("Database setup failed: {}", e);
        std::process::exit(1);
    }
}
