use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stride_db::{config::AppConfig, database::Db};

fn setup_logger(config: &AppConfig) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    // Load config and setup logger
    let config = match AppConfig::load("config/db.toml") {
        Ok(x) => x,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    setup_logger(&config);

    let db = match Db::new(&config.database_url, config.pool_size).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to the database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = db.run_migrations().await {
        error!("Failed to apply schema migrations: {e}");
        std::process::exit(1);
    }

    info!("schema migrations applied");

    if let Err(e) = db.run_seeders().await {
        error!("Failed to apply seed fixtures: {e}");
        std::process::exit(1);
    }

    info!("seed fixtures applied");
}
