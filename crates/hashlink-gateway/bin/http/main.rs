mod cli;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use hashlink_core::Repository;
use hashlink_gateway::{App, AppState};
use hashlink_generator::{ChecksumGenerator, Crc32, HashId, HashIdConfig};
use hashlink_redirector::RedirectorService;
use hashlink_shortener::ShortenerService;
use hashlink_storage::{InMemoryRepository, KvRepository, KvStore};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;
    hashlink_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        scheme = %config.scheme,
        storage_backend = %config.storage,
        "starting hashlink server"
    );

    let hash_id = HashId::new(
        HashIdConfig::builder()
            .salt(config.salt.clone())
            .min_length(config.min_length)
            .build(),
    )?;
    info!(min_length = hash_id.min_length(), "configured short code encoder");
    let generator = ChecksumGenerator::new(Crc32, hash_id);

    match config.storage {
        StorageBackendArg::File => {
            let store = KvStore::open(&config.db_path)?;
            info!(
                db_path = %store.path().display(),
                db_bucket = %config.db_bucket,
                "opened database"
            );
            let repository = KvRepository::new(store, config.db_bucket.as_str())?;
            run_server(&config, Arc::new(repository), generator).await?;
        }
        StorageBackendArg::InMemory => {
            run_server(&config, Arc::new(InMemoryRepository::new()), generator).await?;
        }
    }

    info!("hashlink server stopped");
    Ok(())
}

async fn run_server<R: Repository>(
    config: &CLI,
    repository: Arc<R>,
    generator: ChecksumGenerator<Crc32>,
) -> std::io::Result<()> {
    let shortener = ShortenerService::new(Arc::clone(&repository), generator);
    let redirector = RedirectorService::new(repository);
    let state = AppState::new(
        Arc::new(shortener),
        Arc::new(redirector),
        config.scheme.to_string(),
        config.listen_addr.to_string(),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            warn!(error = %err, "cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
