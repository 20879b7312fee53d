//! Login Gateway
//!
//! Login server binary. Configuration comes from `LOGIN_*` environment
//! variables; accounts are seeded from `LOGIN_ACCOUNTS_FILE`.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use login_gateway::{LoginConfig, LoginServer, LoginService, MemoryStore, ServerConfig, VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Login Gateway v{}", VERSION);

    let server_config = ServerConfig::from_env().context("invalid server configuration")?;
    let login_config = LoginConfig::from_env().context("invalid login configuration")?;
    info!(
        "Worlds: {}, channels per world: {}, channel server: {}",
        login_config.world_count, login_config.channels_per_world, login_config.channel_server
    );

    let store = match std::env::var("LOGIN_ACCOUNTS_FILE") {
        Ok(path) => {
            let store = MemoryStore::from_json_file(&path)
                .with_context(|| format!("loading accounts from {}", path))?;
            info!("Loaded {} accounts from {}", store.account_count().await, path);
            store
        }
        Err(_) => {
            warn!("LOGIN_ACCOUNTS_FILE not set; starting with no accounts");
            MemoryStore::new()
        }
    };

    let service = LoginService::new(Arc::new(store), login_config);
    let server = Arc::new(LoginServer::new(server_config, service));

    let signal_server = server.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, shutting down");
            signal_server.shutdown();
        }
    });

    server.run().await?;
    info!("Login server stopped");
    Ok(())
}
