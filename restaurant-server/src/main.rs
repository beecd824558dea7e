use restaurant_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Keep the appender guard alive for the whole process
    let _log_guard = init_logger(&config.logging);

    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "Restaurant server starting"
    );

    let state = ServerState::initialize(&config).await?;

    Server::with_state(config, state).run().await?;

    Ok(())
}
