//! Service host for the snowdesk back office.
//!
//! Boots the data layer, restores any persisted session, and keeps the
//! home branch's message poll running until ctrl-c.

use dotenvy::dotenv;
use snowdesk::{
    config,
    core::{poller::MessagePoller, session::SessionManager},
    errors::Result,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::app::load_default_config()
        .inspect_err(|e| error!("Failed to load config.toml: {e}"))?;
    info!(
        "Configured as branch {} with {} branches total.",
        app_config.home_branch,
        app_config.branches.len()
    );

    // 4. Initialize the database
    let database_url = config::app::database_url();
    let db = config::database::create_connection(&database_url)
        .await
        .inspect(|_| info!("Database connected."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;

    // 5. Seed the admin account (skipped when env vars are absent)
    config::database::seed_admin_user(&db, &app_config.home_branch).await?;

    // 6. Attempt to restore the persisted session
    let sessions = SessionManager::new();
    match sessions.restore(&db).await? {
        Some(session) => info!("Restored session for {}.", session.username),
        None => info!("No persisted session; waiting for login."),
    }

    // 7. Poll for inter-branch messages until shutdown
    let (tx, mut rx) = mpsc::channel(16);
    let poller = MessagePoller::start(
        db,
        app_config.home_branch.clone(),
        Duration::from_secs(app_config.poll_interval_secs),
        tx,
    );
    let inbox = tokio::spawn(async move {
        while let Some(batch) = rx.recv().await {
            info!("{} unread message(s) for this branch.", batch.len());
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("Shutting down.");
    poller.stop();
    inbox.abort();

    Ok(())
}
