//! Taskbox command-line front end
//!
//! Talks to the Taskbox API through `taskbox-client` and keeps the signed-in
//! user in a session file under the data directory.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskbox_client::{ApiConfig, RestClient};
use taskbox_core::session::FileSessionStore;

use crate::cli::Cli;
use crate::commands::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskbox=info,taskbox_client=info,taskbox_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ApiConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config = config.with_base_url(api_url);
    }
    tracing::debug!("Using API at {}", config.base_url);

    let sessions = FileSessionStore::in_dir(&cli.data_dir).await?;
    let app = App::new(RestClient::new(config), sessions);
    app.run(cli.command).await
}
