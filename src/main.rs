//! connect-docs CLI binary

use anyhow::Result;

use connect_docs::cli::CliApp;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "connect_docs=info".into()),
        )
        .init();

    let matches = CliApp::app().get_matches();

    CliApp::run(&matches).await
}
