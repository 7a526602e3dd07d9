use gcm_admin_cli::cli::Cli;
use gcm_admin_cli::{dispatch, ClientConfig, MonitoringConnector};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing/logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = Cli::parse_args().into_config();
    let connector = MonitoringConnector::new(ClientConfig::default());

    let mut stdout = std::io::stdout().lock();
    // Failures are already reported on stdout; the exit status stays 0.
    if let Err(err) = dispatch::run(&config, &connector, &mut stdout).await {
        debug!(error = %err, connection = err.is_connection(), "operation failed");
    }
}
