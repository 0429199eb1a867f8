//! CamTelligence dashboard binary.
//!
//! This binary is the composition root that assembles:
//! 1. Event source (HTTP client for the detection backend)
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal UI (default)
//!
//! # Examples
//!
//! ```bash
//! API_BASE_URL=http://nvr.local:8000 cargo run -p camtel-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use camtel_api::{ApiConfig, EventClient};
    use camtel_client::Client;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};

    // 1. Load configuration from environment
    let api_config = ApiConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (file only, the terminal belongs to the UI)
    let _log_guard = logging::setup_logging()?;

    tracing::info!("Starting CamTelligence dashboard");
    tracing::info!("Backend: {}", api_config.trimmed_base_url());
    tracing::info!(
        "Live refresh: persons {:?}, vehicles {:?}",
        frontend_config.polling.persons_interval,
        frontend_config.polling.vehicles_interval
    );

    // 3. Build event source and frontend (independent layers)
    let source = EventClient::new(&api_config);
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 4. Build and run
    let client = Client::builder().source(source).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
