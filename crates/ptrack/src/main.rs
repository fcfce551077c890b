//! PatientTrack server
//!
//! Serves the patient record store over HTTP.

use clap::Parser;
use patienttrack_persistence::backends::{JsonFileBackend, JsonFileBackendConfig};
use patienttrack_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Opens the JSON data file named by the server configuration.
fn create_json_file_backend(config: &ServerConfig) -> anyhow::Result<JsonFileBackend> {
    info!(
        data_file = %config.data_file.display(),
        create = config.create_data_file,
        "Opening patient data file"
    );

    let backend_config = JsonFileBackendConfig {
        pretty: config.pretty_json,
        create_if_missing: config.create_data_file,
    };
    let backend = JsonFileBackend::with_config(&config.data_file, backend_config)?;

    if !backend.path().exists() {
        anyhow::bail!(
            "Data file {} does not exist. Pass --create-data-file to start with an empty one.",
            backend.path().display()
        );
    }

    Ok(backend)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        data_file = %config.data_file.display(),
        version = patienttrack_persistence::VERSION,
        "Starting PatientTrack server"
    );

    let backend = create_json_file_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}
