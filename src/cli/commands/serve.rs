//! Serve command implementation

use crate::cli::CliError;
use crate::config::AppConfig;
use crate::mapping::SchemaMapper;
use crate::server::{AppState, serve};

/// Arguments for the `serve` command
pub struct ServeArgs {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Handle the `serve` command: run the HTTP endpoint until Ctrl-C
pub async fn handle_serve(args: &ServeArgs, config: &AppConfig) -> Result<(), CliError> {
    let mut server = config.server.clone();
    if let Some(host) = &args.host {
        server.host = host.clone();
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    let addr = server.socket_addr()?;

    let state = AppState::new(
        super::default_loader(config)?,
        config.sources.endpoint_template.clone(),
        SchemaMapper::with_config(config.mapping.clone()),
    );
    serve(addr, state).await?;
    Ok(())
}
