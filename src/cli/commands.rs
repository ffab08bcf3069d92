//! CLI command implementations

use crate::http_server::{HttpServer, HttpServerConfig, PORT_ENV};
use crate::observability::{log_event_with_fields, Event};

use super::args::{Cli, Command, ServeArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command_or_default())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let result = match cmd {
        Command::Serve(args) => serve(&args),
    };

    if let Err(err) = &result {
        let reason = err.to_string();
        log_event_with_fields(
            Event::StartupFailed,
            &[("code", err.code()), ("reason", reason.as_str())],
        );
    }
    result
}

/// Resolve configuration and serve until interrupted.
pub fn serve(args: &ServeArgs) -> CliResult<()> {
    let env_port = std::env::var(PORT_ENV).ok();
    let config = resolve_config(args, env_port.as_deref())?;
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Startup(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Startup(format!("HTTP server failed: {}", e)))
    })
}

/// Builds the server configuration.
///
/// Flags win over the environment; the environment wins over defaults.
/// An empty `PORT` is treated as unset.
pub fn resolve_config(args: &ServeArgs, env_port: Option<&str>) -> CliResult<HttpServerConfig> {
    let mut config = HttpServerConfig::default();

    if let Some(host) = &args.host {
        config.host = host.clone();
    }

    config.port = match (args.port, env_port.map(str::trim)) {
        (Some(port), _) => port,
        (None, Some(raw)) if !raw.is_empty() => raw.parse().map_err(|_| {
            CliError::Config(format!("{} is not a valid port: {:?}", PORT_ENV, raw))
        })?,
        _ => config.port,
    };

    config.cors_origins = args.cors_origins.clone();

    if let Some(schema) = args.schema {
        config.schema = schema.into();
    }

    Ok(config)
}
