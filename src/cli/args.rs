//! CLI argument definitions using clap
//!
//! Commands:
//! - gigboard serve [--host <host>] [--port <port>] [--cors-origin <origin>]... [--schema <schema>]
//!
//! Running `gigboard` with no subcommand serves with defaults.

use clap::{Parser, Subcommand, ValueEnum};

use crate::requests::SchemaVariant;

/// gigboard - submit and list gig requests over HTTP
#[derive(Parser, Debug)]
#[command(name = "gigboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP API
    Serve(ServeArgs),
}

#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (falls back to $PORT, then 8080)
    #[arg(long)]
    pub port: Option<u16>,

    /// Allowed CORS origin; repeat for several. Any origin if omitted.
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,

    /// Fields a new request must carry
    #[arg(long, value_enum)]
    pub schema: Option<SchemaArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaArg {
    /// gigTitle, client, clientEmail
    Basic,
    /// basic plus supplierEmail
    SupplierAware,
}

impl From<SchemaArg> for SchemaVariant {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Basic => SchemaVariant::Basic,
            SchemaArg::SupplierAware => SchemaVariant::SupplierAware,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The subcommand to run, serving with defaults when none was given.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}
