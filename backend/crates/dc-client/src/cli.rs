use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dc")]
#[command(about = "DevConnect command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to client.server_url from the config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
