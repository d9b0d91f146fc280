use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Anonymous campus identity for this device")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config directory (default: $CS_CONFIG_DIR, else ./.campus)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<PathBuf>,

    /// Registry base URL including /api (overrides client.base_url)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,

    /// Log at debug level to stderr
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,
}
