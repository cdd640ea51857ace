// NOTE: Command Organization
//
// Every catalog command shares the same pipeline (load -> filter -> present),
// so the commands stay flat. Only `config` has subcommands.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cardshelf")]
#[command(about = "Browse and filter a spreadsheet-exported trading card catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $CARDSHELF_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
