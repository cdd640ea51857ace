use super::common::{FilterArgs, SourceArgs, ViewModeArgs};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List catalog records matching the filters")]
    List {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print at most this many records
        #[arg(long)]
        limit: Option<usize>,

        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Compute the visible window of the filtered grid for a viewport")]
    Window {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Viewport width (defaults to the terminal width)
        #[arg(long)]
        width: Option<f64>,

        /// Viewport height (defaults to the terminal height)
        #[arg(long)]
        height: Option<f64>,

        /// Scroll offset from the top of the content
        #[arg(long, default_value = "0")]
        scroll: f64,

        #[arg(long)]
        item_width: Option<f64>,

        #[arg(long)]
        item_height: Option<f64>,

        #[arg(long)]
        gap: Option<f64>,

        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Report parse warnings and header mapping of a catalog")]
    Check {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Count records per price band")]
    Bands {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },

    #[command(about = "Reload the catalog whenever the file changes")]
    Watch {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Poll interval in milliseconds
        #[arg(long, default_value = "500")]
        interval_ms: u64,

        /// Exit after this many successful loads (initial load included)
        #[arg(long)]
        max_reloads: Option<usize>,
    },

    #[command(about = "Show or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default config file")]
    Init {
        /// Catalog file to record as [catalog] source
        #[arg(long)]
        source: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
