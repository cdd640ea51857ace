use super::args::{Cli, Commands, ConfigCommand, LogLevel};
use super::handlers;
use crate::context::ExecutionContext;
use crate::presentation::{OutputFormat, ViewMode};
use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let format = OutputFormat::from(cli.format);
    let ctx = ExecutionContext::new(cli.config.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&ctx);
        return Ok(());
    };

    match command {
        Commands::List {
            source,
            filters,
            limit,
            view,
        } => handlers::list::handle(
            &ctx,
            source.source.as_deref(),
            &filters,
            limit,
            format,
            view.resolve(),
        ),

        Commands::Window {
            source,
            filters,
            width,
            height,
            scroll,
            item_width,
            item_height,
            gap,
            view,
        } => handlers::window::handle(
            &ctx,
            source.source.as_deref(),
            &filters,
            handlers::window::Geometry {
                width,
                height,
                scroll,
                item_width,
                item_height,
                gap,
            },
            format,
            view.resolve(),
        ),

        Commands::Check { source, view } => {
            handlers::check::handle(&ctx, source.source.as_deref(), format, view.resolve())
        }

        Commands::Bands { source, filters } => handlers::bands::handle(
            &ctx,
            source.source.as_deref(),
            &filters,
            format,
            ViewMode::default(),
        ),

        Commands::Watch {
            source,
            filters,
            interval_ms,
            max_reloads,
        } => handlers::watch::handle(
            &ctx,
            source.source.as_deref(),
            &filters,
            interval_ms,
            max_reloads,
            format,
        ),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx, format),
            ConfigCommand::Init { source, force } => {
                handlers::config::init(&ctx, source.as_deref(), force, format)
            }
        },
    }
}

/// Log to stderr so stdout stays parseable. RUST_LOG wins over --log-level.
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn show_guidance(ctx: &ExecutionContext) {
    println!("cardshelf - browse a trading card catalog exported from a spreadsheet\n");

    let configured = ctx
        .config()
        .map(|config| config.catalog.source.is_some())
        .unwrap_or(false);

    if configured {
        println!("Quick commands:");
        println!("  cardshelf list                     # Everything in the catalog");
        println!("  cardshelf list --status AVAILABLE  # What can be bought");
        println!("  cardshelf bands                    # Records per price band");
        println!("  cardshelf check                    # Parse warnings and columns\n");
    } else {
        println!("Get started:");
        println!("  cardshelf config init --source <PATH>\n");
        println!("Or point any command at a file:");
        println!("  cardshelf list --source inventory.csv\n");
    }

    println!("For more commands:");
    println!("  cardshelf --help");
}
