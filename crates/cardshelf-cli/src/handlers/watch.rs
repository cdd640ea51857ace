use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer, ViewMode};
use anyhow::{Result, bail};
use cardshelf_runtime::{CatalogEvent, CatalogSession, CatalogWatcher, STDIN_SOURCE};
use std::path::Path;
use std::time::Duration;

pub fn handle(
    ctx: &ExecutionContext,
    source: Option<&str>,
    filters: &FilterArgs,
    interval_ms: u64,
    max_reloads: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let config = ctx.config()?;
    let source = ctx.catalog_source(source)?;
    if source == Path::new(STDIN_SOURCE) {
        bail!("Cannot watch standard input; pass a file with --source");
    }

    let mut session = CatalogSession::new(
        config.capabilities.clone(),
        filters.apply_to(&config.filters),
    );

    let watcher =
        CatalogWatcher::with_poll_interval(source.clone(), Duration::from_millis(interval_ms))?;
    let renderer = ConsoleRenderer::new(format, ViewMode::default());

    eprintln!("Watching {} (Ctrl+C to stop)", source.display());

    let mut reloads = 0;
    while let Ok(event) = watcher.receiver().recv() {
        match event {
            CatalogEvent::Reloaded(snapshot) => {
                let generation = session.begin_load();
                session.install(generation, *snapshot);

                let matched_count = session.filtered().len();
                if let Some(snapshot) = session.snapshot() {
                    renderer.render(presenters::present_watch_reload(
                        snapshot,
                        generation.value(),
                        matched_count,
                    ))?;
                }

                reloads += 1;
                if max_reloads.is_some_and(|max| reloads >= max) {
                    break;
                }
            }
            CatalogEvent::Error(message) => {
                renderer.render(presenters::present_watch_error(&source, message))?;
            }
        }
    }

    Ok(())
}
