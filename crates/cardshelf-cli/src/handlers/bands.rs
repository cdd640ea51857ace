use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer, ViewMode};
use anyhow::Result;

pub fn handle(
    ctx: &ExecutionContext,
    source: Option<&str>,
    filters: &FilterArgs,
    format: OutputFormat,
    view_mode: ViewMode,
) -> Result<()> {
    let config = ctx.config()?;
    let snapshot = ctx.load_catalog(source)?;

    // A band filter would hide every other band
    let mut criteria = filters.apply_to(&config.filters);
    criteria.price_band = None;

    let matched = cardshelf_engine::apply(&snapshot.records, &criteria, &config.capabilities);
    let histogram = cardshelf_engine::band_histogram(&matched);

    let result =
        presenters::present_bands(&snapshot, &histogram, &criteria, &config.capabilities);

    let renderer = ConsoleRenderer::new(format, view_mode);
    renderer.render(result)
}
