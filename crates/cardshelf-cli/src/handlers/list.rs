use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer, ViewMode};
use anyhow::Result;

pub fn handle(
    ctx: &ExecutionContext,
    source: Option<&str>,
    filters: &FilterArgs,
    limit: Option<usize>,
    format: OutputFormat,
    view_mode: ViewMode,
) -> Result<()> {
    let config = ctx.config()?;
    let snapshot = ctx.load_catalog(source)?;
    let criteria = filters.apply_to(&config.filters);

    let matched = cardshelf_engine::apply(&snapshot.records, &criteria, &config.capabilities);

    let result = presenters::present_catalog_list(
        &snapshot,
        &matched,
        &criteria,
        &config.capabilities,
        limit,
    );

    let renderer = ConsoleRenderer::new(format, view_mode);
    renderer.render(result)
}
