use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer, ViewMode};
use anyhow::Result;

pub fn handle(
    ctx: &ExecutionContext,
    source: Option<&str>,
    format: OutputFormat,
    view_mode: ViewMode,
) -> Result<()> {
    // MissingHeader propagates and exits non-zero
    let snapshot = ctx.load_catalog(source)?;

    let result = presenters::present_check(&snapshot);

    let renderer = ConsoleRenderer::new(format, view_mode);
    renderer.render(result)
}
