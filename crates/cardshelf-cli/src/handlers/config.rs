use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer, ViewMode};
use anyhow::{Result, bail};
use cardshelf_runtime::{Config, expand_tilde};

pub fn show(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let exists = ctx.config_path().exists();
    let config = ctx.config()?;

    let result = presenters::present_config(ctx.config_path(), exists, config);

    let renderer = ConsoleRenderer::new(format, ViewMode::default());
    renderer.render(result)
}

pub fn init(
    ctx: &ExecutionContext,
    source: Option<&str>,
    force: bool,
    format: OutputFormat,
) -> Result<()> {
    let path = ctx.config_path();
    let exists = path.exists();
    if exists && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let mut config = Config::default();
    if let Some(source) = source {
        let source = expand_tilde(source);
        // Absolute so the config works from any directory
        config.catalog.source = Some(std::path::absolute(&source).unwrap_or(source));
    }
    config.save_to(path)?;
    tracing::info!(path = %path.display(), "wrote config file");

    let result = presenters::present_config_init(path, exists, &config);

    let renderer = ConsoleRenderer::new(format, ViewMode::default());
    renderer.render(result)
}
