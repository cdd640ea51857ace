use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer, ViewMode};
use anyhow::Result;
use cardshelf_runtime::CatalogSession;
use cardshelf_types::{ItemFootprint, Viewport};

/// Approximate pixel size of one terminal cell, used when the viewport
/// is taken from the terminal.
const CELL_WIDTH: f64 = 8.0;
const CELL_HEIGHT: f64 = 16.0;

/// Viewport used when neither flags nor a terminal give one.
const FALLBACK_VIEWPORT: (f64, f64) = (800.0, 600.0);

/// Geometry flags; unset values come from the config or the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geometry {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub scroll: f64,
    pub item_width: Option<f64>,
    pub item_height: Option<f64>,
    pub gap: Option<f64>,
}

impl Geometry {
    pub fn footprint(&self, configured: ItemFootprint) -> ItemFootprint {
        ItemFootprint {
            width: self.item_width.unwrap_or(configured.width),
            height: self.item_height.unwrap_or(configured.height),
            gap: self.gap.unwrap_or(configured.gap),
        }
    }

    pub fn viewport(&self, terminal: Option<(f64, f64)>) -> Viewport {
        let (default_width, default_height) = terminal.unwrap_or(FALLBACK_VIEWPORT);
        Viewport {
            width: self.width.unwrap_or(default_width),
            height: self.height.unwrap_or(default_height),
            scroll_offset: self.scroll,
        }
    }
}

fn terminal_viewport() -> Option<(f64, f64)> {
    terminal_size::terminal_size().map(|(terminal_size::Width(w), terminal_size::Height(h))| {
        (f64::from(w) * CELL_WIDTH, f64::from(h) * CELL_HEIGHT)
    })
}

pub fn handle(
    ctx: &ExecutionContext,
    source: Option<&str>,
    filters: &FilterArgs,
    geometry: Geometry,
    format: OutputFormat,
    view_mode: ViewMode,
) -> Result<()> {
    let config = ctx.config()?;
    let snapshot = ctx.load_catalog(source)?;
    let source_label = snapshot.source.display().to_string();

    let footprint = geometry.footprint(config.layout);
    let viewport = geometry.viewport(terminal_viewport());

    let mut session = CatalogSession::new(
        config.capabilities.clone(),
        filters.apply_to(&config.filters),
    )
    .with_footprint(footprint)
    .with_viewport(viewport);
    session.replace_snapshot(snapshot);

    let window = session.window();
    let placements = session.placements();
    let matched = session.filtered().to_vec();

    tracing::debug!(
        start = window.start_index,
        end = window.end_index,
        columns = window.column_count,
        "computed window"
    );

    let result = presenters::present_window(
        source_label,
        &matched,
        viewport,
        footprint,
        window,
        placements,
        &config.capabilities,
    );

    let renderer = ConsoleRenderer::new(format, view_mode);
    renderer.render(result)
}
