use crate::args::hints;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
    WatchErrorViewModel, WatchReloadViewModel,
};
use cardshelf_runtime::{CatalogSnapshot, Config};
use std::path::Path;

pub fn present_config(
    path: &Path,
    exists: bool,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config: config.clone(),
    };

    let mut result = CommandResultViewModel::new(content);
    if !exists {
        result = result
            .with_badge(StatusBadge::info("No config file, showing defaults"))
            .with_suggestion(
                Guidance::new("Create one pointing at your catalog")
                    .with_command(hints::cmd::CONFIG_INIT),
            );
    } else if config.catalog.source.is_none() {
        result = result.with_suggestion(Guidance::new(
            "Set [catalog] source so commands work without --source",
        ));
    }
    result
}

pub fn present_config_init(
    path: &Path,
    overwritten: bool,
    config: &Config,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
        config: config.clone(),
    };

    let label = if overwritten {
        format!("Overwrote {}", path.display())
    } else {
        format!("Wrote {}", path.display())
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(label))
        .with_suggestion(Guidance::new("Review the settings").with_command(hints::cmd::CONFIG_SHOW))
        .with_suggestion(Guidance::new("Browse the catalog").with_command(hints::cmd::LIST))
}

pub fn present_watch_reload(
    snapshot: &CatalogSnapshot,
    generation: u64,
    matched_count: usize,
) -> CommandResultViewModel<WatchReloadViewModel> {
    let content = WatchReloadViewModel {
        source: snapshot.source.display().to_string(),
        generation,
        loaded_at: snapshot.loaded_at,
        total_count: snapshot.records.len(),
        matched_count,
        warning_count: snapshot.warnings.len(),
    };
    CommandResultViewModel::new(content)
}

pub fn present_watch_error(
    source: &Path,
    message: String,
) -> CommandResultViewModel<WatchErrorViewModel> {
    CommandResultViewModel::new(WatchErrorViewModel {
        source: source.display().to_string(),
        message,
    })
    .with_badge(StatusBadge::warning("Reload failed, keeping previous catalog"))
}
