use std::fmt;

use crate::presentation::formatters::style;
use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, CreateView, CsvExport, ViewMode, WatchErrorViewModel,
    WatchReloadViewModel,
};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self, mode })
    }
}

impl CsvExport for ConfigViewModel {}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.path);
        }

        writeln!(f, "# {}", self.data.path)?;
        match self.data.config.to_toml() {
            Ok(toml) => write!(f, "{}", toml),
            Err(e) => writeln!(f, "# could not render config: {}", e),
        }
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

impl CsvExport for ConfigInitViewModel {}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.config.catalog.source {
            Some(source) => writeln!(f, "Catalog source: {}", source.display()),
            None => writeln!(f, "Catalog source: (not set)"),
        }
    }
}

impl CreateView for WatchReloadViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(WatchReloadView { data: self, mode })
    }
}

impl CsvExport for WatchReloadViewModel {}

struct WatchReloadView<'a> {
    data: &'a WatchReloadViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for WatchReloadView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", data.matched_count);
        }

        write!(
            f,
            "{} #{} {} of {} records match",
            style::dimmed(&data.loaded_at.format("%H:%M:%S").to_string()),
            data.generation,
            data.matched_count,
            data.total_count
        )?;
        if data.warning_count > 0 {
            write!(f, " ({} warnings)", data.warning_count)?;
        }
        writeln!(f)
    }
}

impl CreateView for WatchErrorViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(WatchErrorView { data: self })
    }
}

impl CsvExport for WatchErrorViewModel {}

struct WatchErrorView<'a> {
    data: &'a WatchErrorViewModel,
}

impl<'a> fmt::Display for WatchErrorView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.data.source, self.data.message)
    }
}
