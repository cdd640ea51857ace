pub mod catalog;
pub mod common;
pub mod diagnostic;
pub mod layout;
pub mod result;
pub mod system;

pub use catalog::{
    AppliedFilters, BandRowViewModel, BandsViewModel, CatalogListViewModel, RecordViewModel,
};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use diagnostic::CheckViewModel;
pub use layout::{PlacedRecordViewModel, WindowViewModel};
pub use result::CommandResultViewModel;
pub use system::{ConfigInitViewModel, ConfigViewModel, WatchErrorViewModel, WatchReloadViewModel};

use std::fmt;

/// Bridge from a view model to its text layout for a given density.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}

/// Tabular export for `--format csv`. Content without a natural table
/// keeps the default and reports that CSV is unavailable.
pub trait CsvExport {
    fn write_csv<W: std::io::Write>(&self, _writer: &mut csv::Writer<W>) -> anyhow::Result<()> {
        anyhow::bail!("--format csv is not supported by this command")
    }
}
