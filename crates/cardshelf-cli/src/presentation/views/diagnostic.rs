use std::fmt;
use std::io::Write;

use crate::presentation::formatters::style;
use crate::presentation::view_models::{CheckViewModel, CreateView, CsvExport, ViewMode};

impl CreateView for CheckViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CheckView { data: self, mode })
    }
}

struct CheckView<'a> {
    data: &'a CheckViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for CheckView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;

        if self.mode == ViewMode::Minimal {
            for warning in &data.warnings {
                writeln!(f, "{}", warning)?;
            }
            return Ok(());
        }

        writeln!(f, "Source:  {}", data.source)?;
        writeln!(f, "Records: {}", data.record_count)?;

        let recognized: Vec<&str> = data.header.recognized.iter().map(|c| c.header()).collect();
        writeln!(f, "Columns: {}", recognized.join(", "))?;
        if !data.header.ignored.is_empty() {
            writeln!(f, "Ignored: {}", data.header.ignored.join(", "))?;
        }
        if self.mode == ViewMode::Verbose && !data.header.missing.is_empty() {
            let missing: Vec<&str> = data.header.missing.iter().map(|c| c.header()).collect();
            writeln!(f, "Missing: {}", missing.join(", "))?;
        }

        if data.records_without_image > 0 {
            writeln!(f, "Without image: {}", data.records_without_image)?;
        }
        if !data.unknown_statuses.is_empty() {
            writeln!(f, "Non-standard statuses: {}", data.unknown_statuses.join(", "))?;
        }

        if !data.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", style::bold("Warnings:"))?;
            let shown = if self.mode == ViewMode::Compact {
                data.warnings.len().min(10)
            } else {
                data.warnings.len()
            };
            for warning in &data.warnings[..shown] {
                writeln!(f, "  {}", warning)?;
            }
            if shown < data.warnings.len() {
                writeln!(f, "  ... and {} more", data.warnings.len() - shown)?;
            }
        }

        Ok(())
    }
}

impl CsvExport for CheckViewModel {
    fn write_csv<W: Write>(&self, writer: &mut csv::Writer<W>) -> anyhow::Result<()> {
        writer.write_record(["row", "message"])?;
        for warning in &self.warnings {
            writer.write_record([warning.row().to_string(), warning.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }
}
