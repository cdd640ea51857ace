use std::fmt;
use std::io::Write;

use crate::presentation::formatters::{number, style, text};
use crate::presentation::view_models::{CreateView, CsvExport, ViewMode, WindowViewModel};

impl CreateView for WindowViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(WindowView { data: self, mode })
    }
}

struct WindowView<'a> {
    data: &'a WindowViewModel,
    mode: ViewMode,
}

impl<'a> WindowView<'a> {
    fn write_geometry(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let w = &self.data.window;
        let range = w.clamped_range(self.data.matched_count);

        writeln!(
            f,
            "Items {}..{} of {} ({} columns, rows {}..{} of {})",
            range.start, range.end, self.data.matched_count, w.column_count, w.start_row,
            w.end_row, w.row_count
        )?;
        writeln!(
            f,
            "Content height {}, row stride {}, column stride {}",
            number::format_extent(w.total_extent),
            number::format_extent(w.row_stride),
            number::format_extent(w.column_stride)
        )?;

        if self.mode == ViewMode::Verbose {
            let v = &self.data.viewport;
            let fp = &self.data.footprint;
            writeln!(
                f,
                "Viewport {} x {} at offset {}, item {} x {} with gap {}",
                number::format_extent(v.width),
                number::format_extent(v.height),
                number::format_extent(v.scroll_offset),
                number::format_extent(fp.width),
                number::format_extent(fp.height),
                number::format_extent(fp.gap)
            )?;
            writeln!(f, "Source: {}", self.data.source)?;
        }
        Ok(())
    }

    fn write_grid(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut current_row = None;
        for item in &self.data.items {
            if current_row != Some(item.placement.row) {
                current_row = Some(item.placement.row);
                writeln!(
                    f,
                    "{}",
                    style::dimmed(&format!(
                        "row {} @ {}",
                        item.placement.row,
                        number::format_extent(item.placement.top)
                    ))
                )?;
            }
            writeln!(
                f,
                "  [{:>4}] {:<28} {:>12}  {}",
                item.placement.index,
                text::truncate(&text::single_line(&item.record.name), 28),
                number::format_price(item.record.price),
                text::or_dash(&item.record.status)
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for WindowView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => {
                let range = self.data.window.clamped_range(self.data.matched_count);
                writeln!(f, "{} {}", range.start, range.end)
            }
            ViewMode::Compact => self.write_geometry(f),
            ViewMode::Standard | ViewMode::Verbose => {
                self.write_geometry(f)?;
                if !self.data.items.is_empty() {
                    writeln!(f)?;
                    self.write_grid(f)?;
                }
                Ok(())
            }
        }
    }
}

impl CsvExport for WindowViewModel {
    fn write_csv<W: Write>(&self, writer: &mut csv::Writer<W>) -> anyhow::Result<()> {
        writer.write_record([
            "index", "row", "column", "top", "left", "name", "price_bnd", "status",
        ])?;
        for item in &self.items {
            let p = &item.placement;
            writer.write_record([
                p.index.to_string(),
                p.row.to_string(),
                p.column.to_string(),
                p.top.to_string(),
                p.left.to_string(),
                item.record.name.clone(),
                item.record.price.to_string(),
                item.record.status.clone(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
