use std::fmt;
use std::io::Write;

use crate::presentation::formatters::{number, style, text};
use crate::presentation::view_models::{
    AppliedFilters, BandsViewModel, CatalogListViewModel, CreateView, CsvExport, RecordViewModel,
    ViewMode,
};
use cardshelf_types::{Field, PriceBadge};

// --------------------------------------------------------
// Catalog List View
// --------------------------------------------------------

impl CreateView for CatalogListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogListView { data: self, mode })
    }
}

struct CatalogListView<'a> {
    data: &'a CatalogListViewModel,
    mode: ViewMode,
}

impl<'a> CatalogListView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for record in &self.data.records {
            writeln!(f, "{}", record.name)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.records.is_empty() {
            writeln!(f, "No records found.")?;
            return Ok(());
        }

        for record in &self.data.records {
            let mut line = record.name.clone();
            if !record.set.is_empty() {
                line.push_str(&format!(" · {}", record.set));
                if !record.number.is_empty() {
                    line.push_str(&format!(" #{}", record.number));
                }
            }
            if !record.rarity.is_empty() {
                line.push_str(&format!(" · {}", record.rarity));
            }
            line.push_str(&format!(" · {}", price_with_badge(record)));
            writeln!(f, "{} · {}", line, text::or_dash(&record.status))?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        if self.data.records.is_empty() {
            writeln!(f, "No records found.")?;
            write_filters(f, &self.data.applied_filters)?;
            return Ok(());
        }

        let show_quantity = self.data.records.iter().any(|r| r.quantity.is_some());

        let mut header = format!(
            "{:<28} {:<18} {:<6} {:<14} {:>12} {:<9} {:<10}",
            "NAME", "SET", "NO.", "RARITY", "PRICE", "BADGE", "STATUS"
        );
        if verbose {
            header.push_str(&format!(" {:<10} {:<6}", "CATEGORY", "COND"));
            if show_quantity {
                header.push_str(&format!(" {:>5}", "QTY"));
            }
            header.push_str(" IMG");
        }
        writeln!(f, "{}", style::bold(header.trim_end()))?;

        for record in &self.data.records {
            let mut line = format!(
                "{:<28} {:<18} {:<6} {:<14} {:>12} {:<9} {}",
                text::truncate(&text::single_line(&record.name), 28),
                text::truncate(&record.set, 18),
                text::truncate(text::or_dash(&record.number), 6),
                text::truncate(text::or_dash(&record.rarity), 14),
                number::format_price(record.price),
                badge_text(record.price_badge),
                style::status(text::or_dash(&record.status), 10),
            );
            if verbose {
                line.push_str(&format!(
                    " {:<10} {:<6}",
                    text::truncate(&record.category, 10),
                    text::truncate(text::or_dash(&record.condition), 6)
                ));
                if show_quantity {
                    let qty = record
                        .quantity
                        .map(number::format_quantity)
                        .unwrap_or_else(|| "-".to_string());
                    line.push_str(&format!(" {:>5}", qty));
                }
                line.push_str(if record.image.is_some() { " yes" } else { " no" });
            }
            writeln!(f, "{}", line.trim_end())?;

            if verbose && let Some(notes) = &record.notes {
                writeln!(f, "    {}", style::dimmed(&text::single_line(notes)))?;
            }
        }

        if verbose {
            writeln!(f)?;
            writeln!(f, "Source: {}", self.data.source)?;
            if self.data.warning_count > 0 {
                writeln!(f, "Load warnings: {}", self.data.warning_count)?;
            }
        }

        write_filters(f, &self.data.applied_filters)
    }
}

impl<'a> fmt::Display for CatalogListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_table(f, false),
            ViewMode::Verbose => self.render_table(f, true),
        }
    }
}

/// Same columns as the sheet export, so the output loads back in.
impl CsvExport for CatalogListViewModel {
    fn write_csv<W: Write>(&self, writer: &mut csv::Writer<W>) -> anyhow::Result<()> {
        writer.write_record([
            Field::Set.header(),
            Field::Number.header(),
            Field::Name.header(),
            Field::Category.header(),
            Field::Rarity.header(),
            Field::Condition.header(),
            Field::Quantity.header(),
            Field::Price.header(),
            Field::Status.header(),
            Field::ImageDirect.header(),
            Field::ImageLargeUrl.header(),
            Field::Notes.header(),
        ])?;

        for record in &self.records {
            write_record_row(writer, record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn write_record_row<W: Write>(
    writer: &mut csv::Writer<W>,
    record: &RecordViewModel,
) -> csv::Result<()> {
    let quantity = record.quantity.map(|q| q.to_string()).unwrap_or_default();
    let price = record.price.to_string();
    writer.write_record([
        record.set.as_str(),
        record.number.as_str(),
        record.name.as_str(),
        record.category.as_str(),
        record.rarity.as_str(),
        record.condition.as_str(),
        quantity.as_str(),
        price.as_str(),
        record.status.as_str(),
        record.image.as_deref().unwrap_or(""),
        record.zoom_image.as_deref().unwrap_or(""),
        record.notes.as_deref().unwrap_or(""),
    ])
}

fn badge_text(badge: PriceBadge) -> &'static str {
    match badge {
        PriceBadge::Standard => "",
        other => other.label(),
    }
}

fn price_with_badge(record: &RecordViewModel) -> String {
    match record.price_badge {
        PriceBadge::Standard => number::format_price(record.price),
        badge => format!("{} ({})", number::format_price(record.price), badge.label()),
    }
}

fn write_filters(f: &mut fmt::Formatter, filters: &AppliedFilters) -> fmt::Result {
    if filters.is_empty() {
        return Ok(());
    }

    writeln!(f)?;
    writeln!(f, "Filters applied:")?;
    if let Some(query) = &filters.query {
        writeln!(f, "  Query: {}", query)?;
    }
    if let Some(band) = &filters.band {
        writeln!(f, "  Price band: {}", band)?;
    }
    if let Some(status) = &filters.status {
        writeln!(f, "  Status: {}", status)?;
    }
    if let Some(category) = &filters.category {
        writeln!(f, "  Category: {}", category)?;
    }
    Ok(())
}

// --------------------------------------------------------
// Price Bands View
// --------------------------------------------------------

impl CreateView for BandsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(BandsView { data: self, mode })
    }
}

struct BandsView<'a> {
    data: &'a BandsViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for BandsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for row in &self.data.bands {
                writeln!(f, "{}\t{}", row.band, row.count)?;
            }
            return Ok(());
        }

        let widest = self.data.bands.iter().map(|r| r.count).max().unwrap_or(0);

        writeln!(f, "{}", style::bold(&format!("{:<8} {:<10} {:>6}", "BAND", "RANGE", "COUNT")))?;
        for row in &self.data.bands {
            writeln!(
                f,
                "{:<8} {:<10} {:>6} {}",
                row.band,
                row.label,
                row.count,
                bar(row.count, widest, 30)
            )?;
        }
        writeln!(f, "{:<8} {:<10} {:>6}", "-", "no band", self.data.unbanded)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} of {} records counted",
            self.data.matched_count, self.data.total_count
        )?;
        write_filters(f, &self.data.applied_filters)
    }
}

impl CsvExport for BandsViewModel {
    fn write_csv<W: Write>(&self, writer: &mut csv::Writer<W>) -> anyhow::Result<()> {
        writer.write_record(["band", "range", "count"])?;
        for row in &self.bands {
            let count = row.count.to_string();
            writer.write_record([row.band.as_str(), row.label.as_str(), count.as_str()])?;
        }
        let unbanded = self.unbanded.to_string();
        writer.write_record(["", "no band", unbanded.as_str()])?;
        writer.flush()?;
        Ok(())
    }
}

fn bar(count: usize, widest: usize, width: usize) -> String {
    if widest == 0 || count == 0 {
        return String::new();
    }
    let filled = (count * width).div_ceil(widest);
    "█".repeat(filled)
}
