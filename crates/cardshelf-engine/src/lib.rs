// Engine module - the catalog pipeline (parse, normalize, filter, layout)
// Every stage is a pure function; orchestration lives in cardshelf-runtime

pub mod error;
pub mod filter;
pub mod layout;
pub mod normalize;
pub mod tabular;

pub use error::{Error, Result};
pub use filter::{BandCount, BandHistogram, apply, band_histogram};
pub use layout::{compute_window, placements};
pub use normalize::{HeaderMap, HeaderSummary, NormalizedCatalog, normalize, normalize_report};
pub use tabular::{ParsedTable, parse, parse_report};

use cardshelf_types::{InventoryRecord, LoadWarning};

// Façade API - what the runtime and CLI layers call

/// Everything produced by one load of catalog text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadedCatalog {
    pub records: Vec<InventoryRecord>,
    pub warnings: Vec<LoadWarning>,
    pub header: HeaderSummary,
}

/// Parse and normalize catalog text in one step, keeping the warnings of
/// both stages in row order.
pub fn load_text(text: &str) -> Result<LoadedCatalog> {
    let parsed = parse_report(text);
    let normalized = normalize_report(parsed.rows)?;

    let mut warnings = parsed.warnings;
    warnings.extend(normalized.warnings);
    warnings.sort_by_key(LoadWarning::row);

    Ok(LoadedCatalog {
        records: normalized.records,
        warnings,
        header: normalized.header,
    })
}
