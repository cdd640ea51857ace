use crate::Result;
use cardshelf_engine::{HeaderSummary, LoadedCatalog};
use cardshelf_types::{InventoryRecord, LoadWarning};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Source name that reads the catalog from standard input
pub const STDIN_SOURCE: &str = "-";

/// One successful load of a catalog, with everything learned on the way.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub records: Vec<InventoryRecord>,
    pub warnings: Vec<LoadWarning>,
    pub header: HeaderSummary,
    pub source: PathBuf,
    pub loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn is_stdin(&self) -> bool {
        self.source == Path::new(STDIN_SOURCE)
    }
}

/// Read a catalog file (or standard input for `-`) and run it through
/// parsing and normalization.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, with a
/// warning pointing at the first offending line.
pub fn load_catalog(source: &Path) -> Result<CatalogSnapshot> {
    let bytes = if source == Path::new(STDIN_SOURCE) {
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        buffer
    } else {
        std::fs::read(source)?
    };

    load_from_bytes(&bytes, source)
}

pub fn load_from_bytes(bytes: &[u8], source: &Path) -> Result<CatalogSnapshot> {
    let text = String::from_utf8_lossy(bytes);
    let encoding_warning = match (&text, std::str::from_utf8(bytes)) {
        (Cow::Owned(_), Err(err)) => {
            let valid = &bytes[..err.valid_up_to()];
            let row = 1 + valid.iter().filter(|&&b| b == b'\n').count();
            tracing::warn!(
                source = %source.display(),
                row,
                "catalog is not valid UTF-8, replacing invalid bytes"
            );
            Some(LoadWarning::InvalidEncoding { row })
        }
        _ => None,
    };

    let mut snapshot = load_from_str(&text, source)?;
    if let Some(warning) = encoding_warning {
        snapshot.warnings.push(warning);
        snapshot.warnings.sort_by_key(LoadWarning::row);
    }
    Ok(snapshot)
}

pub fn load_from_str(text: &str, source: &Path) -> Result<CatalogSnapshot> {
    let LoadedCatalog {
        records,
        warnings,
        header,
    } = cardshelf_engine::load_text(text)?;

    tracing::info!(
        source = %source.display(),
        records = records.len(),
        warnings = warnings.len(),
        "loaded catalog"
    );

    Ok(CatalogSnapshot {
        records,
        warnings,
        header,
        source: source.to_path_buf(),
        loaded_at: Utc::now(),
    })
}
