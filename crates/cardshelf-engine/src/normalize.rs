use std::collections::HashMap;

use cardshelf_types::{Field, InventoryRecord, LoadWarning, RawRow, Status};
use serde::Serialize;

use crate::error::{Error, Result};

/// Column names of the header row and where each known field lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    names: Vec<String>,
    columns: HashMap<Field, usize>,
}

impl HeaderMap {
    pub fn from_row(row: &[String]) -> Self {
        let names: Vec<String> = row
            .iter()
            .map(|name| name.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();

        // Later duplicates overwrite earlier ones
        let mut columns = HashMap::new();
        for (position, name) in names.iter().enumerate() {
            if let Some(field) = Field::from_header(name) {
                columns.insert(field, position);
            }
        }

        Self { names, columns }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.iter().all(|name| name.is_empty())
    }

    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn summary(&self) -> HeaderSummary {
        let recognized: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| self.columns.contains_key(field))
            .collect();
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| !self.columns.contains_key(field))
            .collect();
        let ignored: Vec<String> = self
            .names
            .iter()
            .filter(|name| !name.is_empty() && Field::from_header(name).is_none())
            .cloned()
            .collect();

        HeaderSummary {
            columns: self.names.clone(),
            recognized,
            ignored,
            missing,
        }
    }
}

/// What the header row told us, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HeaderSummary {
    pub columns: Vec<String>,
    pub recognized: Vec<Field>,
    pub ignored: Vec<String>,
    pub missing: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedCatalog {
    pub records: Vec<InventoryRecord>,
    pub warnings: Vec<LoadWarning>,
    pub header: HeaderSummary,
}

/// Turn parsed rows into inventory records.
///
/// The first non-blank row is the header. Fails only when there is no
/// header at all; every row-level problem degrades to a default value.
pub fn normalize(rows: Vec<RawRow>) -> Result<Vec<InventoryRecord>> {
    normalize_report(rows).map(|catalog| catalog.records)
}

pub fn normalize_report(rows: Vec<RawRow>) -> Result<NormalizedCatalog> {
    let mut numbered = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| (index + 1, row))
        .skip_while(|(_, row)| is_blank(row));

    let header = match numbered.next() {
        Some((_, row)) => HeaderMap::from_row(&row),
        None => return Err(Error::MissingHeader),
    };

    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (row_number, row) in numbered {
        if is_blank(&row) {
            continue;
        }

        if row.len() != header.len() {
            tracing::warn!(
                row = row_number,
                expected = header.len(),
                found = row.len(),
                "ragged catalog row"
            );
            warnings.push(LoadWarning::RaggedRow {
                row: row_number,
                expected: header.len(),
                found: row.len(),
            });
        }

        let reader = RowReader {
            header: &header,
            row: &row,
            row_number,
        };
        records.push(reader.build(&mut warnings));
    }

    tracing::debug!(
        records = records.len(),
        warnings = warnings.len(),
        "normalized catalog rows"
    );

    Ok(NormalizedCatalog {
        records,
        warnings,
        header: header.summary(),
    })
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

struct RowReader<'a> {
    header: &'a HeaderMap,
    row: &'a [String],
    row_number: usize,
}

impl RowReader<'_> {
    fn text(&self, field: Field) -> &str {
        self.header
            .column(field)
            .and_then(|position| self.row.get(position))
            .map(|cell| cell.trim())
            .unwrap_or("")
    }

    fn number(&self, field: Field, warnings: &mut Vec<LoadWarning>) -> f64 {
        let raw = self.text(field);
        match parse_number(raw) {
            Some(value) => value,
            None => {
                tracing::warn!(
                    row = self.row_number,
                    column = field.header(),
                    value = raw,
                    "non-numeric cell, using 0"
                );
                warnings.push(LoadWarning::InvalidNumber {
                    row: self.row_number,
                    field,
                    value: raw.to_string(),
                });
                0.0
            }
        }
    }

    fn build(&self, warnings: &mut Vec<LoadWarning>) -> InventoryRecord {
        let image = first_non_empty(&[self.text(Field::ImageDirect), self.text(Field::ImageUrl)]);
        let zoom_image = first_non_empty(&[self.text(Field::ImageLargeUrl), image.as_str()]);

        InventoryRecord {
            name: self.text(Field::Name).to_string(),
            set: self.text(Field::Set).to_string(),
            number: self.text(Field::Number).to_string(),
            category: self.text(Field::Category).to_string(),
            rarity: self.text(Field::Rarity).to_string(),
            condition: self.text(Field::Condition).to_string(),
            quantity: self.number(Field::Quantity, warnings),
            price: self.number(Field::Price, warnings),
            status: Status::from_raw(self.text(Field::Status)),
            image,
            zoom_image,
            notes: self.text(Field::Notes).to_string(),
        }
    }
}

fn first_non_empty(candidates: &[&str]) -> String {
    candidates
        .iter()
        .find(|value| !value.is_empty())
        .map(|value| value.to_string())
        .unwrap_or_default()
}

/// Lenient number reading for hand-typed sheet cells.
///
/// Empty means 0. Accepts an optional leading `$` and `,` thousands
/// separators. Returns `None` for anything else, including values that
/// parse but are not finite (`inf`, `NaN`).
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();
    let cleaned: String = unsigned.chars().filter(|c| *c != ',').collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
