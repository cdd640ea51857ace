use cardshelf_engine::HeaderSummary;
use cardshelf_types::LoadWarning;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckViewModel {
    pub source: String,
    pub record_count: usize,
    pub header: HeaderSummary,
    pub warnings: Vec<LoadWarning>,
    pub records_without_image: usize,
    pub unknown_statuses: Vec<String>,
}
