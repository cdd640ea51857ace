use cardshelf_types::{ItemFootprint, ItemPlacement, Viewport, VisibleWindow};
use serde::Serialize;

use super::catalog::RecordViewModel;

#[derive(Debug, Serialize)]
pub struct PlacedRecordViewModel {
    pub placement: ItemPlacement,
    pub record: RecordViewModel,
}

#[derive(Debug, Serialize)]
pub struct WindowViewModel {
    pub source: String,
    pub matched_count: usize,
    pub viewport: Viewport,
    pub footprint: ItemFootprint,
    pub window: VisibleWindow,
    pub items: Vec<PlacedRecordViewModel>,
}
