use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Visible area of the scroll container, in caller-defined units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_offset: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_offset: 0.0,
        }
    }

    pub fn scrolled_to(mut self, offset: f64) -> Self {
        self.scroll_offset = offset;
        self
    }
}

/// Size of one grid cell plus the spacing between cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFootprint {
    pub width: f64,
    pub height: f64,
    pub gap: f64,
}

impl Default for ItemFootprint {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 260.0,
            gap: 12.0,
        }
    }
}

impl ItemFootprint {
    pub fn new(width: f64, height: f64, gap: f64) -> Self {
        Self { width, height, gap }
    }

    pub fn column_stride(&self) -> f64 {
        self.width + self.gap
    }

    pub fn row_stride(&self) -> f64 {
        self.height + self.gap
    }
}

/// Slice of a list that must currently be materialized, and the geometry
/// that produced it.
///
/// `end_index` is exclusive and counts whole rows, so it may run past the
/// item count on the last row; use [`VisibleWindow::clamped_range`] before
/// slicing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize,
    pub column_count: usize,
    /// Scrollable height of the virtual content area.
    pub total_extent: f64,
    pub start_row: usize,
    pub end_row: usize,
    pub row_count: usize,
    pub row_stride: f64,
    pub column_stride: f64,
}

impl VisibleWindow {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn clamped_range(&self, item_count: usize) -> Range<usize> {
        let end = self.end_index.min(item_count);
        let start = self.start_index.min(end);
        start..end
    }
}

/// Absolute position of one materialized item inside the content area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}
