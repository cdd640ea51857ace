use cardshelf_types::{ItemFootprint, ItemPlacement, Viewport, VisibleWindow};

/// Rows materialized above and below the visible area.
const OVERSCAN_ROWS: usize = 1;

/// Compute which slice of a grid-laid-out list must be materialized.
///
/// One extra row is kept above the viewport and one below, plus the partial
/// row at the bottom edge. Degenerate geometry never panics: negative or
/// non-finite sizes count as 0 and a non-positive stride counts as 1.
pub fn compute_window(
    item_count: usize,
    viewport: Viewport,
    footprint: ItemFootprint,
) -> VisibleWindow {
    let width = sanitize(viewport.width);
    let height = sanitize(viewport.height);
    let scroll_offset = sanitize(viewport.scroll_offset);

    let column_stride = stride(sanitize(footprint.width) + sanitize(footprint.gap));
    let row_stride = stride(sanitize(footprint.height) + sanitize(footprint.gap));

    let column_count = (whole(width / column_stride)).max(1);
    let total_rows = item_count.div_ceil(column_count);
    let total_extent = total_rows as f64 * row_stride;

    let visible_rows = whole((height / row_stride).ceil());
    let first_visible_row = whole(scroll_offset / row_stride);

    let end_row = first_visible_row
        .saturating_sub(OVERSCAN_ROWS)
        .saturating_add(visible_rows)
        .saturating_add(OVERSCAN_ROWS * 2)
        .min(total_rows);
    let start_row = first_visible_row.saturating_sub(OVERSCAN_ROWS).min(end_row);

    VisibleWindow {
        start_index: start_row.saturating_mul(column_count),
        end_index: end_row.saturating_mul(column_count),
        column_count,
        total_extent,
        start_row,
        end_row,
        row_count: total_rows,
        row_stride,
        column_stride,
    }
}

/// Absolute positions for every item of `window` that actually exists.
pub fn placements(
    window: &VisibleWindow,
    footprint: &ItemFootprint,
    item_count: usize,
) -> Vec<ItemPlacement> {
    let columns = window.column_count.max(1);
    window
        .clamped_range(item_count)
        .map(|index| {
            let row = index / columns;
            let column = index % columns;
            ItemPlacement {
                index,
                row,
                column,
                top: row as f64 * window.row_stride,
                left: column as f64 * window.column_stride,
                width: sanitize(footprint.width),
                height: sanitize(footprint.height),
            }
        })
        .collect()
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn stride(value: f64) -> f64 {
    if value > 0.0 { value } else { 1.0 }
}

/// Floor to a row/column count; `as` saturates on overflow.
fn whole(value: f64) -> usize {
    value.floor() as usize
}
