use crate::args::hints;
use crate::presentation::presenters::catalog::present_record;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, PlacedRecordViewModel, StatusBadge, WindowViewModel,
};
use cardshelf_types::{
    Capabilities, InventoryRecord, ItemFootprint, ItemPlacement, Viewport, VisibleWindow,
};

pub fn present_window(
    source: String,
    matched: &[InventoryRecord],
    viewport: Viewport,
    footprint: ItemFootprint,
    window: VisibleWindow,
    placements: Vec<ItemPlacement>,
    capabilities: &Capabilities,
) -> CommandResultViewModel<WindowViewModel> {
    let items = placements
        .into_iter()
        .filter_map(|placement| {
            matched
                .get(placement.index)
                .map(|record| PlacedRecordViewModel {
                    placement,
                    record: present_record(record, capabilities),
                })
        })
        .collect::<Vec<_>>();

    let materialized = items.len();
    let content = WindowViewModel {
        source,
        matched_count: matched.len(),
        viewport,
        footprint,
        window,
        items,
    };

    let mut result = CommandResultViewModel::new(content);

    if materialized == 0 && !matched.is_empty() {
        result = result
            .with_badge(StatusBadge::warning("Scroll offset is past the end of the content"))
            .with_suggestion(
                Guidance::new("Scroll back to the top").with_command(hints::fmt::window_scroll(0.0)),
            );
    } else {
        result = result.with_badge(StatusBadge::success(format!(
            "Materializing {} of {} records",
            materialized,
            matched.len()
        )));

        let next_offset = window.end_row as f64 * window.row_stride;
        if window.end_row < window.row_count {
            result = result.with_suggestion(
                Guidance::new("Next page").with_command(hints::fmt::window_scroll(next_offset)),
            );
        }
    }

    result
}
