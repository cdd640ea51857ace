use crate::args::hints;
use crate::presentation::view_models::{
    CheckViewModel, CommandResultViewModel, Guidance, StatusBadge,
};
use cardshelf_runtime::CatalogSnapshot;
use cardshelf_types::Field;

pub fn present_check(snapshot: &CatalogSnapshot) -> CommandResultViewModel<CheckViewModel> {
    let records_without_image = snapshot
        .records
        .iter()
        .filter(|record| !record.has_image())
        .count();

    let mut unknown_statuses: Vec<String> = snapshot
        .records
        .iter()
        .filter(|record| !record.status.is_known())
        .map(|record| record.status.as_str().to_string())
        .filter(|status| !status.is_empty())
        .collect();
    unknown_statuses.sort();
    unknown_statuses.dedup();

    let content = CheckViewModel {
        source: snapshot.source.display().to_string(),
        record_count: snapshot.records.len(),
        header: snapshot.header.clone(),
        warnings: snapshot.warnings.clone(),
        records_without_image,
        unknown_statuses,
    };

    let mut result = CommandResultViewModel::new(content);

    if snapshot.warnings.is_empty() {
        result = result.with_badge(StatusBadge::success(format!(
            "{} records loaded cleanly",
            snapshot.records.len()
        )));
    } else {
        result = result.with_badge(StatusBadge::warning(format!(
            "{} records loaded, {} warning(s)",
            snapshot.records.len(),
            snapshot.warnings.len()
        )));
    }

    if !snapshot.header.recognized.contains(&Field::Name) {
        result = result.with_suggestion(Guidance::new(
            "No 'name' column found; records will have empty names",
        ));
    }
    if !snapshot.header.recognized.contains(&Field::Price) {
        result = result.with_suggestion(Guidance::new(
            "No 'price_bnd' column found; every price reads as 0 and band filters match nothing",
        ));
    }
    if !snapshot.records.is_empty() {
        result = result.with_suggestion(
            Guidance::new("List what shoppers can buy").with_command(hints::cmd::LIST_AVAILABLE),
        );
    }

    result
}
