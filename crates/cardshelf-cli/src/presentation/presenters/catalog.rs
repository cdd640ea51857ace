use crate::args::hints;
use crate::presentation::view_models::{
    AppliedFilters, BandRowViewModel, BandsViewModel, CatalogListViewModel, CommandResultViewModel,
    Guidance, RecordViewModel, StatusBadge,
};
use cardshelf_engine::BandHistogram;
use cardshelf_runtime::CatalogSnapshot;
use cardshelf_types::{
    Capabilities, CategoryFilter, FilterCriteria, InventoryRecord, SortOrder, StatusFilter,
};

pub fn present_record(record: &InventoryRecord, capabilities: &Capabilities) -> RecordViewModel {
    let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());

    RecordViewModel {
        name: record.name.clone(),
        set: record.set.clone(),
        number: record.number.clone(),
        category: record.category_or(&capabilities.default_category).to_string(),
        rarity: record.rarity.clone(),
        condition: record.condition.clone(),
        quantity: capabilities.quantity.then_some(record.quantity),
        price: record.price,
        price_band: record.price_band().map(|band| band.token().to_string()),
        price_badge: record.price_badge(),
        status: record.status.as_str().to_string(),
        image: non_empty(&record.image),
        zoom_image: non_empty(&record.zoom_image),
        notes: if capabilities.notes {
            non_empty(&record.notes)
        } else {
            None
        },
    }
}

pub fn present_filters(criteria: &FilterCriteria, capabilities: &Capabilities) -> AppliedFilters {
    let query = criteria.query.trim();
    let sort = criteria.sort.unwrap_or(capabilities.sort);

    AppliedFilters {
        query: (!query.is_empty()).then(|| query.to_string()),
        band: criteria.price_band.map(|band| band.token().to_string()),
        status: match criteria.status {
            StatusFilter::Any => None,
            ref status => Some(status.token().to_string()),
        },
        category: match &criteria.category {
            CategoryFilter::All => None,
            CategoryFilter::Only(_) if !capabilities.categories => None,
            CategoryFilter::Only(category) => Some(category.clone()),
        },
        sort: match sort {
            SortOrder::Input => "input".to_string(),
            SortOrder::PriceAscending => "price".to_string(),
        },
    }
}

pub fn present_catalog_list(
    snapshot: &CatalogSnapshot,
    matched: &[InventoryRecord],
    criteria: &FilterCriteria,
    capabilities: &Capabilities,
    limit: Option<usize>,
) -> CommandResultViewModel<CatalogListViewModel> {
    let shown = limit.unwrap_or(matched.len()).min(matched.len());
    let records = matched[..shown]
        .iter()
        .map(|record| present_record(record, capabilities))
        .collect();

    let content = CatalogListViewModel {
        source: snapshot.source.display().to_string(),
        records,
        total_count: snapshot.records.len(),
        matched_count: matched.len(),
        applied_filters: present_filters(criteria, capabilities),
        warning_count: snapshot.warnings.len(),
    };

    let mut result = CommandResultViewModel::new(content);

    if matched.is_empty() {
        result = result.with_badge(StatusBadge::info("No matching records"));
        if snapshot.records.is_empty() {
            result = result.with_suggestion(
                Guidance::new("The catalog has a header but no rows; inspect it")
                    .with_command(hints::cmd::CHECK),
            );
        } else {
            result = result.with_suggestion(
                Guidance::new("See how prices are distributed before narrowing by band")
                    .with_command(hints::cmd::BANDS),
            );
        }
    } else {
        result = result.with_badge(StatusBadge::success(format!(
            "{} of {} records",
            matched.len(),
            snapshot.records.len()
        )));

        if shown < matched.len() {
            result = result.with_suggestion(
                Guidance::new(format!(
                    "Showing first {} records, use --limit to see more",
                    shown
                ))
                .with_command(hints::fmt::list_limit(shown.max(1) * 2)),
            );
        }
    }

    if !snapshot.warnings.is_empty() {
        result = result.with_suggestion(
            Guidance::new(format!(
                "{} row(s) loaded with warnings",
                snapshot.warnings.len()
            ))
            .with_command(hints::cmd::CHECK),
        );
    }

    result
}

pub fn present_bands(
    snapshot: &CatalogSnapshot,
    histogram: &BandHistogram,
    criteria: &FilterCriteria,
    capabilities: &Capabilities,
) -> CommandResultViewModel<BandsViewModel> {
    let bands = histogram
        .bands
        .iter()
        .map(|entry| BandRowViewModel {
            band: entry.band.token().to_string(),
            label: entry.band.label().to_string(),
            count: entry.count,
        })
        .collect();

    let content = BandsViewModel {
        source: snapshot.source.display().to_string(),
        bands,
        unbanded: histogram.unbanded,
        matched_count: histogram.total,
        total_count: snapshot.records.len(),
        applied_filters: present_filters(criteria, capabilities),
    };

    let mut result = CommandResultViewModel::new(content);

    if let Some(busiest) = histogram
        .bands
        .iter()
        .filter(|entry| entry.count > 0)
        .max_by_key(|entry| entry.count)
    {
        result = result.with_suggestion(
            Guidance::new(format!("Browse the largest band ({})", busiest.band.label()))
                .with_command(hints::fmt::list_band(busiest.band.token())),
        );
    }

    if histogram.unbanded > 0 {
        result = result.with_badge(StatusBadge::info(format!(
            "{} record(s) priced outside every band",
            histogram.unbanded
        )));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardshelf_runtime::load_from_str;
    use cardshelf_types::{PriceBadge, PriceBand};
    use std::path::Path;

    fn snapshot() -> CatalogSnapshot {
        load_from_str(
            "name,category,qty,price_bnd,status,notes\n\
             Pikachu,,3,2,AVAILABLE,Fresh pull\n\
             Charizard,Single,1,60,SOLD,\n\
             Booster Box,Sealed,0,120,AVAILABLE,\n",
            Path::new("catalog.csv"),
        )
        .unwrap()
    }

    #[test]
    fn test_record_respects_capabilities() {
        let snapshot = snapshot();
        let record = &snapshot.records[0];

        let plain = present_record(record, &Capabilities::default());
        assert_eq!(plain.category, "Single");
        assert_eq!(plain.quantity, None);
        assert_eq!(plain.notes, None);
        assert_eq!(plain.price_band.as_deref(), Some("1-3"));
        assert_eq!(plain.price_badge, PriceBadge::UpToThree);

        let full = Capabilities {
            quantity: true,
            notes: true,
            ..Default::default()
        };
        let detailed = present_record(record, &full);
        assert_eq!(detailed.quantity, Some(3.0));
        assert_eq!(detailed.notes.as_deref(), Some("Fresh pull"));
    }

    #[test]
    fn test_list_badge_and_limit_hint() {
        let snapshot = snapshot();
        let caps = Capabilities::default();
        let criteria = FilterCriteria::new();

        let result =
            present_catalog_list(&snapshot, &snapshot.records, &criteria, &caps, Some(2));
        assert_eq!(result.content.records.len(), 2);
        assert_eq!(result.content.matched_count, 3);
        assert_eq!(result.badge.map(|b| b.label), Some("3 of 3 records".to_string()));
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("cardshelf list --limit 4")
        );
    }

    #[test]
    fn test_empty_match_suggests_bands() {
        let snapshot = snapshot();
        let result = present_catalog_list(
            &snapshot,
            &[],
            &FilterCriteria::new().price_band(PriceBand::FourToFive),
            &Capabilities::default(),
            None,
        );
        assert_eq!(result.content.applied_filters.band.as_deref(), Some("4-5"));
        assert_eq!(result.suggestions[0].command.as_deref(), Some("cardshelf bands"));
    }

    #[test]
    fn test_filters_summary() {
        let caps = Capabilities::default();
        let criteria = FilterCriteria::new()
            .query("  char ")
            .status(StatusFilter::Unsold)
            .category(CategoryFilter::from_token("Sealed"));
        let summary = present_filters(&criteria, &caps);

        assert_eq!(summary.query.as_deref(), Some("char"));
        assert_eq!(summary.status.as_deref(), Some("ALL"));
        assert_eq!(summary.category.as_deref(), Some("Sealed"));
        assert_eq!(summary.sort, "input");
        assert!(present_filters(&FilterCriteria::new(), &caps).is_empty());

        insta::assert_json_snapshot!(summary, @r#"
        {
          "query": "char",
          "band": null,
          "status": "ALL",
          "category": "Sealed",
          "sort": "input"
        }
        "#);
    }
}
