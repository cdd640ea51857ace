use cardshelf_types::{
    Capabilities, CategoryFilter, FilterCriteria, InventoryRecord, PriceBand, SortOrder, Status,
    StatusFilter,
};
use serde::Serialize;

/// Criteria compiled once per evaluation (lower-cased query, resolved sort).
struct Predicate<'a> {
    query: String,
    criteria: &'a FilterCriteria,
    capabilities: &'a Capabilities,
}

impl<'a> Predicate<'a> {
    fn new(criteria: &'a FilterCriteria, capabilities: &'a Capabilities) -> Self {
        Self {
            query: criteria.query.trim().to_lowercase(),
            criteria,
            capabilities,
        }
    }

    fn matches(&self, record: &InventoryRecord) -> bool {
        self.matches_status(record)
            && self.matches_category(record)
            && self.matches_query(record)
            && self.matches_band(record)
    }

    fn matches_status(&self, record: &InventoryRecord) -> bool {
        match &self.criteria.status {
            StatusFilter::Any => true,
            StatusFilter::OnlyAvailable => {
                record.status == Status::Available
                    && (!self.capabilities.requires_stock() || record.quantity > 0.0)
            }
            StatusFilter::Unsold => record.status != Status::Sold,
            StatusFilter::Exactly(status) => &record.status == status,
        }
    }

    fn matches_category(&self, record: &InventoryRecord) -> bool {
        if !self.capabilities.categories {
            return true;
        }
        match &self.criteria.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => {
                record.category_or(&self.capabilities.default_category) == category
            }
        }
    }

    fn matches_query(&self, record: &InventoryRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let contains = |text: &str| text.to_lowercase().contains(&self.query);

        contains(&record.name)
            || contains(&record.set)
            || contains(&record.rarity)
            || (self.capabilities.categories && contains(&record.category))
    }

    fn matches_band(&self, record: &InventoryRecord) -> bool {
        match self.criteria.price_band {
            Some(band) => band.contains(record.price),
            None => true,
        }
    }

    fn sort_order(&self) -> SortOrder {
        self.criteria.sort.unwrap_or(self.capabilities.sort)
    }
}

/// Evaluate the filter controls against a record set.
///
/// Filters combine with AND. Order follows the input unless price sorting is
/// configured or requested, in which case records are sorted ascending by
/// price and equal prices keep their input order.
pub fn apply(
    records: &[InventoryRecord],
    criteria: &FilterCriteria,
    capabilities: &Capabilities,
) -> Vec<InventoryRecord> {
    let predicate = Predicate::new(criteria, capabilities);

    let mut matched: Vec<InventoryRecord> = records
        .iter()
        .filter(|record| predicate.matches(record))
        .cloned()
        .collect();

    if predicate.sort_order() == SortOrder::PriceAscending {
        // `sort_by` is stable
        matched.sort_by(|a, b| a.price.total_cmp(&b.price));
    }

    tracing::debug!(
        input = records.len(),
        matched = matched.len(),
        "applied catalog filter"
    );
    matched
}

/// Record count per price band, plus the records no band claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandHistogram {
    pub bands: Vec<BandCount>,
    pub unbanded: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandCount {
    pub band: PriceBand,
    pub count: usize,
}

pub fn band_histogram(records: &[InventoryRecord]) -> BandHistogram {
    let mut bands: Vec<BandCount> = PriceBand::ALL
        .into_iter()
        .map(|band| BandCount { band, count: 0 })
        .collect();
    let mut unbanded = 0;

    for record in records {
        match record.price_band() {
            Some(band) => {
                if let Some(entry) = bands.iter_mut().find(|entry| entry.band == band) {
                    entry.count += 1;
                }
            }
            None => unbanded += 1,
        }
    }

    BandHistogram {
        bands,
        unbanded,
        total: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardshelf_types::AvailabilityRule;

    fn card(name: &str, price: f64, status: &str) -> InventoryRecord {
        InventoryRecord {
            name: name.to_string(),
            price,
            status: Status::from_raw(status),
            ..Default::default()
        }
    }

    fn names(records: &[InventoryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_only_available_scenario() {
        let records = vec![card("Pikachu", 2.0, "AVAILABLE"), card("Charizard", 60.0, "SOLD")];
        let criteria = FilterCriteria::new().status(StatusFilter::from_token("AVAILABLE"));

        let result = apply(&records, &criteria, &Capabilities::default());
        assert_eq!(result, vec![records[0].clone()]);
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let records = vec![
            card("Snorlax", 9.0, "HOLD"),
            card("Pikachu", 2.0, "AVAILABLE"),
            card("Charizard", 60.0, "SOLD"),
        ];
        let result = apply(&records, &FilterCriteria::default(), &Capabilities::default());
        assert_eq!(result, records);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let records = vec![
            card("Pikachu", 2.0, "AVAILABLE"),
            card("Pichu", 1.0, "HOLD"),
            card("Raichu", 8.0, "AVAILABLE"),
        ];
        let criteria = FilterCriteria::new().query("chu").sort(SortOrder::PriceAscending);
        let caps = Capabilities::default();

        let once = apply(&records, &criteria, &caps);
        let twice = apply(&records, &criteria, &caps);
        assert_eq!(once, twice);
        assert_eq!(apply(&once, &criteria, &caps), once);
    }

    #[test]
    fn test_unsold_excludes_only_sold() {
        let records = vec![
            card("A", 1.0, "AVAILABLE"),
            card("B", 1.0, "HOLD"),
            card("C", 1.0, "SOLD"),
            card("D", 1.0, ""),
        ];
        let criteria = FilterCriteria::new().status(StatusFilter::Unsold);
        let result = apply(&records, &criteria, &Capabilities::default());
        assert_eq!(names(&result), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_exact_status_match() {
        let records = vec![card("A", 1.0, "HOLD"), card("B", 1.0, "SOLD")];
        let criteria = FilterCriteria::new().status(StatusFilter::from_token("hold"));
        let result = apply(&records, &criteria, &Capabilities::default());
        assert_eq!(names(&result), vec!["A"]);
    }

    #[test]
    fn test_stock_rule_is_configurable() {
        let mut in_stock = card("In stock", 3.0, "AVAILABLE");
        in_stock.quantity = 2.0;
        let out_of_stock = card("Out of stock", 3.0, "AVAILABLE");
        let records = vec![in_stock, out_of_stock];
        let criteria = FilterCriteria::new().status(StatusFilter::OnlyAvailable);

        let status_only = Capabilities {
            quantity: true,
            availability: AvailabilityRule::StatusOnly,
            ..Default::default()
        };
        assert_eq!(apply(&records, &criteria, &status_only).len(), 2);

        let with_stock = Capabilities {
            quantity: true,
            availability: AvailabilityRule::StatusAndStock,
            ..Default::default()
        };
        assert_eq!(
            names(&apply(&records, &criteria, &with_stock)),
            vec!["In stock"]
        );
    }

    #[test]
    fn test_category_filter_uses_default_category() {
        let mut sealed = card("Booster Box", 120.0, "AVAILABLE");
        sealed.category = "Sealed".to_string();
        let single = card("Pikachu", 2.0, "AVAILABLE");
        let records = vec![sealed, single];
        let caps = Capabilities::default();

        let singles = FilterCriteria::new().category(CategoryFilter::from_token("Single"));
        assert_eq!(names(&apply(&records, &singles, &caps)), vec!["Pikachu"]);

        let sealed_only = FilterCriteria::new().category(CategoryFilter::from_token("Sealed"));
        assert_eq!(names(&apply(&records, &sealed_only, &caps)), vec!["Booster Box"]);

        // Case-sensitive
        let lower = FilterCriteria::new().category(CategoryFilter::from_token("sealed"));
        assert!(apply(&records, &lower, &caps).is_empty());

        let all = FilterCriteria::new().category(CategoryFilter::All);
        assert_eq!(apply(&records, &all, &caps).len(), 2);
    }

    #[test]
    fn test_category_ignored_without_capability() {
        let records = vec![card("Pikachu", 2.0, "AVAILABLE")];
        let caps = Capabilities {
            categories: false,
            ..Default::default()
        };
        let criteria = FilterCriteria::new().category(CategoryFilter::from_token("Sealed"));
        assert_eq!(apply(&records, &criteria, &caps).len(), 1);
    }

    #[test]
    fn test_query_matches_name_set_rarity_case_insensitively() {
        let mut holo = card("Charizard", 60.0, "AVAILABLE");
        holo.set = "Base Set".to_string();
        holo.rarity = "Holo Rare".to_string();
        let mut promo = card("Mew", 3.0, "AVAILABLE");
        promo.set = "Black Star Promo".to_string();
        promo.category = "Promo".to_string();
        promo.notes = "holo corner wear".to_string();
        let records = vec![holo, promo];
        let caps = Capabilities::default();

        assert_eq!(names(&apply(&records, &FilterCriteria::new().query("CHAR"), &caps)), vec!["Charizard"]);
        assert_eq!(names(&apply(&records, &FilterCriteria::new().query("base"), &caps)), vec!["Charizard"]);
        // Notes are not searched
        assert_eq!(names(&apply(&records, &FilterCriteria::new().query("holo"), &caps)), vec!["Charizard"]);
        assert_eq!(apply(&records, &FilterCriteria::new().query("promo"), &caps).len(), 1);
        assert!(apply(&records, &FilterCriteria::new().query("blastoise"), &caps).is_empty());
    }

    #[test]
    fn test_query_searches_category_only_with_capability() {
        let mut sealed = card("Booster Box", 120.0, "AVAILABLE");
        sealed.category = "Sealed".to_string();
        let records = vec![sealed];
        let criteria = FilterCriteria::new().query("sealed");

        assert_eq!(apply(&records, &criteria, &Capabilities::default()).len(), 1);

        let caps = Capabilities {
            categories: false,
            ..Default::default()
        };
        assert!(apply(&records, &criteria, &caps).is_empty());
    }

    #[test]
    fn test_price_band_filter() {
        let records = vec![
            card("Three", 3.0, "AVAILABLE"),
            card("Three fifty", 3.5, "AVAILABLE"),
            card("Four", 4.0, "AVAILABLE"),
            card("Nan", f64::NAN, "AVAILABLE"),
            card("Sixty", 60.0, "AVAILABLE"),
        ];
        let caps = Capabilities::default();

        let low = FilterCriteria::new().price_band(PriceBand::OneToThree);
        assert_eq!(names(&apply(&records, &low, &caps)), vec!["Three"]);

        let mid = FilterCriteria::new().price_band(PriceBand::FourToFive);
        assert_eq!(names(&apply(&records, &mid, &caps)), vec!["Four"]);

        let high = FilterCriteria::new().price_band(PriceBand::OverFifty);
        assert_eq!(names(&apply(&records, &high, &caps)), vec!["Sixty"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let records = vec![
            card("Pikachu", 2.0, "AVAILABLE"),
            card("Pikachu", 2.0, "SOLD"),
            card("Pikachu", 40.0, "AVAILABLE"),
            card("Raichu", 2.0, "AVAILABLE"),
        ];
        let criteria = FilterCriteria::new()
            .query("pika")
            .price_band(PriceBand::OneToThree)
            .status(StatusFilter::OnlyAvailable);
        let result = apply(&records, &criteria, &Capabilities::default());
        assert_eq!(result, vec![records[0].clone()]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let records = vec![
            card("B", 5.0, ""),
            card("A1", 2.0, ""),
            card("C", 9.0, ""),
            card("A2", 2.0, ""),
            card("A3", 2.0, ""),
        ];
        let caps = Capabilities {
            sort: SortOrder::PriceAscending,
            ..Default::default()
        };
        let result = apply(&records, &FilterCriteria::default(), &caps);
        assert_eq!(names(&result), vec!["A1", "A2", "A3", "B", "C"]);

        // Criteria override wins over configured sort
        let unsorted = FilterCriteria::new().sort(SortOrder::Input);
        assert_eq!(apply(&records, &unsorted, &caps), records);
    }

    #[test]
    fn test_empty_inputs() {
        let caps = Capabilities::default();
        assert!(apply(&[], &FilterCriteria::default(), &caps).is_empty());

        let records = vec![card("Pikachu", 2.0, "AVAILABLE")];
        let nothing = FilterCriteria::new().query("zzz");
        assert!(apply(&records, &nothing, &caps).is_empty());
    }

    #[test]
    fn test_band_histogram() {
        let records = vec![
            card("A", 1.0, ""),
            card("B", 3.0, ""),
            card("C", 3.5, ""),
            card("D", 75.0, ""),
        ];
        let histogram = band_histogram(&records);

        assert_eq!(histogram.total, 4);
        assert_eq!(histogram.unbanded, 1);
        assert_eq!(histogram.bands[0].band, PriceBand::OneToThree);
        assert_eq!(histogram.bands[0].count, 2);
        assert_eq!(histogram.bands[5].count, 1);
    }
}
