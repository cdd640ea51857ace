use cardshelf_types::PriceBadge;
use serde::Serialize;

/// One record as shown to a shopper. Raw values only; views format them.
#[derive(Debug, Clone, Serialize)]
pub struct RecordViewModel {
    pub name: String,
    pub set: String,
    pub number: String,
    /// Category with the deployment default applied
    pub category: String,
    pub rarity: String,
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    pub price: f64,
    pub price_band: Option<String>,
    pub price_badge: PriceBadge,
    pub status: String,
    pub image: Option<String>,
    pub zoom_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AppliedFilters {
    pub query: Option<String>,
    pub band: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub sort: String,
}

impl AppliedFilters {
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.band.is_none() && self.status.is_none() && self.category.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogListViewModel {
    pub source: String,
    pub records: Vec<RecordViewModel>,
    /// Records in the catalog before filtering
    pub total_count: usize,
    pub matched_count: usize,
    pub applied_filters: AppliedFilters,
    pub warning_count: usize,
}

#[derive(Debug, Serialize)]
pub struct BandRowViewModel {
    pub band: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct BandsViewModel {
    pub source: String,
    pub bands: Vec<BandRowViewModel>,
    pub unbanded: usize,
    pub matched_count: usize,
    pub total_count: usize,
    pub applied_filters: AppliedFilters,
}
