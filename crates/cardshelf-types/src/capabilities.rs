use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "Single";

/// Which optional columns and behaviors a storefront deployment uses.
///
/// One pipeline serves every storefront flavor; flavors differ only in
/// these switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Category column drives the category filter and joins the text search.
    pub categories: bool,
    /// Quantity column is maintained (enables stock-aware availability).
    pub quantity: bool,
    /// Notes column is shown to shoppers.
    pub notes: bool,
    pub availability: AvailabilityRule,
    pub sort: SortOrder,
    /// Category assumed for rows whose category cell is empty.
    pub default_category: String,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            categories: true,
            quantity: false,
            notes: false,
            availability: AvailabilityRule::default(),
            sort: SortOrder::default(),
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl Capabilities {
    /// Whether "only available" should also demand stock on hand.
    pub fn requires_stock(&self) -> bool {
        self.quantity && self.availability == AvailabilityRule::StatusAndStock
    }
}

/// What "only available" means for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityRule {
    /// Status is AVAILABLE.
    #[default]
    StatusOnly,
    /// Status is AVAILABLE and quantity > 0.
    StatusAndStock,
}

/// Result ordering of the filter stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep sheet order.
    #[default]
    Input,
    /// Cheapest first; equal prices keep sheet order.
    PriceAscending,
}
