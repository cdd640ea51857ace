pub mod capabilities;
pub mod criteria;
pub mod layout;
pub mod price;
pub mod record;
pub mod status;
pub mod warning;

pub use capabilities::{AvailabilityRule, Capabilities, SortOrder, DEFAULT_CATEGORY};
pub use criteria::{CategoryFilter, FilterCriteria, StatusFilter};
pub use layout::{ItemFootprint, ItemPlacement, Viewport, VisibleWindow};
pub use price::{PriceBadge, PriceBand, UnknownPriceBand};
pub use record::{Field, InventoryRecord, RawRow};
pub use status::Status;
pub use warning::LoadWarning;
