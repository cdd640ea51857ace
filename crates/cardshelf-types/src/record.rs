use serde::{Deserialize, Serialize};

use crate::price::{PriceBadge, PriceBand};
use crate::status::Status;

/// One parsed line of tabular input: trimmed cells, no schema attached.
pub type RawRow = Vec<String>;

/// Logical columns recognized in the sheet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Set,
    Number,
    Name,
    Category,
    Rarity,
    Condition,
    Quantity,
    Price,
    Status,
    ImageDirect,
    ImageUrl,
    ImageLargeUrl,
    Notes,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Set,
        Field::Number,
        Field::Name,
        Field::Category,
        Field::Rarity,
        Field::Condition,
        Field::Quantity,
        Field::Price,
        Field::Status,
        Field::ImageDirect,
        Field::ImageUrl,
        Field::ImageLargeUrl,
        Field::Notes,
    ];

    /// Header text as it appears (lower-cased) in the sheet export.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Set => "set",
            Field::Number => "number",
            Field::Name => "name",
            Field::Category => "category",
            Field::Rarity => "rarity",
            Field::Condition => "condition",
            Field::Quantity => "qty",
            Field::Price => "price_bnd",
            Field::Status => "status",
            Field::ImageDirect => "image_direct",
            Field::ImageUrl => "image_url",
            Field::ImageLargeUrl => "image_large_url",
            Field::Notes => "notes",
        }
    }

    /// Match a header cell (already trimmed and lower-cased).
    pub fn from_header(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.header() == name)
    }
}

/// A normalized catalog item.
///
/// Every field is always present; columns missing from the sheet read as
/// empty text or zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub name: String,
    pub set: String,
    pub number: String,
    pub category: String,
    pub rarity: String,
    pub condition: String,
    pub quantity: f64,
    pub price: f64,
    pub status: Status,
    /// Resolved thumbnail reference (`image_direct`, else `image_url`).
    pub image: String,
    /// Larger preview (`image_large_url`, else `image`).
    pub zoom_image: String,
    pub notes: String,
}

impl InventoryRecord {
    /// Category used for filtering; empty cells fall back to `default`.
    pub fn category_or<'a>(&'a self, default: &'a str) -> &'a str {
        let category = self.category.trim();
        if category.is_empty() {
            default
        } else {
            category
        }
    }

    pub fn price_band(&self) -> Option<PriceBand> {
        PriceBand::classify(self.price)
    }

    pub fn price_badge(&self) -> PriceBadge {
        PriceBadge::classify(self.price)
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}
