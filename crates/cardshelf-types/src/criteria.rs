use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::capabilities::SortOrder;
use crate::price::PriceBand;
use crate::status::Status;

/// Snapshot of every filter control at one instant.
///
/// Built fresh whenever a control changes and consumed by a single filter
/// evaluation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_band: Option<PriceBand>,
    pub status: StatusFilter,
    pub category: CategoryFilter,
    /// Overrides the deployment's configured ordering when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn price_band(mut self, band: PriceBand) -> Self {
        self.price_band = Some(band);
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// True when no control narrows the result.
    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty()
            && self.price_band.is_none()
            && self.status == StatusFilter::Any
            && self.category == CategoryFilter::All
    }
}

/// Status control of the storefront.
///
/// Tokens: empty = no preference, `AVAILABLE` = only available,
/// `ALL` = everything not sold, any other token = that exact status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    Any,
    OnlyAvailable,
    Unsold,
    Exactly(Status),
}

impl StatusFilter {
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() {
            return StatusFilter::Any;
        }
        if token.eq_ignore_ascii_case("all") {
            return StatusFilter::Unsold;
        }
        match Status::from_raw(token) {
            Status::Available => StatusFilter::OnlyAvailable,
            other => StatusFilter::Exactly(other),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            StatusFilter::Any => "",
            StatusFilter::OnlyAvailable => "AVAILABLE",
            StatusFilter::Unsold => "ALL",
            StatusFilter::Exactly(status) => status.as_str(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StatusFilter::from_token(s))
    }
}

impl From<String> for StatusFilter {
    fn from(value: String) -> Self {
        StatusFilter::from_token(&value)
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.token().to_string()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Category control. `All` (or an empty token) disables the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() || token.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::from_token(s))
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::from_token(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.token().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tokens() {
        assert_eq!(StatusFilter::from_token(""), StatusFilter::Any);
        assert_eq!(StatusFilter::from_token("available"), StatusFilter::OnlyAvailable);
        assert_eq!(StatusFilter::from_token("All"), StatusFilter::Unsold);
        assert_eq!(
            StatusFilter::from_token("sold"),
            StatusFilter::Exactly(Status::Sold)
        );
        assert_eq!(
            StatusFilter::from_token("trade"),
            StatusFilter::Exactly(Status::Other("TRADE".to_string()))
        );
    }

    #[test]
    fn test_category_tokens() {
        assert_eq!(CategoryFilter::from_token(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_token("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_token(" Sealed "),
            CategoryFilter::Only("Sealed".to_string())
        );
    }

    #[test]
    fn test_builder_and_unfiltered() {
        assert!(FilterCriteria::new().is_unfiltered());
        assert!(FilterCriteria::new().query("   ").is_unfiltered());

        let criteria = FilterCriteria::new()
            .query("pika")
            .price_band(PriceBand::OneToThree)
            .status(StatusFilter::OnlyAvailable);
        assert!(!criteria.is_unfiltered());
        assert_eq!(criteria.price_band, Some(PriceBand::OneToThree));
    }

    #[test]
    fn test_criteria_deserializes_from_tokens() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"status": "AVAILABLE", "price_band": "50+"}"#).unwrap();
        assert_eq!(criteria.status, StatusFilter::OnlyAvailable);
        assert_eq!(criteria.price_band, Some(PriceBand::OverFifty));
        assert_eq!(criteria.category, CategoryFilter::All);
    }
}
