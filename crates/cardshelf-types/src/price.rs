use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named price interval used by the price filter.
///
/// Bands are mutually exclusive but deliberately leave gaps between them
/// (for example 3.5 or 0 fall into no band), matching the sheet's pricing
/// convention of whole-dollar tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriceBand {
    /// (0, 3]
    OneToThree,
    /// [4, 5]
    FourToFive,
    /// [6, 10]
    SixToTen,
    /// [11, 25]
    ElevenToTwentyFive,
    /// [26, 50]
    TwentySixToFifty,
    /// (50, inf)
    OverFifty,
}

impl PriceBand {
    pub const ALL: [PriceBand; 6] = [
        PriceBand::OneToThree,
        PriceBand::FourToFive,
        PriceBand::SixToTen,
        PriceBand::ElevenToTwentyFive,
        PriceBand::TwentySixToFifty,
        PriceBand::OverFifty,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            PriceBand::OneToThree => "1-3",
            PriceBand::FourToFive => "4-5",
            PriceBand::SixToTen => "6-10",
            PriceBand::ElevenToTwentyFive => "11-25",
            PriceBand::TwentySixToFifty => "26-50",
            PriceBand::OverFifty => "50+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::OneToThree => "$1–$3",
            PriceBand::FourToFive => "$4–$5",
            PriceBand::SixToTen => "$6–$10",
            PriceBand::ElevenToTwentyFive => "$11–$25",
            PriceBand::TwentySixToFifty => "$26–$50",
            PriceBand::OverFifty => "$50+",
        }
    }

    /// Whether `price` lies inside this band. Non-finite prices never match.
    pub fn contains(&self, price: f64) -> bool {
        if !price.is_finite() {
            return false;
        }
        match self {
            PriceBand::OneToThree => price > 0.0 && price <= 3.0,
            PriceBand::FourToFive => (4.0..=5.0).contains(&price),
            PriceBand::SixToTen => (6.0..=10.0).contains(&price),
            PriceBand::ElevenToTwentyFive => (11.0..=25.0).contains(&price),
            PriceBand::TwentySixToFifty => (26.0..=50.0).contains(&price),
            PriceBand::OverFifty => price > 50.0,
        }
    }

    pub fn classify(price: f64) -> Option<PriceBand> {
        Self::ALL.into_iter().find(|band| band.contains(price))
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPriceBand(pub String);

impl fmt::Display for UnknownPriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown price band '{}' (expected one of: 1-3, 4-5, 6-10, 11-25, 26-50, 50+)",
            self.0
        )
    }
}

impl std::error::Error for UnknownPriceBand {}

impl FromStr for PriceBand {
    type Err = UnknownPriceBand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        PriceBand::ALL
            .into_iter()
            .find(|band| band.token() == token)
            .ok_or_else(|| UnknownPriceBand(token.to_string()))
    }
}

impl TryFrom<String> for PriceBand {
    type Error = UnknownPriceBand;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PriceBand> for String {
    fn from(band: PriceBand) -> Self {
        band.token().to_string()
    }
}

/// Badge text shown next to a price. Purely presentational; the filter
/// contract only knows [`PriceBand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBadge {
    UpToOne,
    UpToThree,
    UpToFive,
    TwentyPlus,
    Standard,
}

impl PriceBadge {
    pub fn classify(price: f64) -> PriceBadge {
        if !price.is_finite() {
            return PriceBadge::Standard;
        }
        if price >= 20.0 {
            return PriceBadge::TwentyPlus;
        }
        match PriceBand::classify(price) {
            Some(PriceBand::OneToThree) if price <= 1.0 => PriceBadge::UpToOne,
            Some(PriceBand::OneToThree) => PriceBadge::UpToThree,
            Some(PriceBand::FourToFive) => PriceBadge::UpToFive,
            _ => PriceBadge::Standard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBadge::UpToOne => "≤1",
            PriceBadge::UpToThree => "≤3",
            PriceBadge::UpToFive => "≤5",
            PriceBadge::TwentyPlus => "≥20",
            PriceBadge::Standard => "Standard",
        }
    }
}

impl fmt::Display for PriceBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
