use super::enums::SortArg;
use cardshelf_types::{CategoryFilter, FilterCriteria, PriceBand, StatusFilter};
use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (names only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all columns)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Catalog file exported from the sheet (`-` reads stdin); overrides [catalog] source
    #[arg(long, short = 's')]
    pub source: Option<String>,
}

/// Filter controls. Each flag given replaces the config file default.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive text search over name, set, rarity and category
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Price band: 1-3, 4-5, 6-10, 11-25, 26-50, 50+
    #[arg(long)]
    pub band: Option<PriceBand>,

    /// AVAILABLE, ALL (everything not sold), or an exact status such as HOLD
    #[arg(long)]
    pub status: Option<String>,

    /// Category name, or All
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub sort: Option<SortArg>,
}

impl FilterArgs {
    /// Layer these flags over the configured default criteria.
    pub fn apply_to(&self, defaults: &FilterCriteria) -> FilterCriteria {
        let mut criteria = defaults.clone();
        if let Some(query) = &self.query {
            criteria.query = query.clone();
        }
        if let Some(band) = self.band {
            criteria.price_band = Some(band);
        }
        if let Some(status) = &self.status {
            criteria.status = StatusFilter::from_token(status);
        }
        if let Some(category) = &self.category {
            criteria.category = CategoryFilter::from_token(category);
        }
        if let Some(sort) = self.sort {
            criteria.sort = Some(sort.into());
        }
        criteria
    }
}
