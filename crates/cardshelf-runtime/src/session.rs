use crate::config::Config;
use crate::loader::CatalogSnapshot;
use cardshelf_engine::{apply, compute_window, placements};
use cardshelf_types::{
    Capabilities, FilterCriteria, InventoryRecord, ItemFootprint, ItemPlacement, Viewport,
    VisibleWindow,
};

/// Ticket handed out when a load starts; only the newest ticket may install
/// its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Drives the pure pipeline stages for one interactive view.
///
/// The filtered set is re-derived only after the records, criteria or
/// capabilities change. The window is re-derived only after the filtered
/// count, viewport or footprint changes.
#[derive(Debug, Clone, Default)]
pub struct CatalogSession {
    capabilities: Capabilities,
    criteria: FilterCriteria,
    viewport: Viewport,
    footprint: ItemFootprint,
    snapshot: Option<CatalogSnapshot>,
    latest: u64,
    filtered: Option<Vec<InventoryRecord>>,
    window: Option<(usize, VisibleWindow)>,
    filter_evaluations: usize,
}

impl CatalogSession {
    pub fn new(capabilities: Capabilities, criteria: FilterCriteria) -> Self {
        Self {
            capabilities,
            criteria,
            ..Default::default()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.capabilities.clone(), config.filters.clone()).with_footprint(config.layout)
    }

    pub fn with_footprint(mut self, footprint: ItemFootprint) -> Self {
        self.footprint = footprint;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Start a load; pass the returned ticket to [`CatalogSession::install`].
    pub fn begin_load(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    /// Install a loaded snapshot unless a newer load has started since.
    ///
    /// Returns false when the snapshot was stale and got discarded.
    pub fn install(&mut self, generation: Generation, snapshot: CatalogSnapshot) -> bool {
        if generation.0 != self.latest {
            tracing::debug!(
                stale = generation.0,
                latest = self.latest,
                "discarding stale catalog snapshot"
            );
            return false;
        }
        self.snapshot = Some(snapshot);
        self.filtered = None;
        true
    }

    /// Load-and-install in one step for callers without concurrent loads.
    pub fn replace_snapshot(&mut self, snapshot: CatalogSnapshot) {
        let generation = self.begin_load();
        self.install(generation, snapshot);
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.filtered = None;
        }
    }

    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        if capabilities != self.capabilities {
            self.capabilities = capabilities;
            self.filtered = None;
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.window = None;
        }
    }

    pub fn set_footprint(&mut self, footprint: ItemFootprint) {
        if footprint != self.footprint {
            self.footprint = footprint;
            self.window = None;
        }
    }

    pub fn snapshot(&self) -> Option<&CatalogSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn footprint(&self) -> ItemFootprint {
        self.footprint
    }

    pub fn generation(&self) -> Generation {
        Generation(self.latest)
    }

    /// How many times the filter stage actually ran.
    pub fn filter_evaluations(&self) -> usize {
        self.filter_evaluations
    }

    pub fn filtered(&mut self) -> &[InventoryRecord] {
        if self.filtered.is_none() {
            let records = self
                .snapshot
                .as_ref()
                .map(|snapshot| snapshot.records.as_slice())
                .unwrap_or(&[]);
            self.filtered = Some(apply(records, &self.criteria, &self.capabilities));
            self.filter_evaluations += 1;
        }
        self.filtered.as_deref().unwrap_or(&[])
    }

    pub fn window(&mut self) -> VisibleWindow {
        let count = self.filtered().len();
        match self.window {
            Some((cached_count, window)) if cached_count == count => window,
            _ => {
                let window = compute_window(count, self.viewport, self.footprint);
                self.window = Some((count, window));
                window
            }
        }
    }

    /// Records of the current window, ready to materialize.
    pub fn visible(&mut self) -> &[InventoryRecord] {
        let window = self.window();
        let filtered = self.filtered.as_deref().unwrap_or(&[]);
        &filtered[window.clamped_range(filtered.len())]
    }

    pub fn placements(&mut self) -> Vec<ItemPlacement> {
        let window = self.window();
        let count = self.filtered().len();
        placements(&window, &self.footprint, count)
    }
}
