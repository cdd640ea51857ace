use cardshelf_runtime::Config;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
    pub config: Config,
}

#[derive(Debug, Serialize)]
pub struct WatchReloadViewModel {
    pub source: String,
    pub generation: u64,
    pub loaded_at: DateTime<Utc>,
    pub total_count: usize,
    pub matched_count: usize,
    pub warning_count: usize,
}

#[derive(Debug, Serialize)]
pub struct WatchErrorViewModel {
    pub source: String,
    pub message: String,
}
