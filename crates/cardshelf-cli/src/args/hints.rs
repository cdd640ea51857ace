pub mod cmd {
    pub const LIST: &str = "cardshelf list";
    pub const LIST_AVAILABLE: &str = "cardshelf list --status AVAILABLE";
    pub const CHECK: &str = "cardshelf check";
    pub const BANDS: &str = "cardshelf bands";
    pub const CONFIG_INIT: &str = "cardshelf config init --source <PATH>";
    pub const CONFIG_SHOW: &str = "cardshelf config show";
}

pub mod fmt {
    pub fn list_limit(limit: usize) -> String {
        format!("cardshelf list --limit {}", limit)
    }

    pub fn list_band(band: &str) -> String {
        format!("cardshelf list --band {}", band)
    }

    pub fn window_scroll(offset: f64) -> String {
        format!("cardshelf window --scroll {}", offset)
    }
}
