pub mod catalog;
pub mod diagnostic;
pub mod layout;
pub mod system;

pub use catalog::{present_bands, present_catalog_list, present_filters, present_record};
pub use diagnostic::present_check;
pub use layout::present_window;
pub use system::{present_config, present_config_init, present_watch_error, present_watch_reload};
