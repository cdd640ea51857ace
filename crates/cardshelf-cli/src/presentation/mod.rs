//! # Presentation Layer
//!
//! MVVM-style output for the CLI. Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(CSV)===> CsvExport
//!                                                                  ==(Text)==> CreateView
//! ```
//!
//! ## Rules
//!
//! * **View models hold raw data.** Prices stay `f64`, statuses stay tokens.
//!   JSON output is an API; formatting belongs to views.
//! * **`ViewMode` is density, not shape.** Minimal prints names for pipes,
//!   Compact one line per item, Standard a table, Verbose every column.
//! * **JSON ignores `ViewMode`.** It always carries the full view model
//!   inside the `{ badge, content, suggestions }` envelope.
//! * **CSV uses sheet column names** where the content is a record list,
//!   so exported rows load back into cardshelf.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to JSON output | `view_models/` |
//! | Decide when to show a tip | `presenters/` |
//! | Change a table column or color | `views/` |
//! | Format a price | `formatters/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, CsvExport, Guidance, OutputFormat, StatusBadge,
    StatusLevel, ViewMode,
};
