// NOTE: cardshelf layering
//
// types    - plain data (records, criteria, geometry), no behavior beyond classification
// engine   - pure pipeline stages: parse -> normalize -> filter -> window
// runtime  - everything with side effects: files, config, watching, memoized sessions
// cli      - argument parsing, handlers and presentation
//
// Handlers never format output themselves; they build view models through
// presenters and hand them to a renderer.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
