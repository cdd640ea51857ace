//! Testing utilities for the cardshelf CLI.
//!
//! - [`TestWorld`]: an isolated temp directory with its own config file
//! - [`fixtures`]: sample catalogs shaped like real sheet exports
//! - [`assertions`]: checks over the JSON output of catalog commands

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
