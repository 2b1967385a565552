//! Configuration loader and schema types.
//!
//! This module exposes the settings that size the engines (history and skip
//! windows, table capacity), pick playlist defaults and drive the scanner.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;

#[cfg(test)]
mod tests;
