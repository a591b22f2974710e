//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive the player defaults, the
//! simulated transport, directory scanning, the terminal UI and logging.

mod load;
mod schema;

pub use schema::*;
