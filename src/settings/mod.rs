//! Configuration loading and resolution utilities.
//!
//! `load` is the entry point: it layers config files, environment variables
//! and CLI flags, then returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod ui;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
