//! Configuration loading and management for the Timecard Engine.
//!
//! This module loads engine settings (daily overtime threshold, day
//! boundary, batch policy) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Batch policy: {:?}", config.config().batch_policy);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::EngineConfig;
