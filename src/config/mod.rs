//! Configuration loading and management for the time-accounting engine.
//!
//! This module loads pay-week and storage settings from a YAML file. All
//! settings have defaults, so embedding without a file is supported.
//!
//! # Example
//!
//! ```no_run
//! use workaholic_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/workaholic.yaml").unwrap();
//! println!("Palette: {:?}", config.config().palette);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_PALETTE, DEFAULT_WEEKLY_LIMIT_HOURS, EngineConfig, PersonalCalendarConfig,
    StorageKeys,
};
