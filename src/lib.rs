//! Time-accounting engine for multi-job shift tracking.
//!
//! This crate partitions shift events into pay weeks (Thursday to Wednesday by
//! default), totals worked hours per calendar and per week, and flags weeks
//! whose job hours exceed a configured limit.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
