//! Error types for the time-accounting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the engine or its controller refuses to handle silently.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the time-accounting engine.
///
/// Conditions the engine treats as expected transient state (events with a
/// missing interval, deleting the protected calendar, an unset limit) are
/// never reported through this type.
///
/// # Example
///
/// ```
/// use workaholic_engine::error::EngineError;
///
/// let error = EngineError::EventNotFound {
///     event_id: "evt_001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Event not found: evt_001");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An event was requested but no calendar exists to own it.
    #[error("No calendars available to own a new event")]
    NoCalendars,

    /// The referenced event does not exist in the collection.
    #[error("Event not found: {event_id}")]
    EventNotFound {
        /// The id that was looked up.
        event_id: String,
    },

    /// The referenced calendar does not exist in the collection.
    #[error("Calendar not found: {calendar_id}")]
    CalendarNotFound {
        /// The id that was looked up.
        calendar_id: String,
    },

    /// An interval whose end is not strictly after its start.
    #[error("Invalid interval: end {end} is not after start {start}")]
    InvalidInterval {
        /// The interval start.
        start: NaiveDateTime,
        /// The interval end.
        end: NaiveDateTime,
    },

    /// A week key that is not a `YYYY-MM-DD` date.
    #[error("Invalid week key: {key}")]
    InvalidWeekKey {
        /// The rejected key.
        key: String,
    },

    /// A store slot could not be encoded or written.
    #[error("Store slot '{key}' failed: {message}")]
    Store {
        /// The slot name.
        key: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
