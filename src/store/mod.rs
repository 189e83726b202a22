//! Store adapter and application controller.
//!
//! The engine itself is stateless. This module holds the one place state
//! lives: a [`Workspace`] over a [`KeyValueStore`], which loads the slots on
//! open, runs engine operations against snapshots, and persists replacements.

mod kv;
mod workspace;

pub use kv::{KeyValueStore, MemoryStore};
pub use workspace::{NewShift, Workspace};
